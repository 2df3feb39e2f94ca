use crate::seed::{Seeder, run_seeder};
use crate::seeds::{
    assignment::AssignmentSeeder, submission::SubmissionSeeder, user::UserSeeder,
};
use migration::Migrator;
use sea_orm_migration::MigratorTrait;

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    let db = match db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to connect to database: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = Migrator::up(&db, None).await {
        eprintln!("Failed to apply migrations: {e}");
        std::process::exit(1);
    }

    for (seeder, name) in [
        (Box::new(UserSeeder) as Box<dyn Seeder + Send + Sync>, "User"),
        (Box::new(AssignmentSeeder), "Assignment"),
        (Box::new(SubmissionSeeder), "Submission"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
