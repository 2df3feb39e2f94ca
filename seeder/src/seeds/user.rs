use crate::seed::Seeder;
use crate::seeds::{PASSWORD, STUDENT_EMAIL, TRAINER_EMAIL};
use async_trait::async_trait;
use db::models::user::{Model, NewUser, UserRole};
use fake::{
    Fake,
    faker::{internet::en::SafeEmail, name::en::Name},
};
use sea_orm::{DatabaseConnection, DbErr};

const BATCHES: [(&str, &str); 2] = [("batch-a", "Morning Batch"), ("batch-b", "Evening Batch")];

pub struct UserSeeder;

#[async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        if Model::find_by_email(db, TRAINER_EMAIL).await?.is_none() {
            Model::create(
                db,
                NewUser {
                    name: "Default Trainer",
                    email: TRAINER_EMAIL,
                    password: PASSWORD,
                    role: UserRole::Trainer,
                    batch_id: None,
                    batch_name: None,
                },
            )
            .await?;
        }

        if Model::find_by_email(db, STUDENT_EMAIL).await?.is_none() {
            let (batch_id, batch_name) = BATCHES[0];
            Model::create(
                db,
                NewUser {
                    name: "Default Student",
                    email: STUDENT_EMAIL,
                    password: PASSWORD,
                    role: UserRole::Student,
                    batch_id: Some(batch_id),
                    batch_name: Some(batch_name),
                },
            )
            .await?;
        }

        for _ in 0..10 {
            let name: String = Name().fake();
            let email: String = SafeEmail().fake();
            if Model::find_by_email(db, &email).await?.is_some() {
                continue;
            }
            let (batch_id, batch_name) = BATCHES[fastrand::usize(..BATCHES.len())];
            Model::create(
                db,
                NewUser {
                    name: &name,
                    email: &email,
                    password: PASSWORD,
                    role: UserRole::Student,
                    batch_id: Some(batch_id),
                    batch_name: Some(batch_name),
                },
            )
            .await?;
        }

        Ok(())
    }
}
