use crate::seed::Seeder;
use crate::seeds::{STUDENT_EMAIL, TRAINER_EMAIL};
use async_trait::async_trait;
use db::models::{
    assignment,
    submission::{self, NewSubmission},
    user,
};
use sea_orm::{DatabaseConnection, DbErr};
use services::templates;

/// The default student submits the first two assignments; the trainer reviews one.
pub struct SubmissionSeeder;

#[async_trait]
impl Seeder for SubmissionSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let student = user::Model::find_by_email(db, STUDENT_EMAIL)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("{STUDENT_EMAIL} not seeded")))?;
        let trainer = user::Model::find_by_email(db, TRAINER_EMAIL)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("{TRAINER_EMAIL} not seeded")))?;

        let assignments = assignment::Model::list_ordered(db).await?;
        for (i, assignment) in assignments.iter().take(2).enumerate() {
            if submission::Model::find_by_key(db, assignment.id, student.id)
                .await?
                .is_some()
            {
                continue;
            }

            let mut files = if assignment.default_code.is_empty() {
                templates::template_for(&assignment.language).unwrap_or_default()
            } else {
                assignment.default_code.clone()
            };
            if let Some(path) = files.active_path().map(str::to_owned) {
                let code = files
                    .get(&path)
                    .map(|f| format!("{}\n// submitted by {}\n", f.code, student.name))
                    .unwrap_or_default();
                files
                    .update_code(&path, code)
                    .map_err(|e| DbErr::Custom(e.to_string()))?;
            }

            submission::Model::upsert(db, NewSubmission::from_parts(assignment, &student, files))
                .await?;

            if i == 0 {
                submission::Model::review(
                    db,
                    assignment.id,
                    student.id,
                    4,
                    "Good structure. Try extracting the repeated markup into a component.".into(),
                    trainer.id,
                )
                .await?;
            }
        }
        Ok(())
    }
}
