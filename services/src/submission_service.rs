use ai::CodeReviewer;
use db::models::{
    assignment,
    code_mapping::CodeMapping,
    submission::{Model, NewSubmission, SubmissionFilter},
    user,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::error::ServiceError;
use crate::templates;

pub const MAX_RATING: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PracticeMode {
    /// No submission yet; the editor opens on starter files.
    Fresh,
    /// Already submitted; the editor shows the stored code next to any feedback.
    Review,
}

/// Everything the practice view needs to boot the editor.
#[derive(Debug, Clone, Serialize)]
pub struct Practice {
    pub mode: PracticeMode,
    pub assignment: assignment::Model,
    /// Template tag the editor runtime is started with.
    pub template: String,
    pub files: CodeMapping,
    pub submission: Option<Model>,
}

#[derive(Debug, Clone)]
pub struct SubmitSolution {
    pub assignment_id: i64,
    pub user_id: i64,
    pub files: CodeMapping,
}

#[derive(Debug, Clone)]
pub struct ReviewSubmission {
    pub assignment_id: i64,
    pub user_id: i64,
    pub rating: i32,
    pub feedback: String,
    pub reviewer_id: i64,
}

pub struct SubmissionService;

impl SubmissionService {
    /// Loads the practice view for a student.
    ///
    /// An existing submission always wins over starter files, so a student who
    /// already submitted lands in review mode.
    pub async fn practice(
        db: &DatabaseConnection,
        assignment_id: i64,
        user_id: i64,
    ) -> Result<Practice, ServiceError> {
        let assignment = assignment::Model::find_by_id(db, assignment_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Assignment {assignment_id} not found")))?;
        let template = assignment.language.clone();

        if let Some(existing) = Model::find_by_key(db, assignment_id, user_id).await? {
            return Ok(Practice {
                mode: PracticeMode::Review,
                files: existing.code.clone(),
                template,
                assignment,
                submission: Some(existing),
            });
        }

        let files = if assignment.default_code.is_empty() {
            templates::template_for(&template).unwrap_or_default()
        } else {
            assignment.default_code.clone()
        };

        Ok(Practice {
            mode: PracticeMode::Fresh,
            files,
            template,
            assignment,
            submission: None,
        })
    }

    /// Stores the student's files, replacing any earlier submission for the pair.
    pub async fn submit(
        db: &DatabaseConnection,
        params: SubmitSolution,
    ) -> Result<Model, ServiceError> {
        params.files.validate_non_empty()?;

        let assignment = assignment::Model::find_by_id(db, params.assignment_id)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Assignment {} not found", params.assignment_id))
            })?;
        let student = user::Model::find_by_id(db, params.user_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("User {} not found", params.user_id)))?;

        let saved =
            Model::upsert(db, NewSubmission::from_parts(&assignment, &student, params.files))
                .await?;
        tracing::info!(
            submission_id = %saved.id,
            version = saved.version,
            files = saved.code.len(),
            "Submission saved"
        );
        Ok(saved)
    }

    pub async fn list(
        db: &DatabaseConnection,
        filter: &SubmissionFilter,
    ) -> Result<Vec<Model>, ServiceError> {
        Ok(Model::filter(db, filter).await?)
    }

    pub async fn list_for_student(
        db: &DatabaseConnection,
        user_id: i64,
    ) -> Result<Vec<Model>, ServiceError> {
        Ok(Model::list_for_user(db, user_id).await?)
    }

    pub async fn get(
        db: &DatabaseConnection,
        assignment_id: i64,
        user_id: i64,
    ) -> Result<Model, ServiceError> {
        Model::find_by_key(db, assignment_id, user_id)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!(
                    "No submission for assignment {assignment_id} by user {user_id}"
                ))
            })
    }

    pub async fn review(
        db: &DatabaseConnection,
        params: ReviewSubmission,
    ) -> Result<Model, ServiceError> {
        if !(0..=MAX_RATING).contains(&params.rating) {
            return Err(ServiceError::Validation(format!(
                "Rating must be between 0 and {MAX_RATING}"
            )));
        }

        let reviewed = Model::review(
            db,
            params.assignment_id,
            params.user_id,
            params.rating,
            params.feedback.trim().to_string(),
            params.reviewer_id,
        )
        .await?;
        tracing::info!(
            submission_id = %reviewed.id,
            reviewer_id = params.reviewer_id,
            rating = params.rating,
            "Submission reviewed"
        );
        Ok(reviewed)
    }

    /// Asks the reviewer model for comments on a stored submission.
    ///
    /// The text is returned to the trainer and not persisted.
    pub async fn ai_review(
        db: &DatabaseConnection,
        reviewer: &dyn CodeReviewer,
        assignment_id: i64,
        user_id: i64,
    ) -> Result<String, ServiceError> {
        let submission = Self::get(db, assignment_id, user_id).await?;
        Ok(reviewer
            .review(&submission.language, &submission.code)
            .await?)
    }
}
