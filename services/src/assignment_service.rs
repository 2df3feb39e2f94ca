use std::collections::HashMap;

use chrono::{DateTime, Utc};
use db::models::{
    assignment::{AssignmentFields, Model},
    code_mapping::CodeMapping,
    submission::{self, SubmissionStatus},
};
use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::error::ServiceError;
use crate::templates;

#[derive(Debug, Clone)]
pub struct CreateAssignment {
    pub title: String,
    pub description: String,
    pub language: String,
    pub due_date: DateTime<Utc>,
    pub default_code: CodeMapping,
}

#[derive(Debug, Clone)]
pub struct EditAssignment {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub language: String,
    pub due_date: DateTime<Utc>,
    pub default_code: CodeMapping,
}

/// Where a student stands on one assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentProgress {
    Pending,
    Submitted,
    Reviewed,
}

impl From<SubmissionStatus> for StudentProgress {
    fn from(status: SubmissionStatus) -> Self {
        match status {
            SubmissionStatus::Submitted => StudentProgress::Submitted,
            SubmissionStatus::Reviewed => StudentProgress::Reviewed,
        }
    }
}

/// An assignment as listed for one student.
#[derive(Debug, Clone, Serialize)]
pub struct StudentAssignment {
    #[serde(flatten)]
    pub assignment: Model,
    pub status: StudentProgress,
    pub is_overdue: bool,
    pub submitted_at: Option<DateTime<Utc>>,
    pub rating: Option<i32>,
}

fn checked_fields(
    title: String,
    description: String,
    language: String,
    due_date: DateTime<Utc>,
    default_code: CodeMapping,
) -> Result<AssignmentFields, ServiceError> {
    let title = title.trim().to_string();
    if title.is_empty() {
        return Err(ServiceError::Validation("Title is required".into()));
    }
    let language = language.trim().to_string();
    if !templates::is_known(&language) {
        return Err(ServiceError::Validation(format!(
            "Unknown language template '{language}'. Expected one of: {}",
            templates::all_tags().join(", ")
        )));
    }
    default_code.validate()?;

    Ok(AssignmentFields {
        title,
        description,
        language,
        due_date,
        default_code,
    })
}

pub struct AssignmentService;

impl AssignmentService {
    pub async fn create(
        db: &DatabaseConnection,
        params: CreateAssignment,
    ) -> Result<Model, ServiceError> {
        let fields = checked_fields(
            params.title,
            params.description,
            params.language,
            params.due_date,
            params.default_code,
        )?;
        let assignment = Model::create(db, fields).await?;
        tracing::info!(assignment_id = assignment.id, "Assignment created");
        Ok(assignment)
    }

    pub async fn edit(db: &DatabaseConnection, params: EditAssignment) -> Result<Model, ServiceError> {
        let fields = checked_fields(
            params.title,
            params.description,
            params.language,
            params.due_date,
            params.default_code,
        )?;
        let assignment = Model::edit(db, params.id, fields).await?;
        tracing::info!(assignment_id = assignment.id, "Assignment updated");
        Ok(assignment)
    }

    pub async fn get(db: &DatabaseConnection, id: i64) -> Result<Model, ServiceError> {
        Model::find_by_id(db, id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Assignment {id} not found")))
    }

    pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ServiceError> {
        Ok(Model::list_ordered(db).await?)
    }

    /// All assignments, each tagged with the student's own progress on it.
    pub async fn list_for_student(
        db: &DatabaseConnection,
        user_id: i64,
    ) -> Result<Vec<StudentAssignment>, ServiceError> {
        let assignments = Model::list_ordered(db).await?;
        let submissions: HashMap<i64, submission::Model> =
            submission::Model::list_for_user(db, user_id)
                .await?
                .into_iter()
                .map(|s| (s.assignment_id, s))
                .collect();

        let now = Utc::now();
        Ok(assignments
            .into_iter()
            .map(|assignment| {
                let own = submissions.get(&assignment.id);
                StudentAssignment {
                    status: own.map_or(StudentProgress::Pending, |s| s.status.into()),
                    // Only work that is still missing can be overdue.
                    is_overdue: own.is_none() && assignment.is_overdue(now),
                    submitted_at: own.map(|s| s.submitted_at),
                    rating: own.and_then(|s| s.rating),
                    assignment,
                }
            })
            .collect())
    }
}
