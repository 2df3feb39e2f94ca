use chrono::{DateTime, Utc};
use db::models::code_mapping::CodeMapping;
use serde::Deserialize;
use validator::Validate;

/// Body of both create and edit; edit replaces every field.
#[derive(Debug, Deserialize, Validate)]
pub struct AssignmentRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[validate(length(min = 1, message = "Language is required"))]
    pub language: String,

    /// RFC 3339 timestamp.
    pub due_date: DateTime<Utc>,

    /// Starter files. Empty means students start from the language template.
    #[serde(default)]
    pub default_code: CodeMapping,
}
