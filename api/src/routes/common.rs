use chrono::{DateTime, Utc};
use db::models::user::{self, UserRole};
use serde::Serialize;
use util::validation::format_validation_errors;
use validator::Validate;

use crate::response::ApiError;

/// Runs `validator` rules on a request body, joining every message into one error.
pub fn validate_body<T: Validate>(req: &T) -> Result<(), ApiError> {
    req.validate()
        .map_err(|errors| ApiError::bad_request(format_validation_errors(&errors)))
}

/// Public view of a user.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub batch_id: Option<String>,
    pub batch_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<user::Model> for UserResponse {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            batch_id: user.batch_id,
            batch_name: user.batch_name,
            created_at: user.created_at,
        }
    }
}
