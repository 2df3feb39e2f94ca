use ai::AiError;
use db::models::code_mapping::CodeMappingError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("database error: {0}")]
    Database(DbErr),
    #[error("AI review failed: {0}")]
    Ai(#[from] AiError),
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(msg) => ServiceError::NotFound(msg),
            other => ServiceError::Database(other),
        }
    }
}

impl From<CodeMappingError> for ServiceError {
    fn from(err: CodeMappingError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}
