use async_trait::async_trait;
use db::models::code_mapping::CodeMapping;

use crate::error::AiError;

#[async_trait]
pub trait CodeReviewer: Send + Sync {
    /// Produces free-text review comments for a submission's files.
    async fn review(&self, language: &str, files: &CodeMapping) -> Result<String, AiError>;
}
