//! State shared by every handler.

use std::sync::Arc;

use ai::CodeReviewer;
use sea_orm::DatabaseConnection;

/// Cloned into each request by axum's `State` extractor.
///
/// The reviewer sits behind a trait object so tests can swap the Gemini client
/// for a canned one.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    reviewer: Arc<dyn CodeReviewer>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, reviewer: Arc<dyn CodeReviewer>) -> Self {
        Self { db, reviewer }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn reviewer(&self) -> &dyn CodeReviewer {
        self.reviewer.as_ref()
    }
}
