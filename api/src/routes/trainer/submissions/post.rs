use axum::extract::{Path, State};
use serde::Serialize;
use services::submission_service::SubmissionService;

use crate::response::{ApiResult, ok};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AiReviewResponse {
    pub review: String,
}

/// POST /trainer/submissions/{assignment_id}/{user_id}/ai-review
///
/// Asks the review model about the stored submission and returns its text.
/// Nothing is saved; the trainer edits it and submits through the review endpoint.
///
/// - `404 Not Found` if there is no submission
/// - `502 Bad Gateway` if the model call fails
pub async fn ai_review(
    State(app_state): State<AppState>,
    Path((assignment_id, user_id)): Path<(i64, i64)>,
) -> ApiResult<AiReviewResponse> {
    let review = SubmissionService::ai_review(
        app_state.db(),
        app_state.reviewer(),
        assignment_id,
        user_id,
    )
    .await?;
    ok(AiReviewResponse { review }, "AI review generated")
}
