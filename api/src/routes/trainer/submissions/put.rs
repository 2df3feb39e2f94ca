use axum::{
    Extension, Json,
    extract::{Path, State},
};
use db::models::submission;
use serde::Deserialize;
use services::submission_service::{ReviewSubmission, SubmissionService};
use validator::Validate;

use crate::auth::claims::AuthUser;
use crate::response::{ApiResult, ok};
use crate::routes::common::validate_body;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct ReviewRequest {
    #[validate(range(min = 0, max = 5, message = "Rating must be between 0 and 5"))]
    pub rating: i32,

    #[serde(default)]
    #[validate(length(max = 10000, message = "Feedback must be at most 10000 characters"))]
    pub feedback: String,
}

/// PUT /trainer/submissions/{assignment_id}/{user_id}/review
///
/// Marks the submission `reviewed` with a rating and feedback. The submitted
/// files are not touched.
pub async fn review_submission(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path((assignment_id, user_id)): Path<(i64, i64)>,
    Json(req): Json<ReviewRequest>,
) -> ApiResult<submission::Model> {
    validate_body(&req)?;

    let reviewed = SubmissionService::review(
        app_state.db(),
        ReviewSubmission {
            assignment_id,
            user_id,
            rating: req.rating,
            feedback: req.feedback,
            reviewer_id: claims.sub,
        },
    )
    .await?;
    ok(reviewed, "Review saved successfully")
}
