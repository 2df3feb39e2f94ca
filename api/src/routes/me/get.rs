use axum::{Extension, extract::State};
use db::models::submission;
use services::submission_service::SubmissionService;

use crate::auth::claims::AuthUser;
use crate::response::{ApiResult, ok};
use crate::state::AppState;

/// GET /me/submissions
///
/// The caller's submissions, newest first, with any trainer feedback.
pub async fn my_submissions(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> ApiResult<Vec<submission::Model>> {
    let submissions = SubmissionService::list_for_student(app_state.db(), claims.sub).await?;
    ok(submissions, "Submissions retrieved successfully")
}
