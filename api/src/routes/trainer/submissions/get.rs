use axum::extract::{Path, Query, State};
use db::models::submission::{self, SubmissionFilter, SubmissionStatus};
use serde::Deserialize;
use services::submission_service::SubmissionService;

use crate::response::{ApiError, ApiResult, ok};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListSubmissionsQuery {
    pub assignment_id: Option<i64>,
    pub user_id: Option<i64>,
    pub batch_id: Option<String>,
    /// `submitted` or `reviewed`.
    pub status: Option<String>,
}

impl ListSubmissionsQuery {
    fn into_filter(self) -> Result<SubmissionFilter, ApiError> {
        let status = match self.status.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<SubmissionStatus>().map_err(|_| {
                ApiError::bad_request(format!(
                    "Invalid status '{raw}'. Expected 'submitted' or 'reviewed'"
                ))
            })?),
        };
        Ok(SubmissionFilter {
            assignment_id: self.assignment_id,
            user_id: self.user_id,
            batch_id: self.batch_id.filter(|b| !b.is_empty()),
            status,
        })
    }
}

/// GET /trainer/submissions?assignment_id=&user_id=&batch_id=&status=
///
/// Every filter is optional and matched by equality. Newest first.
pub async fn list_submissions(
    State(app_state): State<AppState>,
    Query(query): Query<ListSubmissionsQuery>,
) -> ApiResult<Vec<submission::Model>> {
    let filter = query.into_filter()?;
    let submissions = SubmissionService::list(app_state.db(), &filter).await?;
    ok(submissions, "Submissions retrieved successfully")
}

/// GET /trainer/submissions/{assignment_id}/{user_id}
pub async fn get_submission(
    State(app_state): State<AppState>,
    Path((assignment_id, user_id)): Path<(i64, i64)>,
) -> ApiResult<submission::Model> {
    let submission = SubmissionService::get(app_state.db(), assignment_id, user_id).await?;
    ok(submission, "Submission retrieved successfully")
}
