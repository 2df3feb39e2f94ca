use axum::{
    Extension, Json,
    extract::{Path, State},
};
use db::models::{code_mapping::CodeMapping, submission};
use serde::Deserialize;
use services::submission_service::{SubmissionService, SubmitSolution};

use crate::auth::claims::AuthUser;
use crate::response::{ApiResult, ok};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    /// The editor's file map, exactly as the widget reports it.
    pub files: CodeMapping,
}

/// POST /assignments/{assignment_id}/submit
///
/// Stores the caller's files under the `(assignment, student)` key,
/// replacing an earlier submission and any review it had.
///
/// - `400 Bad Request` for an empty file map or more than one active file
/// - `404 Not Found` for an unknown assignment
pub async fn submit(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(assignment_id): Path<i64>,
    Json(req): Json<SubmitRequest>,
) -> ApiResult<submission::Model> {
    let saved = SubmissionService::submit(
        app_state.db(),
        SubmitSolution {
            assignment_id,
            user_id: claims.sub,
            files: req.files,
        },
    )
    .await?;
    ok(saved, "Submission saved successfully")
}
