use axum::{
    Extension,
    extract::{Path, State},
};
use db::models::assignment;
use services::assignment_service::{AssignmentService, StudentAssignment};
use services::submission_service::{Practice, SubmissionService};

use crate::auth::claims::AuthUser;
use crate::response::{ApiResult, ok};
use crate::state::AppState;

/// GET /assignments
///
/// Every assignment, earliest due date first, with the caller's own status
/// (`pending`, `submitted` or `reviewed`) and whether missing work is overdue.
pub async fn list_assignments(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> ApiResult<Vec<StudentAssignment>> {
    let assignments = AssignmentService::list_for_student(app_state.db(), claims.sub).await?;
    ok(assignments, "Assignments retrieved successfully")
}

/// GET /assignments/{assignment_id}
pub async fn get_assignment(
    State(app_state): State<AppState>,
    Path(assignment_id): Path<i64>,
) -> ApiResult<assignment::Model> {
    let assignment = AssignmentService::get(app_state.db(), assignment_id).await?;
    ok(assignment, "Assignment retrieved successfully")
}

/// GET /assignments/{assignment_id}/practice
///
/// Boot data for the editor. `mode` is `review` when the caller already
/// submitted (files are the submission, feedback included) and `fresh`
/// otherwise (files are the assignment's starter code or its template).
pub async fn get_practice(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(assignment_id): Path<i64>,
) -> ApiResult<Practice> {
    let practice = SubmissionService::practice(app_state.db(), assignment_id, claims.sub).await?;
    ok(practice, "Practice session loaded")
}
