use axum::{
    Json,
    extract::{Path, State},
};
use db::models::assignment;
use services::assignment_service::{AssignmentService, EditAssignment};

use super::common::AssignmentRequest;
use crate::response::{ApiResult, ok};
use crate::routes::common::validate_body;
use crate::state::AppState;

/// PUT /trainer/assignments/{assignment_id}
///
/// Full replace of the editable fields. Existing submissions keep the title and
/// description they were submitted against.
pub async fn edit_assignment(
    State(app_state): State<AppState>,
    Path(assignment_id): Path<i64>,
    Json(req): Json<AssignmentRequest>,
) -> ApiResult<assignment::Model> {
    validate_body(&req)?;

    let updated = AssignmentService::edit(
        app_state.db(),
        EditAssignment {
            id: assignment_id,
            title: req.title,
            description: req.description,
            language: req.language,
            due_date: req.due_date,
            default_code: req.default_code,
        },
    )
    .await?;
    ok(updated, "Assignment updated successfully")
}
