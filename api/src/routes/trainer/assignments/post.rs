use axum::{Json, extract::State, http::StatusCode};
use db::models::assignment;
use services::assignment_service::{AssignmentService, CreateAssignment};

use super::common::AssignmentRequest;
use crate::response::{ApiResponse, ApiResult};
use crate::routes::common::validate_body;
use crate::state::AppState;

/// POST /trainer/assignments
///
/// - `201 Created` with the stored assignment
/// - `400 Bad Request` for a blank title, unknown language tag or invalid starter files
pub async fn create_assignment(
    State(app_state): State<AppState>,
    Json(req): Json<AssignmentRequest>,
) -> ApiResult<assignment::Model> {
    validate_body(&req)?;

    let created = AssignmentService::create(
        app_state.db(),
        CreateAssignment {
            title: req.title,
            description: req.description,
            language: req.language,
            due_date: req.due_date,
            default_code: req.default_code,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(created, "Assignment created successfully")),
    ))
}
