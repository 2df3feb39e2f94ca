use axum::extract::{Query, State};
use db::models::user::UserRole;
use serde::Deserialize;
use services::user_service::UserService;

use crate::response::{ApiError, ApiResult, ok};
use crate::routes::common::UserResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    /// `student` or `trainer`.
    pub role: Option<String>,
    pub batch_id: Option<String>,
}

/// GET /trainer/users?role=&batch_id=
///
/// Users ordered by name, for building batch rosters.
pub async fn list_users(
    State(app_state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> ApiResult<Vec<UserResponse>> {
    let role = query
        .role
        .as_deref()
        .filter(|r| !r.is_empty())
        .map(|r| {
            r.parse::<UserRole>().map_err(|_| {
                ApiError::bad_request(format!("Invalid role '{r}'. Expected 'student' or 'trainer'"))
            })
        })
        .transpose()?;
    let batch_id = query.batch_id.as_deref().filter(|b| !b.is_empty());

    let users = UserService::list(app_state.db(), role, batch_id).await?;
    ok(
        users.into_iter().map(UserResponse::from).collect(),
        "Users retrieved successfully",
    )
}
