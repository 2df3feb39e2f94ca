use axum::extract::State;
use services::user_service::UserService;

use crate::auth::claims::AuthUser;
use crate::response::{ApiResult, ok};
use crate::routes::common::UserResponse;
use crate::state::AppState;

/// GET /auth/me
///
/// Profile of the bearer of the token. `401` without a valid token.
pub async fn get_me(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> ApiResult<UserResponse> {
    let user = UserService::get(app_state.db(), claims.sub).await?;
    ok(user.into(), "User data retrieved successfully")
}
