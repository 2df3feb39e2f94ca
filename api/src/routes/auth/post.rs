use axum::{Json, extract::State, http::StatusCode};
use db::models::user::UserRole;
use serde::{Deserialize, Serialize};
use services::user_service::{RegisterUser, UserService};
use validator::Validate;

use crate::auth::generate_jwt;
use crate::response::{ApiError, ApiResponse, ApiResult, ok};
use crate::routes::common::{UserResponse, validate_body};
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    pub batch_id: Option<String>,
    pub batch_name: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
    pub expires_at: String,
}

fn issue_token(user: UserResponse) -> Result<AuthResponse, ApiError> {
    let (token, expires_at) = generate_jwt(user.id, user.role).map_err(|e| {
        tracing::error!(error = %e, user_id = user.id, "Token encoding failed");
        ApiError::internal("Could not issue token")
    })?;
    Ok(AuthResponse {
        user,
        token,
        expires_at,
    })
}

/// POST /auth/register
///
/// Self-registration always creates a student account.
///
/// - `201 Created` with the user and a token
/// - `400 Bad Request` on validation failure
/// - `409 Conflict` if the email is taken
pub async fn register(
    State(app_state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<AuthResponse> {
    validate_body(&req)?;

    let user = UserService::register(
        app_state.db(),
        RegisterUser {
            name: req.name,
            email: req.email,
            password: req.password,
            role: UserRole::Student,
            batch_id: req.batch_id,
            batch_name: req.batch_name,
        },
    )
    .await?;

    let body = issue_token(user.into())?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(body, "User registered successfully")),
    ))
}

/// POST /auth/login
///
/// - `200 OK` with the user and a token
/// - `401 Unauthorized` for an unknown email or wrong password
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<AuthResponse> {
    validate_body(&req)?;

    let user = UserService::login(app_state.db(), &req.email, &req.password).await?;
    ok(issue_token(user.into())?, "Login successful")
}
