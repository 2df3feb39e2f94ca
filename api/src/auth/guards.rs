use axum::{
    Json,
    body::Body,
    extract::FromRequestParts,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::auth::claims::AuthUser;
use crate::response::{ApiResponse, Empty};

type GuardRejection = (StatusCode, Json<ApiResponse<Empty>>);

/// Decodes the caller and stores it in the request extensions for handlers.
async fn extract_and_insert_authuser(
    req: Request<Body>,
) -> Result<(Request<Body>, AuthUser), GuardRejection> {
    let (mut parts, body) = req.into_parts();
    let user = AuthUser::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::<Empty>::error("Authentication required")),
            )
        })?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user.clone());
    Ok((req, user))
}

/// Basic guard to ensure the request is authenticated.
pub async fn allow_authenticated(
    req: Request<Body>,
    next: Next,
) -> Result<Response, GuardRejection> {
    let (req, _user) = extract_and_insert_authuser(req).await?;

    Ok(next.run(req).await)
}

/// Trainer-only guard.
pub async fn allow_trainer(req: Request<Body>, next: Next) -> Result<Response, GuardRejection> {
    let (req, user) = extract_and_insert_authuser(req).await?;

    if !user.is_trainer() {
        tracing::warn!(user_id = user.0.sub, "Student attempted trainer route");
        return Err((
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error("Trainer access required")),
        ));
    }

    Ok(next.run(req).await)
}
