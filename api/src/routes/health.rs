use axum::{Json, Router, response::IntoResponse, routing::get};

use crate::response::ApiResponse;
use crate::state::AppState;

/// `GET /health` for uptime checks and load balancers.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /health
///
/// ```json
/// { "success": true, "data": "OK", "message": "Health check passed" }
/// ```
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::success("OK", "Health check passed"))
}
