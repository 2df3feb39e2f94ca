//! Route tree mounted under `/api`.
//!
//! - `/health`, `/auth` and `/templates` are public (`/auth/me` checks its own token).
//! - `/assignments` and `/me` require any signed-in user.
//! - `/trainer` requires the trainer role.

use axum::{Router, middleware::from_fn};

use crate::auth::guards::{allow_authenticated, allow_trainer};
use crate::routes::{
    assignments::assignment_routes, auth::auth_routes, health::health_routes, me::me_routes,
    templates::template_routes, trainer::trainer_routes,
};
use crate::state::AppState;

pub mod assignments;
pub mod auth;
pub mod common;
pub mod health;
pub mod me;
pub mod templates;
pub mod trainer;

pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes())
        .nest("/templates", template_routes())
        .nest(
            "/assignments",
            assignment_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest("/me", me_routes().route_layer(from_fn(allow_authenticated)))
        .nest("/trainer", trainer_routes().route_layer(from_fn(allow_trainer)))
        .with_state(app_state)
}

/// The full application as served by `main` and driven by the integration tests.
pub fn app(app_state: AppState) -> Router {
    Router::new().nest("/api", routes(app_state))
}
