//! `/auth`: registration, login and the caller's own profile.

pub mod get;
pub mod post;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;
use get::get_me;
use post::{login, register};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(get_me))
}
