pub mod common;
pub mod post;
pub mod put;

use axum::{
    Router,
    routing::{post, put},
};

use crate::state::AppState;
use post::create_assignment;
use put::edit_assignment;

pub fn assignment_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_assignment))
        .route("/{assignment_id}", put(edit_assignment))
}
