//! `/assignments`: the student side of the assignment lifecycle.

pub mod get;
pub mod post;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;
use get::{get_assignment, get_practice, list_assignments};
use post::submit;

pub fn assignment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_assignments))
        .route("/{assignment_id}", get(get_assignment))
        .route("/{assignment_id}/practice", get(get_practice))
        .route("/{assignment_id}/submit", post(submit))
}
