//! `/trainer`: authoring assignments and reviewing submissions.

pub mod assignments;
pub mod submissions;
pub mod users;

use axum::Router;

use crate::state::AppState;

pub fn trainer_routes() -> Router<AppState> {
    Router::new()
        .nest("/assignments", assignments::assignment_routes())
        .nest("/submissions", submissions::submission_routes())
        .nest("/users", users::user_routes())
}
