pub mod get;
pub mod post;
pub mod put;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;
use get::{get_submission, list_submissions};
use post::ai_review;
use put::review_submission;

pub fn submission_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_submissions))
        .route("/{assignment_id}/{user_id}", get(get_submission))
        .route("/{assignment_id}/{user_id}/review", put(review_submission))
        .route("/{assignment_id}/{user_id}/ai-review", post(ai_review))
}
