pub mod get;

use axum::{Router, routing::get};

use crate::state::AppState;
use get::my_submissions;

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/submissions", get(my_submissions))
}
