pub mod get;

use axum::{Router, routing::get};

use crate::state::AppState;
use get::list_users;

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/", get(list_users))
}
