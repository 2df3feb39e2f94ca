use axum::http::StatusCode;
use db::models::user::UserRole;

use crate::helpers::app::{create_user, make_test_app, send};

#[tokio::test]
async fn empty_when_nothing_submitted() {
    let (app, db) = make_test_app().await;
    let (_, token) = create_user(&db, "sam@example.com", UserRole::Student, None).await;

    let (status, json) = send(&app, "GET", "/api/me/submissions", Some(token.as_str()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"], serde_json::json!([]));
}

#[tokio::test]
async fn requires_authentication() {
    let (app, _db) = make_test_app().await;
    let (status, _) = send(&app, "GET", "/api/me/submissions", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
