use axum::http::StatusCode;
use db::models::user::UserRole;
use serde_json::json;

use crate::helpers::app::{create_user, make_test_app, send};

#[tokio::test]
async fn register_creates_student_and_returns_token() {
    let (app, _db) = make_test_app().await;

    let (status, json) = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "password": "password123",
            "batch_id": "b1",
            "batch_name": "Batch 1"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["user"]["role"], "student");
    assert_eq!(json["data"]["user"]["batch_id"], "b1");
    assert!(json["data"]["user"].get("password_hash").is_none());

    let token = json["data"]["token"].as_str().unwrap();
    let (status, me) = send(&app, "GET", "/api/auth/me", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["data"]["email"], "ada@example.com");
}

#[tokio::test]
async fn register_validates_body() {
    let (app, _db) = make_test_app().await;

    let (status, json) = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "name": "A", "email": "not-an-email", "password": "short" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(
        json["message"],
        "Invalid email format; Password must be at least 8 characters"
    );
}

#[tokio::test]
async fn register_duplicate_email_conflicts() {
    let (app, db) = make_test_app().await;
    create_user(&db, "ada@example.com", UserRole::Student, None).await;

    let (status, json) = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "name": "Ada", "email": "ada@example.com", "password": "password123" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["message"], "A user with this email already exists");
}

#[tokio::test]
async fn login_with_correct_and_wrong_password() {
    let (app, db) = make_test_app().await;
    create_user(&db, "tess@example.com", UserRole::Trainer, None).await;

    let (status, json) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "tess@example.com", "password": "password123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["user"]["role"], "trainer");
    assert!(json["data"]["token"].as_str().is_some());

    let (status, json) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "tess@example.com", "password": "wrong-password" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Invalid email or password");
}

#[tokio::test]
async fn me_requires_token() {
    let (app, _db) = make_test_app().await;
    let (status, json) = send(&app, "GET", "/api/auth/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["success"], false);

    let (status, _) = send(&app, "GET", "/api/auth/me", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
