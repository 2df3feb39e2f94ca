use std::sync::Arc;

use axum::http::StatusCode;
use db::models::code_mapping::CodeMapping;
use db::models::user::UserRole;
use serde_json::json;

use crate::helpers::app::{
    FailingReviewer, create_assignment, create_user, make_test_app, make_test_app_with,
    sample_files, send,
};

#[tokio::test]
async fn students_are_forbidden() {
    let (app, db) = make_test_app().await;
    let (_, token) = create_user(&db, "sam@example.com", UserRole::Student, None).await;

    let (status, json) = send(&app, "GET", "/api/trainer/submissions", Some(token.as_str()), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["message"], "Trainer access required");

    let (status, _) = send(&app, "GET", "/api/trainer/submissions", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_and_edit_assignment() {
    let (app, db) = make_test_app().await;
    let (_, token) = create_user(&db, "tess@example.com", UserRole::Trainer, None).await;

    let (status, json) = send(
        &app,
        "POST",
        "/api/trainer/assignments",
        Some(token.as_str()),
        Some(json!({
            "title": "Todo list",
            "description": "Render **todos**",
            "language": "react",
            "due_date": "2030-01-01T00:00:00Z",
            "default_code": sample_files("// start")
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["title"], "Todo list");
    assert_eq!(json["data"]["default_code"]["/App.js"]["code"], "// start");
    let id = json["data"]["id"].as_i64().unwrap();

    let (status, json) = send(
        &app,
        "PUT",
        &format!("/api/trainer/assignments/{id}"),
        Some(token.as_str()),
        Some(json!({
            "title": "Todo list v2",
            "language": "vue",
            "due_date": "2030-02-01T00:00:00Z"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["title"], "Todo list v2");
    assert_eq!(json["data"]["language"], "vue");
    assert_eq!(json["data"]["default_code"], json!({}));
}

#[tokio::test]
async fn create_rejects_unknown_language_and_blank_title() {
    let (app, db) = make_test_app().await;
    let (_, token) = create_user(&db, "tess@example.com", UserRole::Trainer, None).await;

    let (status, json) = send(
        &app,
        "POST",
        "/api/trainer/assignments",
        Some(token.as_str()),
        Some(json!({ "title": "X", "language": "cobol", "due_date": "2030-01-01T00:00:00Z" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("cobol"));

    let (status, json) = send(
        &app,
        "POST",
        "/api/trainer/assignments",
        Some(token.as_str()),
        Some(json!({ "title": "", "language": "react", "due_date": "2030-01-01T00:00:00Z" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Title must be between 1 and 200 characters");
}

#[tokio::test]
async fn edit_unknown_assignment_is_not_found() {
    let (app, db) = make_test_app().await;
    let (_, token) = create_user(&db, "tess@example.com", UserRole::Trainer, None).await;

    let (status, _) = send(
        &app,
        "PUT",
        "/api/trainer/assignments/404",
        Some(token.as_str()),
        Some(json!({ "title": "X", "language": "react", "due_date": "2030-01-01T00:00:00Z" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_filters_and_review_flow() {
    let (app, db) = make_test_app().await;
    let (_, trainer) = create_user(&db, "tess@example.com", UserRole::Trainer, None).await;
    let (sam, sam_token) = create_user(&db, "sam@example.com", UserRole::Student, Some("b1")).await;
    let (_, olive_token) =
        create_user(&db, "olive@example.com", UserRole::Student, Some("b2")).await;
    let assignment = create_assignment(&db, "Counter", "react", CodeMapping::new()).await;

    let submit_uri = format!("/api/assignments/{}/submit", assignment.id);
    let files = sample_files("sam's answer");
    for (token, body) in [(&sam_token, files.clone()), (&olive_token, sample_files("olive"))] {
        let (status, _) = send(
            &app,
            "POST",
            &submit_uri,
            Some(token),
            Some(json!({ "files": body })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, all) = send(&app, "GET", "/api/trainer/submissions", Some(trainer.as_str()), None).await;
    assert_eq!(all["data"].as_array().unwrap().len(), 2);

    let (_, b1) = send(
        &app,
        "GET",
        "/api/trainer/submissions?batch_id=b1",
        Some(trainer.as_str()),
        None,
    )
    .await;
    let b1 = b1["data"].as_array().unwrap();
    assert_eq!(b1.len(), 1);
    assert_eq!(b1[0]["student_email"], "sam@example.com");

    let review_uri = format!(
        "/api/trainer/submissions/{}/{}/review",
        assignment.id, sam.id
    );
    let (status, json) = send(
        &app,
        "PUT",
        &review_uri,
        Some(trainer.as_str()),
        Some(json!({ "rating": 9, "feedback": "wow" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Rating must be between 0 and 5");

    let (status, json) = send(
        &app,
        "PUT",
        &review_uri,
        Some(trainer.as_str()),
        Some(json!({ "rating": 4, "feedback": "  Nice use of state.  " })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "reviewed");
    assert_eq!(json["data"]["rating"], 4);
    assert_eq!(json["data"]["feedback"], "Nice use of state.");
    assert_eq!(json["data"]["code"], serde_json::to_value(&files).unwrap());

    let (_, reviewed) = send(
        &app,
        "GET",
        "/api/trainer/submissions?status=reviewed",
        Some(trainer.as_str()),
        None,
    )
    .await;
    assert_eq!(reviewed["data"].as_array().unwrap().len(), 1);

    let (status, one) = send(
        &app,
        "GET",
        &format!("/api/trainer/submissions/{}/{}", assignment.id, sam.id),
        Some(trainer.as_str()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(one["data"]["feedback"], "Nice use of state.");

    let (status, _) = send(
        &app,
        "GET",
        "/api/trainer/submissions?status=graded",
        Some(trainer.as_str()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn review_of_missing_submission_is_not_found() {
    let (app, db) = make_test_app().await;
    let (_, trainer) = create_user(&db, "tess@example.com", UserRole::Trainer, None).await;

    let (status, _) = send(
        &app,
        "PUT",
        "/api/trainer/submissions/1/2/review",
        Some(trainer.as_str()),
        Some(json!({ "rating": 3, "feedback": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ai_review_returns_text_without_saving() {
    let (app, db) = make_test_app().await;
    let (_, trainer) = create_user(&db, "tess@example.com", UserRole::Trainer, None).await;
    let (sam, sam_token) = create_user(&db, "sam@example.com", UserRole::Student, None).await;
    let assignment = create_assignment(&db, "Counter", "react", CodeMapping::new()).await;
    send(
        &app,
        "POST",
        &format!("/api/assignments/{}/submit", assignment.id),
        Some(sam_token.as_str()),
        Some(json!({ "files": sample_files("x") })),
    )
    .await;

    let base = format!("/api/trainer/submissions/{}/{}", assignment.id, sam.id);
    let (status, json) = send(&app, "POST", &format!("{base}/ai-review"), Some(trainer.as_str()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["review"], "Stub review of 3 react files");

    let (_, stored) = send(&app, "GET", &base, Some(trainer.as_str()), None).await;
    assert_eq!(stored["data"]["status"], "submitted");
    assert!(stored["data"]["feedback"].is_null());
}

#[tokio::test]
async fn ai_review_failure_is_bad_gateway() {
    let (app, db) = make_test_app_with(Arc::new(FailingReviewer)).await;
    let (_, trainer) = create_user(&db, "tess@example.com", UserRole::Trainer, None).await;
    let (sam, sam_token) = create_user(&db, "sam@example.com", UserRole::Student, None).await;
    let assignment = create_assignment(&db, "Counter", "react", CodeMapping::new()).await;
    send(
        &app,
        "POST",
        &format!("/api/assignments/{}/submit", assignment.id),
        Some(sam_token.as_str()),
        Some(json!({ "files": sample_files("x") })),
    )
    .await;

    let uri = format!("/api/trainer/submissions/{}/{}/ai-review", assignment.id, sam.id);
    let (status, json) = send(&app, "POST", &uri, Some(trainer.as_str()), None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["message"], "AI review is currently unavailable");
}

#[tokio::test]
async fn users_can_be_filtered_by_role_and_batch() {
    let (app, db) = make_test_app().await;
    let (_, trainer) = create_user(&db, "tess@example.com", UserRole::Trainer, None).await;
    create_user(&db, "amy@example.com", UserRole::Student, Some("b1")).await;
    create_user(&db, "bob@example.com", UserRole::Student, Some("b2")).await;

    let (status, json) = send(
        &app,
        "GET",
        "/api/trainer/users?role=student&batch_id=b1",
        Some(trainer.as_str()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let users = json["data"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["email"], "amy@example.com");

    let (status, _) = send(&app, "GET", "/api/trainer/users?role=admin", Some(trainer.as_str()), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
