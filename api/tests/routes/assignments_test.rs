use axum::http::StatusCode;
use db::models::code_mapping::CodeMapping;
use db::models::user::UserRole;
use serde_json::json;

use crate::helpers::app::{create_assignment, create_user, make_test_app, sample_files, send};

#[tokio::test]
async fn requires_authentication() {
    let (app, _db) = make_test_app().await;
    let (status, json) = send(&app, "GET", "/api/assignments", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Authentication required");
}

#[tokio::test]
async fn listing_shows_own_progress() {
    let (app, db) = make_test_app().await;
    let (_, token) = create_user(&db, "sam@example.com", UserRole::Student, None).await;
    let first = create_assignment(&db, "First", "react", CodeMapping::new()).await;
    create_assignment(&db, "Second", "node", CodeMapping::new()).await;

    let uri = format!("/api/assignments/{}/submit", first.id);
    let (status, _) = send(
        &app,
        "POST",
        &uri,
        Some(token.as_str()),
        Some(json!({ "files": sample_files("done") })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = send(&app, "GET", "/api/assignments", Some(token.as_str()), None).await;
    assert_eq!(status, StatusCode::OK);
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    let first_item = items.iter().find(|a| a["title"] == "First").unwrap();
    let second_item = items.iter().find(|a| a["title"] == "Second").unwrap();
    assert_eq!(first_item["status"], "submitted");
    assert_eq!(second_item["status"], "pending");
    assert_eq!(second_item["is_overdue"], false);
}

#[tokio::test]
async fn get_unknown_assignment_is_not_found() {
    let (app, db) = make_test_app().await;
    let (_, token) = create_user(&db, "sam@example.com", UserRole::Student, None).await;

    let (status, json) = send(&app, "GET", "/api/assignments/999", Some(token.as_str()), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Assignment 999 not found");
}

#[tokio::test]
async fn practice_moves_from_fresh_to_review_after_submit() {
    let (app, db) = make_test_app().await;
    let (_, token) = create_user(&db, "sam@example.com", UserRole::Student, None).await;
    let assignment = create_assignment(&db, "Counter", "react", CodeMapping::new()).await;
    let practice_uri = format!("/api/assignments/{}/practice", assignment.id);

    let (status, json) = send(&app, "GET", &practice_uri, Some(token.as_str()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["mode"], "fresh");
    assert_eq!(json["data"]["template"], "react");
    assert_eq!(json["data"]["files"]["/App.js"]["active"], true);
    assert!(json["data"]["submission"].is_null());

    let files = sample_files("export default () => <button>+1</button>;");
    let submit_uri = format!("/api/assignments/{}/submit", assignment.id);
    let (status, _) = send(
        &app,
        "POST",
        &submit_uri,
        Some(token.as_str()),
        Some(json!({ "files": files })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = send(&app, "GET", &practice_uri, Some(token.as_str()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["mode"], "review");
    assert_eq!(json["data"]["files"], serde_json::to_value(&files).unwrap());
    assert_eq!(json["data"]["submission"]["status"], "submitted");
}

#[tokio::test]
async fn submitted_files_read_back_unchanged() {
    let (app, db) = make_test_app().await;
    let (student, token) = create_user(&db, "sam@example.com", UserRole::Student, Some("b1")).await;
    let assignment = create_assignment(&db, "Styles", "vanilla", CodeMapping::new()).await;

    let files = json!({
        "/index.js": { "code": "const s = \"tabs\\tand ünïcode\";\n", "hidden": false, "active": true, "readOnly": false },
        "/index.html": { "code": "<div id=\"app\"></div>", "hidden": false, "active": false, "readOnly": true }
    });
    let uri = format!("/api/assignments/{}/submit", assignment.id);
    let (status, json) = send(&app, "POST", &uri, Some(token.as_str()), Some(json!({ "files": files }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["id"], format!("{}_{}", assignment.id, student.id));
    assert_eq!(json["data"]["batch_id"], "b1");

    let (_, mine) = send(&app, "GET", "/api/me/submissions", Some(token.as_str()), None).await;
    assert_eq!(mine["data"][0]["code"], files);
}

#[tokio::test]
async fn submit_rejects_two_active_files() {
    let (app, db) = make_test_app().await;
    let (_, token) = create_user(&db, "sam@example.com", UserRole::Student, None).await;
    let assignment = create_assignment(&db, "Counter", "react", CodeMapping::new()).await;

    let uri = format!("/api/assignments/{}/submit", assignment.id);
    let (status, json) = send(
        &app,
        "POST",
        &uri,
        Some(token.as_str()),
        Some(json!({
            "files": {
                "/a.js": { "code": "a", "active": true },
                "/b.js": { "code": "b", "active": true }
            }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);

    let (status, _) = send(&app, "POST", &uri, Some(token.as_str()), Some(json!({ "files": {} }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn resubmitting_overwrites() {
    let (app, db) = make_test_app().await;
    let (_, token) = create_user(&db, "sam@example.com", UserRole::Student, None).await;
    let assignment = create_assignment(&db, "Counter", "react", CodeMapping::new()).await;
    let uri = format!("/api/assignments/{}/submit", assignment.id);

    for body in ["v1", "v2"] {
        let (status, _) = send(
            &app,
            "POST",
            &uri,
            Some(token.as_str()),
            Some(json!({ "files": sample_files(body) })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, mine) = send(&app, "GET", "/api/me/submissions", Some(token.as_str()), None).await;
    let items = mine["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["version"], 2);
    assert_eq!(items[0]["code"]["/App.js"]["code"], "v2");
}
