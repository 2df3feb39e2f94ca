use axum::http::StatusCode;

use crate::helpers::app::{make_test_app, send};

#[tokio::test]
async fn lists_every_template() {
    let (app, _db) = make_test_app().await;

    let (status, json) = send(&app, "GET", "/api/templates", None, None).await;
    assert_eq!(status, StatusCode::OK);

    let tags: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["tag"].as_str().unwrap())
        .collect();
    assert_eq!(
        tags,
        vec!["static", "vanilla", "vanilla-ts", "react", "react-ts", "vue", "node"]
    );
    assert_eq!(json["data"][3]["active_file"], "/App.js");
}

#[tokio::test]
async fn fetches_one_template_in_editor_shape() {
    let (app, _db) = make_test_app().await;

    let (status, json) = send(&app, "GET", "/api/templates/react", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["tag"], "react");
    assert_eq!(json["data"]["files"]["/App.js"]["active"], true);
    assert_eq!(json["data"]["files"]["/package.json"]["hidden"], true);
    assert_eq!(json["data"]["files"]["/App.js"]["readOnly"], false);
}

#[tokio::test]
async fn unknown_template_is_not_found() {
    let (app, _db) = make_test_app().await;
    let (status, json) = send(&app, "GET", "/api/templates/cobol", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
}
