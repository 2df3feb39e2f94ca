use std::sync::Arc;

use ai::{AiError, CodeReviewer};
use api::{auth::generate_jwt, routes::app, state::AppState};
use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Duration, Utc};
use db::models::{
    assignment::{self, AssignmentFields},
    code_mapping::{CodeFile, CodeMapping},
    user::{self, NewUser, UserRole},
};
use db::test_utils::setup_test_db;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

/// Reviewer that answers without any network call.
pub struct StubReviewer;

#[async_trait]
impl CodeReviewer for StubReviewer {
    async fn review(&self, language: &str, files: &CodeMapping) -> Result<String, AiError> {
        Ok(format!("Stub review of {} {language} files", files.len()))
    }
}

/// Reviewer that always fails like an unreachable model.
pub struct FailingReviewer;

#[async_trait]
impl CodeReviewer for FailingReviewer {
    async fn review(&self, _language: &str, _files: &CodeMapping) -> Result<String, AiError> {
        Err(AiError::MissingApiKey)
    }
}

pub async fn make_test_app() -> (Router, DatabaseConnection) {
    make_test_app_with(Arc::new(StubReviewer)).await
}

pub async fn make_test_app_with(reviewer: Arc<dyn CodeReviewer>) -> (Router, DatabaseConnection) {
    let db = setup_test_db().await;
    let router = app(AppState::new(db.clone(), reviewer));
    (router, db)
}

/// Creates a user and a bearer token for them.
pub async fn create_user(
    db: &DatabaseConnection,
    email: &str,
    role: UserRole,
    batch_id: Option<&str>,
) -> (user::Model, String) {
    let user = user::Model::create(
        db,
        NewUser {
            name: email.split('@').next().unwrap_or(email),
            email,
            password: "password123",
            role,
            batch_id,
            batch_name: batch_id.map(|_| "Batch"),
        },
    )
    .await
    .unwrap();
    let (token, _) = generate_jwt(user.id, user.role).unwrap();
    (user, token)
}

pub async fn create_assignment(
    db: &DatabaseConnection,
    title: &str,
    language: &str,
    default_code: CodeMapping,
) -> assignment::Model {
    assignment::Model::create(
        db,
        AssignmentFields {
            title: title.into(),
            description: format!("# {title}"),
            language: language.into(),
            due_date: Utc::now() + Duration::days(3),
            default_code,
        },
    )
    .await
    .unwrap()
}

pub fn sample_files(body: &str) -> CodeMapping {
    CodeMapping::new()
        .with_file("/App.js", CodeFile::new(body).active())
        .unwrap()
        .with_file("/styles.css", CodeFile::new("h1 { color: teal; }"))
        .unwrap()
        .with_file("/package.json", CodeFile::new("{}").hidden())
        .unwrap()
}

/// Sends one request through the router and decodes the JSON envelope.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let req = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}
