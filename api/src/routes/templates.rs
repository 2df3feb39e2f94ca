//! `/templates`: the starter file sets behind each `language` tag.

use axum::{
    Router,
    extract::Path,
    http::StatusCode,
    routing::get,
};
use db::models::code_mapping::CodeMapping;
use serde::Serialize;
use services::templates;

use crate::response::{ApiError, ApiResult, ok};
use crate::state::AppState;

pub fn template_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_templates))
        .route("/{tag}", get(get_template))
}

#[derive(Debug, Serialize)]
pub struct TemplateSummary {
    pub tag: &'static str,
    pub active_file: Option<String>,
    pub files: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TemplateResponse {
    pub tag: String,
    pub files: CodeMapping,
}

/// GET /templates
async fn list_templates() -> ApiResult<Vec<TemplateSummary>> {
    let summaries = templates::all_tags()
        .into_iter()
        .filter_map(|tag| {
            let mapping = templates::template_for(tag)?;
            Some(TemplateSummary {
                tag,
                active_file: mapping.active_path().map(str::to_owned),
                files: mapping.iter().map(|(path, _)| path.clone()).collect(),
            })
        })
        .collect();
    ok(summaries, "Templates retrieved successfully")
}

/// GET /templates/{tag}
///
/// `404` for a tag that is not in the catalogue.
async fn get_template(Path(tag): Path<String>) -> ApiResult<TemplateResponse> {
    let files = templates::template_for(&tag).ok_or_else(|| {
        ApiError::new(StatusCode::NOT_FOUND, format!("Unknown template '{tag}'"))
    })?;
    ok(TemplateResponse { tag, files }, "Template retrieved successfully")
}
