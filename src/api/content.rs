use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::state::{AppState, IndexSelector};
use crate::views::render_document;
use super::AppError;

#[derive(Debug, Deserialize)]
pub struct ContentParams {
    pub id: Option<String>,
}

/// GET /content?id= - 文档详情
pub async fn content(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ContentParams>,
) -> Result<Html<String>, AppError> {
    let id = params
        .id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::NotFound("missing document id".to_string()))?;

    let doc = state.index(IndexSelector::Plain).get(id).await?;
    Ok(Html(render_document(&doc)))
}
