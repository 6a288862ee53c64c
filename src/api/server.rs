use axum::{
    http::StatusCode,
    response::Html,
    Json,
};
use serde_json::{json, Value};

use crate::views::{render_error, render_index};
use super::search::SEARCH_VIEWS;

/// GET /health - 健康检查
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET / and /index - 首页
pub async fn index() -> Html<String> {
    let views: Vec<(&str, bool)> = SEARCH_VIEWS.iter().map(|v| (v.label, v.facets)).collect();
    Html(render_index(&views))
}

/// Fallback for unknown paths / 未知路径
pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(render_error(404, "Page not found.")))
}
