pub mod content;
pub mod error;
pub mod search;
pub mod server;


use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub use error::AppError;

/// Build the application router / 构建路由
pub fn router(state: Arc<AppState>) -> Router {
    let router = Router::new()
        .route("/", get(server::index))
        .route("/index", get(server::index))
        .route("/health", get(server::health_check))
        .route("/content", get(content::content));

    search::routes(router)
        .fallback(server::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
