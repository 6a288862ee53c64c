use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::search::SearchError;
use crate::views::render_error;

/// Errors a handler can end with / 路由错误
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream failure: {0}")]
    Upstream(String),
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::NotFound(id) => AppError::NotFound(id),
            SearchError::Upstream(detail) => AppError::Upstream(detail),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(what) => {
                tracing::info!("Not found: {}", what);
                (
                    StatusCode::NOT_FOUND,
                    Html(render_error(404, "The requested document does not exist.")),
                )
                    .into_response()
            }
            AppError::Upstream(detail) => {
                // Detail stays in the log, never in the page
                tracing::error!("Search service failure: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(render_error(500, "The search service is unavailable. Please try again later.")),
                )
                    .into_response()
            }
        }
    }
}
