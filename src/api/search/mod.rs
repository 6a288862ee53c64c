//! Search routes / 搜索路由
//!
//! The search pages differ only in label, index and facet support, so they are
//! registered from the [`SEARCH_VIEWS`] table onto one handler.

pub mod query;
pub mod types;

use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::forms::RawSearchParams;
use crate::state::AppState;

pub use types::{SearchView, SEARCH_VIEWS};

/// Register GET and POST for every search view / 注册搜索视图路由
pub fn routes(mut router: Router<Arc<AppState>>) -> Router<Arc<AppState>> {
    for view in SEARCH_VIEWS {
        let handler = move |State(state): State<Arc<AppState>>, Query(raw): Query<RawSearchParams>| async move {
            query::search(view, state, raw).await
        };
        router = router.route(&view.path(), get(handler).post(handler));
    }
    router
}
