use axum::response::Html;
use std::sync::Arc;

use crate::api::AppError;
use crate::forms::{RawSearchParams, SearchForm};
use crate::state::AppState;
use crate::views::{render_results, ResultsContext};
use super::types::SearchView;

/// Shared body of every search route / 所有搜索路由的处理逻辑
///
/// Blank or missing `q` renders the empty state without touching Solr.
pub async fn search(
    view: &'static SearchView,
    state: Arc<AppState>,
    raw: RawSearchParams,
) -> Result<Html<String>, AppError> {
    let facet_fields = &state.config.search.facet_fields;

    let query = match SearchForm::validate(&raw) {
        Ok(query) => query,
        Err(e) => {
            tracing::debug!("{}: {}, rendering empty state", view.label, e);
            return Ok(Html(render_results(&ResultsContext {
                label: view.label,
                text: "",
                facet_key: None,
                facet_value: None,
                faceted: view.facets,
                facet_fields,
                page: None,
                facets: None,
            })));
        }
    };

    let index = state.index(view.index);
    let page_size = state.page_size();
    let profile = state.profile(view.profile);

    let (page, facets) = if view.facets {
        index.search_faceted(&query, page_size, &profile).await?
    } else {
        (index.search_plain(&query, page_size, &profile).await?, None)
    };

    tracing::info!(
        "{}: '{}' page {} -> {} results",
        view.label,
        query.text,
        query.page,
        page.total_count
    );

    // Facet params only matter on faceted views
    let (facet_key, facet_value) = if view.facets {
        (query.facet_key.as_deref(), query.facet_value.as_deref())
    } else {
        (None, None)
    };

    Ok(Html(render_results(&ResultsContext {
        label: view.label,
        text: &query.text,
        facet_key,
        facet_value,
        faceted: view.facets,
        facet_fields,
        page: Some(&page),
        facets: facets.as_ref(),
    })))
}
