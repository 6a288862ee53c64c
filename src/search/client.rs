//! Solr search client / Solr 搜索客户端
//!
//! One [`SolrClient`] per Solr core. Every call is a single HTTP round trip;
//! there are no retries and nothing is cached.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use super::error::SearchError;
use super::schema::{Document, FacetSummary, Query, QueryProfile, ResultPage};
use super::solr::{parse_get_response, parse_select_response, SelectParams};

/// Search operations against one index / 单个索引的搜索操作
#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Fetch one document by id / 按ID获取文档
    async fn get(&self, id: &str) -> Result<Document, SearchError>;

    /// Plain search / 普通搜索
    async fn search_plain(
        &self,
        query: &Query,
        page_size: u32,
        profile: &QueryProfile,
    ) -> Result<ResultPage, SearchError>;

    /// Search with facet counts on `query.facet_key` and an optional facet filter / 分面搜索
    async fn search_faceted(
        &self,
        query: &Query,
        page_size: u32,
        profile: &QueryProfile,
    ) -> Result<(ResultPage, Option<FacetSummary>), SearchError>;
}

/// HTTP client for a Solr core / Solr 核心的 HTTP 客户端
pub struct SolrClient {
    core_url: Url,
    client: Client,
}

impl SolrClient {
    pub fn new(core_url: &str, timeout: Duration) -> Result<Self, SearchError> {
        let core_url = Url::parse(core_url)
            .map_err(|e| SearchError::Upstream(format!("Invalid Solr URL '{}': {}", core_url, e)))?;
        if core_url.cannot_be_a_base() {
            return Err(SearchError::Upstream(format!("Invalid Solr URL '{}'", core_url)));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SearchError::Upstream(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { core_url, client })
    }

    pub fn core_url(&self) -> &Url {
        &self.core_url
    }

    /// `{core}/{handler}` / 拼接请求处理器地址
    fn handler_url(&self, handler: &str) -> Url {
        let mut url = self.core_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(handler);
        }
        url
    }

    async fn fetch(&self, handler: &str, pairs: &[(String, String)]) -> Result<String, SearchError> {
        let url = self.handler_url(handler);
        tracing::debug!("Solr request: {} {:?}", url, pairs);

        let resp = self.client.get(url.clone()).query(pairs).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SearchError::Upstream(format!(
                "Solr returned {} for {}",
                status, url
            )));
        }

        Ok(resp.text().await?)
    }

    async fn select(
        &self,
        query: &Query,
        page_size: u32,
        facets: bool,
        profile: &QueryProfile,
    ) -> Result<(ResultPage, Option<FacetSummary>), SearchError> {
        if query.text.trim().is_empty() {
            let facets = if facets {
                query.facet_key.as_ref().map(|k| FacetSummary {
                    facet_key: k.clone(),
                    counts: Vec::new(),
                })
            } else {
                None
            };
            return Ok((ResultPage::empty(page_size), facets));
        }

        let query = &query.clone().clamp_page(page_size);
        let pairs = SelectParams { query, page_size, facets, profile }.to_pairs();
        let body = self.fetch("select", &pairs).await?;

        let facet_key = if facets { query.facet_key.as_deref() } else { None };
        let (page, summary) = parse_select_response(&body, query, page_size, facet_key)?;

        tracing::debug!(
            "Solr select '{}' page {}: {} of {} documents",
            query.text,
            page.current_page,
            page.documents.len(),
            page.total_count
        );
        Ok((page, summary))
    }
}

#[async_trait]
impl SearchIndex for SolrClient {
    async fn get(&self, id: &str) -> Result<Document, SearchError> {
        let pairs = vec![
            ("id".to_string(), id.to_string()),
            ("wt".to_string(), "json".to_string()),
        ];
        let body = self.fetch("get", &pairs).await?;
        parse_get_response(&body, id)
    }

    async fn search_plain(
        &self,
        query: &Query,
        page_size: u32,
        profile: &QueryProfile,
    ) -> Result<ResultPage, SearchError> {
        let (page, _) = self.select(query, page_size, false, profile).await?;
        Ok(page)
    }

    async fn search_faceted(
        &self,
        query: &Query,
        page_size: u32,
        profile: &QueryProfile,
    ) -> Result<(ResultPage, Option<FacetSummary>), SearchError> {
        self.select(query, page_size, true, profile).await
    }
}
