use thiserror::Error;

/// Search client errors / 搜索客户端错误
#[derive(Debug, Error)]
pub enum SearchError {
    /// No document with this id / 文档不存在
    #[error("Document not found: {0}")]
    NotFound(String),

    /// Solr unreachable, non-2xx status or undecodable response / 上游服务错误
    #[error("Search service error: {0}")]
    Upstream(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(e: reqwest::Error) -> Self {
        SearchError::Upstream(e.to_string())
    }
}
