//! Request parameter validation / 请求参数校验

use serde::Deserialize;
use thiserror::Error;

use crate::search::Query;

/// Raw query-string parameters of the search routes / 原始查询参数
///
/// Everything is optional text so malformed values reach validation instead of
/// being rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSearchParams {
    pub q: Option<String>,
    pub page: Option<String>,
    pub fk: Option<String>,
    pub fa: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Search text is missing or blank")]
    MissingQuery,
}

/// Search form / 搜索表单
pub struct SearchForm;

impl SearchForm {
    /// Validate raw params into a [`Query`] / 校验并转换为查询
    pub fn validate(raw: &RawSearchParams) -> Result<Query, ValidationError> {
        let text = non_blank(raw.q.as_deref()).ok_or(ValidationError::MissingQuery)?;

        Ok(Query::new(text)
            .with_page(parse_page(raw.page.as_deref()))
            .with_facet(facet_field(raw.fk.as_deref()), non_blank(raw.fa.as_deref())))
    }
}

/// Parse a page number; anything that is not a positive integer falls back to 1 / 解析页码
pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|&p| p >= 1)
        .unwrap_or(1)
}

/// Facet field name; anything that is not a plain Solr field name is dropped / 分面字段名
fn facet_field(value: Option<&str>) -> Option<String> {
    non_blank(value).filter(|name| {
        name.chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    })
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
