//! Search data model / 搜索数据模型
//!
//! Query parameters going to Solr and the result shapes coming back.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Validated search query / 已校验的搜索查询
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Search text / 搜索文本
    pub text: String,
    /// 1-based page number / 页码（从1开始）
    pub page: u32,
    /// Facet field / 分面字段
    pub facet_key: Option<String>,
    /// Facet filter value / 分面过滤值
    pub facet_value: Option<String>,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            page: 1,
            facet_key: None,
            facet_value: None,
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_facet(mut self, key: Option<String>, value: Option<String>) -> Self {
        self.facet_key = key;
        self.facet_value = value;
        self
    }

    /// Last page whose offset still fits Solr's 32-bit `start` / 最大可用页码
    pub fn max_page(page_size: u32) -> u32 {
        let last = i32::MAX as u64 / u64::from(page_size.max(1)) + 1;
        u32::try_from(last).unwrap_or(u32::MAX)
    }

    /// Cap the page at [`Query::max_page`] / 限制页码上限
    pub fn clamp_page(mut self, page_size: u32) -> Self {
        self.page = self.page.min(Self::max_page(page_size));
        self
    }

    /// Result offset for the given page size / 计算结果偏移量
    pub fn offset(&self, page_size: u32) -> u64 {
        u64::from(self.page.max(1) - 1) * u64::from(page_size)
    }

    /// Filter pair, only when both key and value are set / 分面过滤条件
    pub fn facet_filter(&self) -> Option<(&str, &str)> {
        match (&self.facet_key, &self.facet_value) {
            (Some(k), Some(v)) => Some((k.as_str(), v.as_str())),
            _ => None,
        }
    }
}

/// Extra Solr parameters for one query profile slot / 查询配置参数
pub type QueryProfile = BTreeMap<String, String>;

/// Document returned by Solr / Solr返回的文档
///
/// The schema belongs to the Solr core; only `id` is interpreted here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(pub Map<String, Value>);

impl Document {
    pub fn id(&self) -> Option<String> {
        self.0.get("id").and_then(display_value)
    }

    /// Display title: `title`, then `name`, then the id / 显示标题
    pub fn title(&self) -> String {
        ["title", "name"]
            .iter()
            .find_map(|k| self.0.get(*k).and_then(display_value))
            .or_else(|| self.id())
            .unwrap_or_default()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

/// Render a field value as text; arrays use their first element / 字段值转文本
pub fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => items.first().and_then(display_value),
        _ => None,
    }
}

/// One page of results / 一页搜索结果
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPage {
    pub total_count: u64,
    pub page_size: u32,
    pub current_page: u32,
    pub documents: Vec<Document>,
}

impl ResultPage {
    pub fn empty(page_size: u32) -> Self {
        Self {
            total_count: 0,
            page_size,
            current_page: 1,
            documents: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_count.div_ceil(u64::from(self.page_size))
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.current_page.max(1) - 1) * u64::from(self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.current_page) < self.total_pages()
    }
}

/// Facet value count / 分面计数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetCount {
    pub value: String,
    pub count: u64,
}

/// Facet breakdown for one field / 单字段分面统计
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetSummary {
    pub facet_key: String,
    pub counts: Vec<FacetCount>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_query_offset() {
        assert_eq!(Query::new("cats").offset(10), 0);
        assert_eq!(Query::new("cats").with_page(2).offset(10), 10);
        assert_eq!(Query::new("cats").with_page(7).offset(25), 150);
        // page 0 is clamped
        assert_eq!(Query::new("cats").with_page(0).page, 1);
    }

    #[test]
    fn test_clamp_page_keeps_offset_in_i32() {
        let q = Query::new("cats").with_page(u32::MAX).clamp_page(10);
        assert_eq!(q.page, 214_748_365);
        assert!(q.offset(10) <= i32::MAX as u64);

        // page size 1 allows exactly i32::MAX as offset
        let q = Query::new("cats").with_page(u32::MAX).clamp_page(1);
        assert_eq!(q.offset(1), i32::MAX as u64);

        // ordinary pages are untouched
        assert_eq!(Query::new("cats").with_page(3).clamp_page(10).page, 3);
    }

    #[test]
    fn test_facet_filter_needs_both() {
        let q = Query::new("dogs").with_facet(Some("color".into()), Some("black".into()));
        assert_eq!(q.facet_filter(), Some(("color", "black")));

        let q = Query::new("dogs").with_facet(Some("color".into()), None);
        assert_eq!(q.facet_filter(), None);

        let q = Query::new("dogs").with_facet(None, Some("black".into()));
        assert_eq!(q.facet_filter(), None);
    }

    #[test]
    fn test_result_page_paging() {
        let page = ResultPage {
            total_count: 25,
            page_size: 10,
            current_page: 2,
            documents: vec![Document::default(); 10],
        };
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.offset(), 10);
        assert!(page.has_previous());
        assert!(page.has_next());

        let last = ResultPage { current_page: 3, ..page };
        assert!(!last.has_next());

        let empty = ResultPage::empty(10);
        assert_eq!(empty.total_pages(), 0);
        assert!(!empty.has_previous());
        assert!(!empty.has_next());
    }

    #[test]
    fn test_document_title_fallbacks() {
        assert_eq!(doc(json!({"id": "a1", "title": ["First", "Second"]})).title(), "First");
        assert_eq!(doc(json!({"id": "a1", "name": "Named"})).title(), "Named");
        assert_eq!(doc(json!({"id": 42})).title(), "42");
        assert_eq!(doc(json!({})).title(), "");
    }
}
