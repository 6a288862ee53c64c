//! Solr wire format / Solr 请求与响应格式
//!
//! Builds `select` request parameters and decodes the JSON writer output of the
//! `select` and real-time `get` handlers. Nothing here touches the network.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::error::SearchError;
use super::schema::{Document, FacetCount, FacetSummary, Query, QueryProfile, ResultPage};

/// Parameters of one `select` request / select 请求参数
#[derive(Debug, Clone)]
pub struct SelectParams<'a> {
    pub query: &'a Query,
    pub page_size: u32,
    pub facets: bool,
    pub profile: &'a QueryProfile,
}

impl<'a> SelectParams<'a> {
    /// Flatten into query-string pairs / 转换为查询参数
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("q".to_string(), self.query.text.clone()),
            ("start".to_string(), self.query.offset(self.page_size).to_string()),
            ("rows".to_string(), self.page_size.to_string()),
            ("wt".to_string(), "json".to_string()),
        ];

        if self.facets {
            if let Some(key) = &self.query.facet_key {
                pairs.push(("facet".to_string(), "true".to_string()));
                pairs.push(("facet.field".to_string(), key.clone()));
                pairs.push(("facet.mincount".to_string(), "1".to_string()));
            }
            if let Some((key, value)) = self.query.facet_filter() {
                pairs.push(("fq".to_string(), filter_query(key, value)));
            }
        }

        // Profile params never override the paging or query params
        for (k, v) in self.profile {
            if !pairs.iter().any(|(existing, _)| existing == k) {
                pairs.push((k.clone(), v.clone()));
            }
        }

        pairs
    }
}

/// `field:"value"` with the value quoted / 构造过滤查询
///
/// Query-syntax characters and whitespace in the field name are backslash-escaped.
pub fn filter_query(key: &str, value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("{}:\"{}\"", escape_field(key), escaped)
}

fn escape_field(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for c in key.chars() {
        if c.is_whitespace() || "\\+-&|!(){}[]^\"~*?:/".contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Deserialize)]
struct SelectResponse {
    response: ResponseBody,
    #[serde(default)]
    facet_counts: Option<FacetCounts>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseBody {
    num_found: u64,
    #[serde(default)]
    docs: Vec<Document>,
}

#[derive(Debug, Deserialize)]
struct FacetCounts {
    #[serde(default)]
    facet_fields: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct GetResponse {
    doc: Option<Document>,
}

/// Decode a `select` response / 解析 select 响应
///
/// `facet_key` names the field whose counts should be extracted; `None` skips facets.
pub fn parse_select_response(
    body: &str,
    query: &Query,
    page_size: u32,
    facet_key: Option<&str>,
) -> Result<(ResultPage, Option<FacetSummary>), SearchError> {
    let parsed: SelectResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::Upstream(format!("Malformed select response: {}", e)))?;

    let page = ResultPage {
        total_count: parsed.response.num_found,
        page_size,
        current_page: query.page.max(1),
        documents: parsed.response.docs,
    };

    let facets = match facet_key {
        Some(key) => {
            let counts = match parsed
                .facet_counts
                .as_ref()
                .and_then(|fc| fc.facet_fields.get(key))
            {
                Some(list) => parse_facet_list(list)?,
                None => Vec::new(),
            };
            Some(FacetSummary {
                facet_key: key.to_string(),
                counts,
            })
        }
        None => None,
    };

    Ok((page, facets))
}

/// Solr's flat facet list `[v1, c1, v2, c2, ...]` / 解析平铺的分面列表
fn parse_facet_list(list: &Value) -> Result<Vec<FacetCount>, SearchError> {
    let items = list
        .as_array()
        .ok_or_else(|| SearchError::Upstream("Facet field is not a list".to_string()))?;

    if items.len() % 2 != 0 {
        return Err(SearchError::Upstream(
            "Facet list has an odd number of entries".to_string(),
        ));
    }

    items
        .chunks(2)
        .map(|pair| {
            let value = match &pair[0] {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            };
            let count = pair[1].as_u64().ok_or_else(|| {
                SearchError::Upstream(format!("Invalid facet count for '{}'", value))
            })?;
            Ok(FacetCount { value, count })
        })
        .collect()
}

/// Decode a real-time get response / 解析实时获取响应
pub fn parse_get_response(body: &str, id: &str) -> Result<Document, SearchError> {
    let parsed: GetResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::Upstream(format!("Malformed get response: {}", e)))?;
    parsed.doc.ok_or_else(|| SearchError::NotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair<'a>(pairs: &'a [(String, String)], key: &str) -> Vec<&'a str> {
        pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    #[test]
    fn test_plain_params() {
        let query = Query::new("cats").with_page(2);
        let profile = QueryProfile::new();
        let pairs = SelectParams { query: &query, page_size: 10, facets: false, profile: &profile }.to_pairs();

        assert_eq!(pair(&pairs, "q"), vec!["cats"]);
        assert_eq!(pair(&pairs, "start"), vec!["10"]);
        assert_eq!(pair(&pairs, "rows"), vec!["10"]);
        assert_eq!(pair(&pairs, "wt"), vec!["json"]);
        assert!(pair(&pairs, "facet").is_empty());
        assert!(pair(&pairs, "fq").is_empty());
    }

    #[test]
    fn test_plain_params_ignore_facet_fields() {
        let query = Query::new("cats").with_facet(Some("color".into()), Some("black".into()));
        let profile = QueryProfile::new();
        let pairs = SelectParams { query: &query, page_size: 10, facets: false, profile: &profile }.to_pairs();
        assert!(pair(&pairs, "fq").is_empty());
        assert!(pair(&pairs, "facet.field").is_empty());
    }

    #[test]
    fn test_faceted_params_with_filter() {
        let query = Query::new("dogs").with_facet(Some("color".into()), Some("black".into()));
        let profile = QueryProfile::new();
        let pairs = SelectParams { query: &query, page_size: 10, facets: true, profile: &profile }.to_pairs();

        assert_eq!(pair(&pairs, "start"), vec!["0"]);
        assert_eq!(pair(&pairs, "facet"), vec!["true"]);
        assert_eq!(pair(&pairs, "facet.field"), vec!["color"]);
        assert_eq!(pair(&pairs, "fq"), vec!["color:\"black\""]);
    }

    #[test]
    fn test_faceted_params_key_only() {
        let query = Query::new("dogs").with_facet(Some("color".into()), None);
        let profile = QueryProfile::new();
        let pairs = SelectParams { query: &query, page_size: 10, facets: true, profile: &profile }.to_pairs();

        assert_eq!(pair(&pairs, "facet.field"), vec!["color"]);
        assert!(pair(&pairs, "fq").is_empty());
    }

    #[test]
    fn test_faceted_params_without_key() {
        let query = Query::new("dogs").with_facet(None, Some("black".into()));
        let profile = QueryProfile::new();
        let pairs = SelectParams { query: &query, page_size: 10, facets: true, profile: &profile }.to_pairs();

        assert!(pair(&pairs, "facet").is_empty());
        assert!(pair(&pairs, "fq").is_empty());
    }

    #[test]
    fn test_profile_params_appended_but_not_overriding() {
        let query = Query::new("cats");
        let mut profile = QueryProfile::new();
        profile.insert("sort".to_string(), "date desc".to_string());
        profile.insert("rows".to_string(), "500".to_string());
        let pairs = SelectParams { query: &query, page_size: 10, facets: false, profile: &profile }.to_pairs();

        assert_eq!(pair(&pairs, "sort"), vec!["date desc"]);
        assert_eq!(pair(&pairs, "rows"), vec!["10"]);
    }

    #[test]
    fn test_filter_query_escaping() {
        assert_eq!(filter_query("color", "black"), "color:\"black\"");
        assert_eq!(filter_query("title", "say \"hi\""), "title:\"say \\\"hi\\\"\"");
        assert_eq!(filter_query("path", "a\\b"), "path:\"a\\\\b\"");
    }

    #[test]
    fn test_filter_query_escapes_field_name() {
        assert_eq!(filter_query("product type", "x"), "product\\ type:\"x\"");
        assert_eq!(filter_query("a:b", "x"), "a\\:b:\"x\"");
        assert_eq!(filter_query("price_i", "5"), "price_i:\"5\"");
    }

    #[test]
    fn test_parse_select_with_facets() {
        let body = r#"{
            "responseHeader": {"status": 0},
            "response": {"numFound": 25, "start": 0, "docs": [{"id": "1"}, {"id": "2"}]},
            "facet_counts": {"facet_fields": {"color": ["black", 10, "white", 5]}}
        }"#;
        let query = Query::new("dogs");
        let (page, facets) = parse_select_response(body, &query, 10, Some("color")).unwrap();

        assert_eq!(page.total_count, 25);
        assert_eq!(page.documents.len(), 2);
        assert_eq!(page.documents[0].id().as_deref(), Some("1"));

        let facets = facets.unwrap();
        assert_eq!(facets.facet_key, "color");
        assert_eq!(
            facets.counts,
            vec![
                FacetCount { value: "black".into(), count: 10 },
                FacetCount { value: "white".into(), count: 5 },
            ]
        );
    }

    #[test]
    fn test_parse_select_missing_facet_section() {
        let body = r#"{"response": {"numFound": 0, "docs": []}}"#;
        let (page, facets) = parse_select_response(body, &Query::new("x"), 10, Some("color")).unwrap();
        assert!(page.is_empty());
        assert!(facets.unwrap().counts.is_empty());

        let (_, facets) = parse_select_response(body, &Query::new("x"), 10, None).unwrap();
        assert!(facets.is_none());
    }

    #[test]
    fn test_parse_select_malformed() {
        assert!(matches!(
            parse_select_response("<html>", &Query::new("x"), 10, None),
            Err(SearchError::Upstream(_))
        ));
        assert!(matches!(
            parse_select_response(r#"{"error": {"msg": "bad"}}"#, &Query::new("x"), 10, None),
            Err(SearchError::Upstream(_))
        ));

        let odd = r#"{"response": {"numFound": 1, "docs": []}, "facet_counts": {"facet_fields": {"color": ["black"]}}}"#;
        assert!(matches!(
            parse_select_response(odd, &Query::new("x"), 10, Some("color")),
            Err(SearchError::Upstream(_))
        ));
    }

    #[test]
    fn test_parse_get() {
        let doc = parse_get_response(r#"{"doc": {"id": "abc", "title": "A"}}"#, "abc").unwrap();
        assert_eq!(doc.id().as_deref(), Some("abc"));

        assert!(matches!(
            parse_get_response(r#"{"doc": null}"#, "missing"),
            Err(SearchError::NotFound(id)) if id == "missing"
        ));
        assert!(matches!(
            parse_get_response("nope", "x"),
            Err(SearchError::Upstream(_))
        ));
    }
}
