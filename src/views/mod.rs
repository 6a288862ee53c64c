//! HTML rendering / HTML 渲染
//!
//! Pages are plain strings built with `format!`. Every value coming from a request or from
//! Solr goes through [`escape_html`]; link parameters go through `urlencoding`.

pub mod content;
pub mod pages;
pub mod results;

pub use content::render_document;
pub use pages::{render_error, render_index};
pub use results::{render_results, ResultsContext};

/// Escape text for HTML element and attribute content / HTML 转义
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Link back to a search view / 搜索页链接
pub fn search_href(
    label: &str,
    text: &str,
    page: u32,
    facet_key: Option<&str>,
    facet_value: Option<&str>,
) -> String {
    let mut href = format!("/{}?q={}", label, urlencoding::encode(text));
    if let Some(fk) = facet_key {
        href.push_str(&format!("&fk={}", urlencoding::encode(fk)));
    }
    if let Some(fa) = facet_value {
        href.push_str(&format!("&fa={}", urlencoding::encode(fa)));
    }
    if page > 1 {
        href.push_str(&format!("&page={}", page));
    }
    href
}

/// Wrap a body into the shared page layout / 页面布局
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>
    body {{ font-family: system-ui, sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; }}
    nav a {{ margin-right: 1rem; }}
    .results li {{ margin: 0.5rem 0; }}
    .meta {{ color: #666; font-size: 0.9rem; }}
    .facets {{ float: right; width: 220px; border-left: 1px solid #eee; padding-left: 1rem; }}
    .facets .active {{ font-weight: bold; }}
    .pager a, .pager span {{ margin-right: 0.75rem; }}
    table.doc td {{ vertical-align: top; padding: 0.25rem 0.75rem; border-bottom: 1px solid #eee; }}
    footer {{ margin-top: 3rem; color: #999; font-size: 0.8rem; }}
  </style>
</head>
<body>
  <nav><a href="/">Home</a></nav>
{body}
  <footer>solr-webtool {version} (built {build_time})</footer>
</body>
</html>
"#,
        title = escape_html(title),
        body = body,
        version = env!("CARGO_PKG_VERSION"),
        build_time = env!("BUILD_TIME"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_search_href() {
        assert_eq!(search_href("search0", "cats", 1, None, None), "/search0?q=cats");
        assert_eq!(search_href("search0", "big cats", 3, None, None), "/search0?q=big%20cats&page=3");
        assert_eq!(
            search_href("search3", "dogs", 2, Some("color"), Some("black & tan")),
            "/search3?q=dogs&fk=color&fa=black%20%26%20tan&page=2"
        );
    }
}
