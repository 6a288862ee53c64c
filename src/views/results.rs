//! Search result pages / 搜索结果页面

use crate::search::{FacetSummary, ResultPage};

use super::{escape_html, layout, search_href};

/// Everything a result page needs / 结果页渲染数据
#[derive(Debug, Clone)]
pub struct ResultsContext<'a> {
    /// View label, also the route the links point back to / 视图标签
    pub label: &'a str,
    /// Search text as typed (empty for the empty state) / 搜索文本
    pub text: &'a str,
    pub facet_key: Option<&'a str>,
    pub facet_value: Option<&'a str>,
    /// Whether the view shows the facet sidebar / 是否显示分面栏
    pub faceted: bool,
    /// Facet fields offered when no facet key is selected / 可选分面字段
    pub facet_fields: &'a [String],
    /// `None` means no query was executed / 未执行查询时为 None
    pub page: Option<&'a ResultPage>,
    pub facets: Option<&'a FacetSummary>,
}

pub fn render_results(ctx: &ResultsContext<'_>) -> String {
    let mut body = String::new();

    body.push_str(&format!("  <h1>{}</h1>\n", escape_html(ctx.label)));
    body.push_str(&search_form(ctx));

    if ctx.faceted {
        body.push_str(&facet_sidebar(ctx));
    }

    match ctx.page {
        None => body.push_str("  <p class=\"empty\">Enter a search term to see results.</p>\n"),
        Some(page) if page.total_count == 0 => {
            body.push_str(&format!(
                "  <p class=\"empty\">No results for &quot;{}&quot;.</p>\n",
                escape_html(ctx.text)
            ));
        }
        Some(page) => {
            body.push_str(&format!(
                "  <p class=\"meta\">{} results, page {} of {}</p>\n",
                page.total_count,
                page.current_page,
                page.total_pages()
            ));
            body.push_str("  <ol class=\"results\" start=\"");
            body.push_str(&(page.offset() + 1).to_string());
            body.push_str("\">\n");
            for doc in &page.documents {
                let title = escape_html(&doc.title());
                match doc.id() {
                    Some(id) => body.push_str(&format!(
                        "    <li><a href=\"/content?id={}\">{}</a></li>\n",
                        escape_html(&urlencoding::encode(&id)),
                        title
                    )),
                    None => body.push_str(&format!("    <li>{}</li>\n", title)),
                }
            }
            body.push_str("  </ol>\n");
            body.push_str(&pager(ctx, page));
        }
    }

    let title = if ctx.text.is_empty() {
        ctx.label.to_string()
    } else {
        format!("{} - {}", ctx.text, ctx.label)
    };
    layout(&title, &body)
}

fn search_form(ctx: &ResultsContext<'_>) -> String {
    let mut hidden = String::new();
    if let Some(fk) = ctx.facet_key {
        hidden.push_str(&format!(
            "    <input type=\"hidden\" name=\"fk\" value=\"{}\">\n",
            escape_html(fk)
        ));
    }
    if let Some(fa) = ctx.facet_value {
        hidden.push_str(&format!(
            "    <input type=\"hidden\" name=\"fa\" value=\"{}\">\n",
            escape_html(fa)
        ));
    }
    format!(
        "  <form method=\"get\" action=\"/{}\">\n    <input type=\"search\" name=\"q\" value=\"{}\" autofocus>\n{}    <button type=\"submit\">Search</button>\n  </form>\n",
        escape_html(ctx.label),
        escape_html(ctx.text),
        hidden
    )
}

fn facet_sidebar(ctx: &ResultsContext<'_>) -> String {
    let mut out = String::from("  <aside class=\"facets\">\n");

    if ctx.text.is_empty() {
        out.push_str("  </aside>\n");
        return out;
    }

    match ctx.facets {
        Some(summary) => {
            out.push_str(&format!("    <h3>{}</h3>\n    <ul>\n", escape_html(&summary.facet_key)));
            for fc in &summary.counts {
                let href = search_href(ctx.label, ctx.text, 1, Some(&summary.facet_key), Some(&fc.value));
                let class = if ctx.facet_value == Some(fc.value.as_str()) { " class=\"active\"" } else { "" };
                out.push_str(&format!(
                    "      <li{}><a href=\"{}\">{}</a> ({})</li>\n",
                    class,
                    escape_html(&href),
                    escape_html(&fc.value),
                    fc.count
                ));
            }
            out.push_str("    </ul>\n");
            if ctx.facet_value.is_some() {
                let clear = search_href(ctx.label, ctx.text, 1, Some(&summary.facet_key), None);
                out.push_str(&format!("    <a href=\"{}\">Clear filter</a>\n", escape_html(&clear)));
            }
        }
        None => {
            out.push_str("    <h3>Facets</h3>\n    <ul>\n");
            for field in ctx.facet_fields {
                let href = search_href(ctx.label, ctx.text, 1, Some(field), None);
                out.push_str(&format!(
                    "      <li><a href=\"{}\">{}</a></li>\n",
                    escape_html(&href),
                    escape_html(field)
                ));
            }
            out.push_str("    </ul>\n");
        }
    }

    out.push_str("  </aside>\n");
    out
}

fn pager(ctx: &ResultsContext<'_>, page: &ResultPage) -> String {
    let link = |n: u32| search_href(ctx.label, ctx.text, n, ctx.facet_key, ctx.facet_value);
    let mut out = String::from("  <div class=\"pager\">\n");
    if page.has_previous() {
        out.push_str(&format!(
            "    <a rel=\"prev\" href=\"{}\">Previous</a>\n",
            escape_html(&link(page.current_page - 1))
        ));
    }
    out.push_str(&format!(
        "    <span>Page {} of {}</span>\n",
        page.current_page,
        page.total_pages()
    ));
    if page.has_next() {
        out.push_str(&format!(
            "    <a rel=\"next\" href=\"{}\">Next</a>\n",
            escape_html(&link(page.current_page + 1))
        ));
    }
    out.push_str("  </div>\n");
    out
}
