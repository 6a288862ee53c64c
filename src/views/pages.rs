//! Landing and error pages / 首页与错误页

use super::{escape_html, layout};

/// Landing page listing the search views / 首页
///
/// `views` holds `(label, faceted)` pairs in display order.
pub fn render_index(views: &[(&str, bool)]) -> String {
    let mut body = String::from("  <h1>Search</h1>\n  <ul>\n");
    for (label, faceted) in views {
        let kind = if *faceted { "faceted search" } else { "search" };
        body.push_str(&format!(
            "    <li><a href=\"/{label}\">{label}</a> <span class=\"meta\">{kind}</span></li>\n",
            label = escape_html(label),
            kind = kind
        ));
    }
    body.push_str("  </ul>\n");
    layout("Search", &body)
}

/// Error page; `message` must not carry internal details / 错误页
pub fn render_error(status: u16, message: &str) -> String {
    let body = format!(
        "  <h1>{}</h1>\n  <p>{}</p>\n",
        status,
        escape_html(message)
    );
    layout(&format!("Error {}", status), &body)
}
