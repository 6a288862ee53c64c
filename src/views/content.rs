//! Single document page / 文档详情页面

use serde_json::Value;

use crate::search::schema::display_value;
use crate::search::Document;

use super::{escape_html, layout};

pub fn render_document(doc: &Document) -> String {
    let title = doc.title();
    let mut body = format!("  <h1>{}</h1>\n  <table class=\"doc\">\n", escape_html(&title));

    for (name, value) in doc.fields() {
        body.push_str(&format!(
            "    <tr><td>{}</td><td>{}</td></tr>\n",
            escape_html(name),
            field_html(value)
        ));
    }

    body.push_str("  </table>\n");
    layout(&title, &body)
}

/// Multi-valued fields become a list / 多值字段渲染为列表
fn field_html(value: &Value) -> String {
    match value {
        Value::Array(items) => {
            let lis: String = items
                .iter()
                .map(|v| format!("<li>{}</li>", field_html(v)))
                .collect();
            format!("<ul>{}</ul>", lis)
        }
        Value::Object(_) => escape_html(&value.to_string()),
        other => escape_html(&display_value(other).unwrap_or_default()),
    }
}
