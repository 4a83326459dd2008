//! HTML output writer.
//!
//! Renders the report as a standalone page of nested lists: objects become
//! `<li><strong>key:</strong> value</li>`, arrays become `<li>item</li>`.

use std::fs::File;
use std::io::Write;

use serde_json::Value;

use crate::analysis::Report;
use crate::error::Result;

const STYLE: &str = "body { font-family: system-ui, -apple-system, Segoe UI, Roboto, sans-serif; margin: 2rem; }
      .results { max-width: 960px; margin: 0 auto; padding: 1.5rem; border: 1px solid #e5e7eb; border-radius: 12px; }
      h2 { margin-top: 0; }
      ul { line-height: 1.6; }
      .success { color: #065f46; }
      .error { color: #b91c1c; }";

/// Writes the report to an HTML file.
pub fn write_html(report: &Report, output_path: &str) -> Result<()> {
    let html = to_html(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(html.as_bytes())?;
    Ok(())
}

/// Converts the report to an HTML document.
pub fn to_html(report: &Report) -> Result<String> {
    let value = serde_json::to_value(report)?;

    let mut items = String::new();
    if let Value::Object(views) = &value {
        for (key, view) in views {
            items.push_str(&format!(
                "<li><strong>{}:</strong> {}</li>",
                escape(key),
                render_value(view)
            ));
        }
    }

    Ok(page(
        "Analysis Results",
        &format!("<h2 class=\"success\">Analysis Results</h2>\n      <ul>{items}</ul>"),
    ))
}

/// An error page carrying `message`.
pub fn error_html(message: &str) -> String {
    page(
        "Analysis Error",
        &format!(
            "<h2 class=\"error\">Error during analysis</h2>\n      <p>{}</p>",
            escape(message)
        ),
    )
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>
<html>
  <head>
    <meta charset=\"utf-8\" />
    <title>{title}</title>
    <style>
      {STYLE}
    </style>
  </head>
  <body>
    <div class=\"results\">
      {body}
    </div>
  </body>
</html>
"
    )
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let items: String = map
                .iter()
                .map(|(k, v)| format!("<li><strong>{}:</strong> {}</li>", escape(k), render_value(v)))
                .collect();
            format!("<ul>{items}</ul>")
        }
        Value::Array(list) => {
            let items: String = list
                .iter()
                .map(|v| format!("<li>{}</li>", render_value(v)))
                .collect();
            format!("<ul>{items}</ul>")
        }
        Value::String(s) => escape(s),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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
