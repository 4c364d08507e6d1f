//! HTML backend for inline rendering.

use std::fmt::Write;

use crate::backend::InlineBackend;

/// HTML inline backend.
///
/// Produces:
/// - `<strong>` for bold spans
/// - `<a target="_blank" rel="noopener noreferrer">` for links
/// - `<code class="code-caption">` for code captions
/// - disabled checkbox inputs for task markers
pub struct HtmlBackend;

impl InlineBackend for HtmlBackend {
    fn bold(value: &str, out: &mut String) {
        write!(out, "<strong>{}</strong>", escape_html(value)).unwrap();
    }

    fn link(label: &str, href: &str, out: &mut String) {
        write!(
            out,
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            escape_html(href),
            escape_html(label)
        )
        .unwrap();
    }

    fn code_caption(label: &str, out: &mut String) {
        write!(out, r#"<code class="code-caption">{}</code>"#, escape_html(label)).unwrap();
    }

    fn task_marker(checked: bool, out: &mut String) {
        if checked {
            out.push_str(r#"<input type="checkbox" checked disabled> "#);
        } else {
            out.push_str(r#"<input type="checkbox" disabled> "#);
        }
    }
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
