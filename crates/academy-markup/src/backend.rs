//! Render backend trait for inline nodes.
//!
//! Each [`InlineNode`] variant maps to exactly one backend function. A site
//! that wants a different look for one element implements the trait and
//! overrides only that function; the defaults stay in place for the rest.

use crate::html::escape_html;
use crate::inline::InlineNode;
use crate::task::TaskItem;

/// Backend trait for format-specific inline rendering.
pub trait InlineBackend {
    /// Render literal text.
    fn text(value: &str, out: &mut String) {
        out.push_str(&escape_html(value));
    }

    /// Render a bold span.
    fn bold(value: &str, out: &mut String);

    /// Render a hyperlink.
    ///
    /// # Arguments
    ///
    /// * `label` - Visible link text
    /// * `href` - Link target as written in the source
    /// * `out` - Output buffer to write to
    fn link(label: &str, href: &str, out: &mut String);

    /// Render an inline code caption.
    fn code_caption(label: &str, out: &mut String);

    /// Render a task list marker.
    ///
    /// Default renders nothing, leaving the item content unchanged.
    fn task_marker(_checked: bool, _out: &mut String) {}
}

/// Render a sequence of inline nodes with backend `B`.
#[must_use]
pub fn render_inline<B: InlineBackend>(nodes: &[InlineNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            InlineNode::Text { value } => B::text(value, &mut out),
            InlineNode::Bold { value } => B::bold(value, &mut out),
            InlineNode::Link { label, href } => B::link(label, href, &mut out),
            InlineNode::CodeCaption { label } => B::code_caption(label, &mut out),
        }
    }
    out
}

/// Render a task item (marker followed by its inline content) with backend `B`.
#[must_use]
pub fn render_task_item<B: InlineBackend>(item: &TaskItem) -> String {
    let mut out = String::new();
    B::task_marker(item.checked, &mut out);
    out.push_str(&render_inline::<B>(&item.content));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Backend that re-emits the source dialect.
    struct MarkupBackend;

    impl InlineBackend for MarkupBackend {
        fn text(value: &str, out: &mut String) {
            out.push_str(value);
        }

        fn bold(value: &str, out: &mut String) {
            out.push_str("**");
            out.push_str(value);
            out.push_str("**");
        }

        fn link(label: &str, href: &str, out: &mut String) {
            out.push('[');
            out.push_str(label);
            out.push_str("](");
            out.push_str(href);
            out.push(')');
        }

        fn code_caption(label: &str, out: &mut String) {
            out.push('%');
            out.push_str(label);
            out.push('%');
        }

        fn task_marker(checked: bool, out: &mut String) {
            out.push_str(if checked { "[x] " } else { "[ ] " });
        }
    }

    #[test]
    fn test_render_reconstructs_source_markup() {
        let source = "Use **bold**, [a link](/docs/faq) and %EBITDA% here";
        let nodes = crate::parse(source);

        assert_eq!(render_inline::<MarkupBackend>(&nodes), source);
    }

    #[test]
    fn test_render_empty_nodes() {
        assert_eq!(render_inline::<MarkupBackend>(&[]), "");
    }

    #[test]
    fn test_render_task_item_with_marker() {
        let item = crate::parse_task_item("[x] done **now**").unwrap();

        assert_eq!(render_task_item::<MarkupBackend>(&item), "[x] done **now**");
    }
}
