//! Inline markup parser.
//!
//! The dialect is deliberately small: `%caption%` code captions,
//! `[label](href)` links and `**bold**` spans. Delimiters are processed in
//! that fixed order and a span consumed by an earlier pass is never
//! re-scanned by a later one, so nested or overlapping markup resolves
//! deterministically instead of failing.

use std::sync::LazyLock;

use regex::Regex;

/// Percent-delimited code caption. Non-greedy and single-line.
static CODE_CAPTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%.*?%").unwrap());

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

/// A typed inline markup node.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum InlineNode {
    /// Literal text.
    Text { value: String },
    /// Text inside `**...**`.
    Bold { value: String },
    /// `[label](href)` hyperlink.
    Link { label: String, href: String },
    /// `%label%` inline code caption (label is trimmed).
    CodeCaption { label: String },
}

impl InlineNode {
    /// Create a [`InlineNode::Text`] node.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text {
            value: value.into(),
        }
    }

    /// Create a [`InlineNode::Bold`] node.
    #[must_use]
    pub fn bold(value: impl Into<String>) -> Self {
        Self::Bold {
            value: value.into(),
        }
    }

    /// Create a [`InlineNode::Link`] node.
    #[must_use]
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            href: href.into(),
        }
    }

    /// Create a [`InlineNode::CodeCaption`] node.
    #[must_use]
    pub fn code_caption(label: impl Into<String>) -> Self {
        Self::CodeCaption {
            label: label.into(),
        }
    }

    /// Visible text of the node, without markup delimiters.
    #[must_use]
    pub fn plain_text(&self) -> &str {
        match self {
            Self::Text { value } | Self::Bold { value } => value,
            Self::Link { label, .. } | Self::CodeCaption { label } => label,
        }
    }
}

/// Parse an inline markup string into nodes.
///
/// Never fails: unterminated delimiters and unmatched brackets are kept as
/// literal text. Always returns at least one node; input without markup
/// (including `""`) is a single [`InlineNode::Text`].
///
/// # Examples
///
/// ```
/// use academy_markup::{InlineNode, parse};
///
/// assert_eq!(parse("%x%"), vec![InlineNode::code_caption("x")]);
/// assert_eq!(parse("a**b"), vec![InlineNode::text("a**b")]);
/// ```
#[must_use]
pub fn parse(input: &str) -> Vec<InlineNode> {
    let mut nodes = Vec::new();
    let mut last = 0;

    for caption in CODE_CAPTION_RE.find_iter(input) {
        scan_links(&input[last..caption.start()], &mut nodes);

        // Both delimiters are single-byte '%'
        let raw = caption.as_str();
        nodes.push(InlineNode::code_caption(raw[1..raw.len() - 1].trim()));

        last = caption.end();
    }
    scan_links(&input[last..], &mut nodes);

    if nodes.is_empty() {
        nodes.push(InlineNode::text(input));
    }
    nodes
}

/// Scan a caption-free segment for links, bold-scanning the text between them.
fn scan_links(segment: &str, out: &mut Vec<InlineNode>) {
    if segment.is_empty() {
        return;
    }

    let mut last = 0;
    for caps in LINK_RE.captures_iter(segment) {
        let (Some(whole), Some(label), Some(href)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        scan_bold(&segment[last..whole.start()], out);
        out.push(InlineNode::link(label.as_str(), href.as_str()));
        last = whole.end();
    }
    scan_bold(&segment[last..], out);
}

/// Split a link-free segment into bold spans and literal text.
fn scan_bold(segment: &str, out: &mut Vec<InlineNode>) {
    if segment.is_empty() {
        return;
    }

    let mut last = 0;
    for caps in BOLD_RE.captures_iter(segment) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            out.push(InlineNode::text(&segment[last..whole.start()]));
        }
        out.push(InlineNode::bold(inner.as_str()));
        last = whole.end();
    }
    if last < segment.len() {
        out.push(InlineNode::text(&segment[last..]));
    }
}
