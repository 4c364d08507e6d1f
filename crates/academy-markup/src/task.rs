//! Task list items (`[ ] todo`, `[x] done`).

use std::sync::LazyLock;

use regex::Regex;

use crate::inline::{InlineNode, parse};

static TASK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(\[[\sx]\])\s*(.+)$").unwrap());

/// A parsed task list line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskItem {
    /// Whether the box is ticked (`[x]` or `[X]`).
    pub checked: bool,
    /// Inline content after the marker.
    pub content: Vec<InlineNode>,
}

/// Parse a task list line.
///
/// Returns `None` if the line does not start with a `[ ]` / `[x]` marker
/// followed by content.
#[must_use]
pub fn parse_task_item(line: &str) -> Option<TaskItem> {
    let caps = TASK_RE.captures(line)?;
    let marker = caps.get(1)?.as_str();
    let content = caps.get(2)?.as_str();

    Some(TaskItem {
        checked: marker.eq_ignore_ascii_case("[x]"),
        content: parse(content),
    })
}
