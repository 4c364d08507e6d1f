//! Previous/next pagination.
//!
//! Adjacency follows raw collection order (docs, then pages, each sorted by
//! file path), not the sidebar order. Two documents next to each other in
//! the pager may therefore sit in different sidebar sections.

use serde::Serialize;

use crate::document::Document;

/// Neighbours of the current document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Adjacent<'a> {
    /// Document before the current one.
    pub previous: Option<&'a Document>,
    /// Document after the current one.
    pub next: Option<&'a Document>,
}

impl Adjacent<'_> {
    /// Check whether neither neighbour exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.previous.is_none() && self.next.is_none()
    }
}

/// Find the neighbours of `current_path` in `documents`.
///
/// Uses the first document whose path matches. An unknown path has no
/// neighbours.
#[must_use]
pub fn compute_adjacent<'a>(documents: &'a [Document], current_path: &str) -> Adjacent<'a> {
    let Some(index) = documents.iter().position(|d| d.path == current_path) else {
        return Adjacent::default();
    };

    Adjacent {
        previous: index.checked_sub(1).and_then(|i| documents.get(i)),
        next: documents.get(index + 1),
    }
}
