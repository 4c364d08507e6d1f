//! Title search grouped by category.

use serde::Serialize;

use crate::category::CategoryTable;
use crate::document::Document;

/// A search hit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchItem {
    /// Document title.
    pub title: String,
    /// Link target.
    pub href: String,
}

/// Search hits for one category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchGroup {
    /// Category label.
    pub title: String,
    /// Category key.
    pub category: String,
    /// Hits in collection order.
    pub items: Vec<SearchItem>,
}

/// Prebuilt search index over the docs collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchIndex {
    groups: Vec<SearchGroup>,
}

impl SearchIndex {
    /// Build the index.
    ///
    /// Groups follow category-table order. Disabled documents and documents
    /// without a configured category are left out, as are empty groups.
    #[must_use]
    pub fn build(docs: &[Document], categories: &CategoryTable, href_prefix: &str) -> Self {
        let groups = categories
            .iter()
            .map(|(key, label)| SearchGroup {
                title: label.to_owned(),
                category: key.to_owned(),
                items: docs
                    .iter()
                    .filter(|d| !d.disabled && d.category.as_deref() == Some(key))
                    .map(|d| SearchItem {
                        title: d.title.clone(),
                        href: format!("{href_prefix}/{}", d.path),
                    })
                    .collect(),
            })
            .filter(|g| !g.items.is_empty())
            .collect();

        Self { groups }
    }

    /// All groups.
    #[must_use]
    pub fn groups(&self) -> &[SearchGroup] {
        &self.groups
    }

    /// Groups whose items contain `query` in their title (case-insensitive).
    ///
    /// A blank query returns every group.
    #[must_use]
    pub fn query(&self, query: &str) -> Vec<SearchGroup> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.groups.clone();
        }

        self.groups
            .iter()
            .filter_map(|group| {
                let items: Vec<SearchItem> = group
                    .items
                    .iter()
                    .filter(|item| item.title.to_lowercase().contains(&needle))
                    .cloned()
                    .collect();
                (!items.is_empty()).then(|| SearchGroup {
                    title: group.title.clone(),
                    category: group.category.clone(),
                    items,
                })
            })
            .collect()
    }
}
