//! Category key to display label table.

use academy_config::CategoryConfig;

/// Ordered category table.
///
/// Order matters for search groups; sidebar sections are ordered by key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryTable {
    entries: Vec<(String, String)>,
}

impl CategoryTable {
    /// Display label for `key`, if configured.
    #[must_use]
    pub fn label(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, label)| label.as_str())
    }

    /// Check whether `key` is configured.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.label(key).is_some()
    }

    /// Iterate `(key, label)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, l)| (k.as_str(), l.as_str()))
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, L> FromIterator<(K, L)> for CategoryTable
where
    K: Into<String>,
    L: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, L)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, l)| (k.into(), l.into()))
                .collect(),
        }
    }
}

impl From<&[CategoryConfig]> for CategoryTable {
    fn from(categories: &[CategoryConfig]) -> Self {
        categories
            .iter()
            .map(|c| (c.key.clone(), c.label.clone()))
            .collect()
    }
}
