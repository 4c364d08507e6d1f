//! `{APP.KEY}` placeholder substitution.
//!
//! Heading text may reference application constants such as
//! `{APP.LONG_NAME}`. The same table must be used when extracting headings
//! and when rendering them, otherwise table-of-contents anchors drift from
//! the ids on the page.

use std::collections::BTreeMap;

/// Upper bound on substitution passes.
///
/// A replacement value may itself contain placeholders; anything still
/// unresolved after this many passes is a cycle.
const MAX_PASSES: usize = 8;

/// Table of `{APP.KEY}` replacement strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Placeholders {
    values: BTreeMap<String, String>,
}

impl Placeholders {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a replacement for `{APP.<key>}`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add or replace the value for `{APP.<key>}`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Check whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Substitute every known placeholder in `text`.
    ///
    /// Repeats until no known placeholder remains so that values referring
    /// to other placeholders are expanded too. Unknown placeholders are left
    /// as written.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let mut current = text.to_owned();
        if self.values.is_empty() || !current.contains("{APP.") {
            return current;
        }

        for _ in 0..MAX_PASSES {
            let mut changed = false;
            for (key, value) in &self.values {
                let token = format!("{{APP.{key}}}");
                if current.contains(&token) {
                    current = current.replace(&token, value);
                    changed = true;
                }
            }
            if !changed {
                return current;
            }
        }

        tracing::warn!(
            text = %text,
            "Placeholder substitution did not settle, check for self-referencing values"
        );
        current
    }
}

impl<K, V> FromIterator<(K, V)> for Placeholders
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut placeholders = Self::new();
        for (key, value) in iter {
            placeholders.insert(key, value);
        }
        placeholders
    }
}
