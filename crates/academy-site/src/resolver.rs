//! Content registry and path resolution.
//!
//! Requests resolve through a fixed chain: the exact path, then
//! `{path}/index`, then not found. A disabled document resolves to
//! [`Resolution::Disabled`], which callers render as the not-found state.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::document::{Document, SourceDocument};

/// A resolved document and its Markdown body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Content<'a> {
    /// Document metadata.
    pub document: &'a Document,
    /// Markdown body without frontmatter.
    pub body: &'a str,
}

/// Outcome of resolving a request path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Servable content.
    Found(Content<'a>),
    /// The document exists but is soft-deleted.
    Disabled(&'a Document),
    /// Nothing matches.
    NotFound,
}

impl<'a> Resolution<'a> {
    /// Servable content, if any.
    #[must_use]
    pub fn content(self) -> Option<Content<'a>> {
        match self {
            Self::Found(content) => Some(content),
            Self::Disabled(_) | Self::NotFound => None,
        }
    }
}

/// Resolves request paths to content.
pub trait ContentResolver {
    /// Resolve `path`. Leading and trailing slashes are ignored.
    fn resolve(&self, path: &str) -> Resolution<'_>;
}

/// Merged docs + pages store with path lookups.
///
/// Documents are kept in load order (docs first, then pages). When two
/// documents share a path, the first one is used for lookups and the path is
/// reported by [`ContentRegistry::duplicate_paths`].
#[derive(Clone, Debug, Default)]
pub struct ContentRegistry {
    documents: Vec<Document>,
    bodies: Vec<String>,
    docs_len: usize,
    path_index: HashMap<String, usize>,
    duplicates: Vec<String>,
}

impl ContentRegistry {
    /// Build a registry from loaded collections.
    #[must_use]
    pub fn new(docs: Vec<SourceDocument>, pages: Vec<SourceDocument>) -> Self {
        let docs_len = docs.len();
        let total = docs_len + pages.len();
        let mut documents = Vec::with_capacity(total);
        let mut bodies = Vec::with_capacity(total);
        let mut path_index = HashMap::with_capacity(total);
        let mut duplicates = Vec::new();

        for (i, source) in docs.into_iter().chain(pages).enumerate() {
            match path_index.entry(source.document.path.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(i);
                }
                Entry::Occupied(_) => {
                    tracing::warn!(path = %source.document.path, "Duplicate document path, keeping first");
                    if !duplicates.contains(&source.document.path) {
                        duplicates.push(source.document.path.clone());
                    }
                }
            }
            documents.push(source.document);
            bodies.push(source.body);
        }

        Self {
            documents,
            bodies,
            docs_len,
            path_index,
            duplicates,
        }
    }

    /// All documents in load order (docs, then pages).
    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Documents from the `docs` collection.
    #[must_use]
    pub fn docs(&self) -> &[Document] {
        &self.documents[..self.docs_len]
    }

    /// Documents from the `pages` collection.
    #[must_use]
    pub fn pages(&self) -> &[Document] {
        &self.documents[self.docs_len..]
    }

    /// Get a document by exact path, ignoring the disabled flag.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Document> {
        self.path_index.get(path).map(|&i| &self.documents[i])
    }

    /// Paths used by more than one document.
    #[must_use]
    pub fn duplicate_paths(&self) -> &[String] {
        &self.duplicates
    }

    /// Number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn lookup(&self, path: &str) -> Option<usize> {
        if let Some(&i) = self.path_index.get(path) {
            return Some(i);
        }
        let index_path = if path.is_empty() {
            "index".to_owned()
        } else {
            format!("{path}/index")
        };
        self.path_index.get(&index_path).copied()
    }
}

impl ContentResolver for ContentRegistry {
    fn resolve(&self, path: &str) -> Resolution<'_> {
        let path = path.trim_matches('/');
        let Some(i) = self.lookup(path) else {
            return Resolution::NotFound;
        };

        let document = &self.documents[i];
        if document.disabled {
            return Resolution::Disabled(document);
        }

        Resolution::Found(Content {
            document,
            body: &self.bodies[i],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Collection;

    fn source(collection: Collection, path: &str, body: &str) -> SourceDocument {
        SourceDocument::new(Document::new(collection, path, path), body)
    }

    fn registry() -> ContentRegistry {
        ContentRegistry::new(
            vec![
                source(Collection::Docs, "faq", "# FAQ"),
                source(Collection::Docs, "cours/van", "# VAN"),
            ],
            vec![
                source(Collection::Pages, "nestle/index", "# Nestlé"),
                source(Collection::Pages, "nestle/rapport", "# Rapport"),
                source(Collection::Pages, "section/deep/index", "# Deep"),
            ],
        )
    }

    #[test]
    fn test_collections_split() {
        let registry = registry();
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.docs().len(), 2);
        assert_eq!(registry.pages().len(), 3);
        assert_eq!(registry.pages()[0].path, "nestle/index");
    }

    #[test]
    fn test_resolve_exact() {
        let registry = registry();
        let content = registry.resolve("cours/van").content().unwrap();
        assert_eq!(content.document.path, "cours/van");
        assert_eq!(content.body, "# VAN");
    }

    #[test]
    fn test_resolve_ignores_slashes() {
        let registry = registry();
        assert!(registry.resolve("/faq/").content().is_some());
    }

    #[test]
    fn test_resolve_index_fallback() {
        let registry = registry();
        let content = registry.resolve("nestle").content().unwrap();
        assert_eq!(content.document.path, "nestle/index");
    }

    #[test]
    fn test_resolve_index_fallback_nested() {
        let registry = registry();
        let content = registry.resolve("section/deep").content().unwrap();
        assert_eq!(content.body, "# Deep");
    }

    #[test]
    fn test_resolve_not_found() {
        let registry = registry();
        assert_eq!(registry.resolve("missing"), Resolution::NotFound);
        assert_eq!(registry.resolve(""), Resolution::NotFound);
    }

    #[test]
    fn test_resolve_disabled() {
        let registry = ContentRegistry::new(
            vec![SourceDocument::new(
                Document::new(Collection::Docs, "old", "Old").with_disabled(true),
                "",
            )],
            Vec::new(),
        );
        assert!(matches!(registry.resolve("old"), Resolution::Disabled(doc) if doc.path == "old"));
        assert!(registry.resolve("old").content().is_none());
        assert!(registry.get("old").is_some());
    }

    #[test]
    fn test_duplicate_paths_first_wins() {
        let registry = ContentRegistry::new(
            vec![source(Collection::Docs, "faq", "docs")],
            vec![
                source(Collection::Pages, "faq", "pages"),
                source(Collection::Pages, "faq", "again"),
            ],
        );
        assert_eq!(registry.duplicate_paths(), ["faq".to_owned()]);
        assert_eq!(registry.resolve("faq").content().unwrap().body, "docs");
        assert_eq!(registry.len(), 3);
    }
}
