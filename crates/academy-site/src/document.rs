//! Document records produced by the loader.

use academy_markup::Heading;
use serde::Serialize;

/// Collection a document was loaded from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    /// Category-grouped documentation shown in the sidebar.
    Docs,
    /// Free-standing pages, including section `index` pages.
    Pages,
}

impl Collection {
    /// Collection name as used in directory and log output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Docs => "docs",
            Self::Pages => "pages",
        }
    }
}

/// A content document.
///
/// `path` is the file path relative to its collection root without the
/// extension (`"cours/ebitda"`, `"nestle/index"`). It identifies the
/// document across the merged docs + pages list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Unique slug within the merged set.
    pub path: String,
    /// Title from frontmatter.
    pub title: String,
    /// Optional summary used for metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category key, looked up in the category table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Table-of-contents entries in source order.
    pub headings: Vec<Heading>,
    /// Soft-deleted: listed but not served.
    pub disabled: bool,
    /// Source collection.
    pub collection: Collection,
}

impl Document {
    /// Create an enabled document with no category, description or headings.
    #[must_use]
    pub fn new(collection: Collection, path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            description: None,
            category: None,
            headings: Vec::new(),
            disabled: false,
            collection,
        }
    }

    /// Set the category key.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the table-of-contents entries.
    #[must_use]
    pub fn with_headings(mut self, headings: Vec<Heading>) -> Self {
        self.headings = headings;
        self
    }

    /// Mark the document as disabled.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// A loaded document together with its Markdown body (frontmatter removed).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceDocument {
    /// Parsed metadata.
    pub document: Document,
    /// Markdown body.
    pub body: String,
}

impl SourceDocument {
    /// Pair a document with its body.
    #[must_use]
    pub fn new(document: Document, body: impl Into<String>) -> Self {
        Self {
            document,
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static_assertions::assert_impl_all!(Document: Send, Sync, Clone);

    #[test]
    fn test_builder_defaults() {
        let doc = Document::new(Collection::Docs, "cours/ebitda", "EBITDA");
        assert_eq!(doc.path, "cours/ebitda");
        assert!(doc.category.is_none());
        assert!(doc.description.is_none());
        assert!(doc.headings.is_empty());
        assert!(!doc.disabled);
    }

    #[test]
    fn test_builder_setters() {
        let doc = Document::new(Collection::Pages, "nestle/index", "Nestlé")
            .with_category("ressources")
            .with_description("Stage")
            .with_disabled(true);
        assert_eq!(doc.category.as_deref(), Some("ressources"));
        assert_eq!(doc.description.as_deref(), Some("Stage"));
        assert!(doc.disabled);
        assert_eq!(doc.collection, Collection::Pages);
    }

    #[test]
    fn test_serialize_skips_empty_optionals() {
        let doc = Document::new(Collection::Docs, "faq", "FAQ");
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["collection"], "docs");
        assert!(json.get("category").is_none());
        assert!(json.get("description").is_none());
    }
}
