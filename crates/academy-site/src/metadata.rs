//! SEO metadata for document pages.

use academy_config::SiteConfig;
use serde::Serialize;
use serde_json::{Value, json};

use crate::document::Document;

/// Keywords added to every document page.
const BASE_KEYWORDS: [&str; 3] = ["fintech", "finance", "documentation"];

/// Page-level metadata for `<head>` tags and JSON-LD.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PageMetadata {
    /// `"{title} | {site title}"`.
    pub full_title: String,
    /// Document description, or the site description.
    pub description: String,
    /// Absolute URL of the page.
    pub canonical_url: String,
    /// Base keywords plus the document category.
    pub keywords: Vec<String>,
    /// Open Graph type.
    pub og_type: &'static str,
    /// Open Graph image URL.
    pub og_image: String,
    /// Site author.
    pub author: String,
    /// schema.org `Article` object.
    pub structured_data: Value,
}

impl PageMetadata {
    /// Build metadata for a document page.
    #[must_use]
    pub fn for_document(doc: &Document, site: &SiteConfig, href_prefix: &str) -> Self {
        let canonical_url = format!("{}{href_prefix}/{}", site.home_page, doc.path);
        let description = doc
            .description
            .clone()
            .unwrap_or_else(|| site.description.clone());

        let mut keywords: Vec<String> = BASE_KEYWORDS.iter().map(|&k| k.to_owned()).collect();
        if let Some(category) = doc.category.as_deref().filter(|c| !c.is_empty()) {
            keywords.push(category.to_owned());
        }

        let structured_data = json!({
            "@context": "https://schema.org",
            "@type": "Article",
            "headline": doc.title,
            "description": description,
            "url": canonical_url,
            "publisher": {
                "@type": "Organization",
                "name": site.title,
                "url": site.home_page,
            },
            "author": {
                "@type": "Person",
                "name": site.author,
            },
        });

        Self {
            full_title: format!("{} | {}", doc.title, site.title),
            description,
            canonical_url,
            keywords,
            og_type: "article",
            og_image: format!("{}/og-image.jpg", site.home_page),
            author: site.author.clone(),
            structured_data,
        }
    }

    /// Keywords joined for the `keywords` meta tag.
    #[must_use]
    pub fn keywords_content(&self) -> String {
        self.keywords.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::document::Collection;

    #[test]
    fn test_for_document() {
        let site = SiteConfig::default();
        let doc = Document::new(Collection::Docs, "cours/ebitda", "EBITDA")
            .with_category("cours")
            .with_description("Earnings before interest");

        let meta = PageMetadata::for_document(&doc, &site, "/docs");

        assert_eq!(meta.full_title, "EBITDA | Fintech Academy");
        assert_eq!(meta.description, "Earnings before interest");
        assert_eq!(
            meta.canonical_url,
            "https://walidoux.github.io/fintech-academy/docs/cours/ebitda"
        );
        assert_eq!(meta.keywords_content(), "fintech, finance, documentation, cours");
        assert_eq!(meta.og_type, "article");
    }

    #[test]
    fn test_description_falls_back_to_site() {
        let site = SiteConfig::default();
        let doc = Document::new(Collection::Docs, "faq", "FAQ");

        let meta = PageMetadata::for_document(&doc, &site, "/docs");

        assert_eq!(meta.description, site.description);
        assert_eq!(meta.keywords.len(), 3);
    }

    #[test]
    fn test_structured_data() {
        let site = SiteConfig::default();
        let doc = Document::new(Collection::Docs, "faq", "FAQ");

        let meta = PageMetadata::for_document(&doc, &site, "/docs");
        let data = &meta.structured_data;

        assert_eq!(data["@type"], "Article");
        assert_eq!(data["headline"], "FAQ");
        assert_eq!(data["url"], meta.canonical_url.as_str());
        assert_eq!(data["publisher"]["name"], "Fintech Academy");
        assert_eq!(data["author"]["name"], site.author.as_str());
    }
}
