//! Table-of-contents extraction from Markdown source.

use std::sync::LazyLock;

use regex::Regex;

use crate::placeholders::Placeholders;
use crate::slug::slugify;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap());

/// A heading entry for the table of contents.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heading {
    /// Number of leading `#` characters (1-6).
    pub depth: u8,
    /// Anchor id, as produced by [`slugify`].
    pub slug: String,
    /// Heading text after placeholder substitution.
    pub text: String,
}

/// Extracts headings with a fixed placeholder table.
///
/// Use the same [`Placeholders`] the renderer uses, otherwise anchors in the
/// table of contents will not match heading ids on the page.
#[derive(Clone, Debug, Default)]
pub struct HeadingExtractor {
    placeholders: Placeholders,
}

impl HeadingExtractor {
    /// Create an extractor substituting the given placeholders.
    #[must_use]
    pub fn new(placeholders: Placeholders) -> Self {
        Self { placeholders }
    }

    /// Placeholder table used by this extractor.
    #[must_use]
    pub fn placeholders(&self) -> &Placeholders {
        &self.placeholders
    }

    /// Extract all ATX headings from `source` in document order.
    ///
    /// Repeated slugs are not disambiguated: two headings with the same
    /// normalized text both carry the same slug.
    #[must_use]
    pub fn extract(&self, source: &str) -> Vec<Heading> {
        source
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| self.heading(line))
            .collect()
    }

    fn heading(&self, line: &str) -> Option<Heading> {
        let caps = HEADING_RE.captures(line)?;
        let hashes = caps.get(1)?.as_str();
        let text = self.placeholders.apply(caps.get(2)?.as_str().trim());
        if text.is_empty() {
            return None;
        }

        Some(Heading {
            // Regex caps the run at 6.
            depth: u8::try_from(hashes.len()).ok()?,
            slug: slugify(&text),
            text,
        })
    }
}

/// Extract headings without placeholder substitution.
///
/// # Examples
///
/// ```
/// use academy_markup::extract_headings;
///
/// let headings = extract_headings("# Hello World");
/// assert_eq!(headings[0].slug, "hello-world");
/// ```
#[must_use]
pub fn extract_headings(source: &str) -> Vec<Heading> {
    HeadingExtractor::default().extract(source)
}
