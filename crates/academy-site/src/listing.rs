//! Sub-page listings for section landing pages.

use std::cmp::Ordering;

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::document::Document;

/// A child page shown under a section landing page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubPage {
    /// Second path segment (`"rapport"` for `"nestle/rapport"`).
    pub slug: String,
    /// Page title.
    pub title: String,
}

/// List the pages under `root/`.
///
/// Excludes `root/index` and disabled pages. Sorted by title, ignoring case
/// and accents (`Émission` sorts with `E`).
#[must_use]
pub fn sub_pages(pages: &[Document], root: &str) -> Vec<SubPage> {
    let root = root.trim_matches('/');
    let prefix = format!("{root}/");
    let index = format!("{root}/index");

    let mut listing: Vec<SubPage> = pages
        .iter()
        .filter(|p| p.path.starts_with(&prefix) && p.path != index && !p.disabled)
        .filter_map(|p| {
            let slug = p.path.split('/').nth(1)?;
            Some(SubPage {
                slug: slug.to_owned(),
                title: p.title.clone(),
            })
        })
        .collect();

    listing.sort_by(|a, b| compare_titles(&a.title, &b.title));
    listing
}

/// Accent-insensitive, case-insensitive order; ties fall back to case-only
/// folding, then byte order.
fn compare_titles(a: &str, b: &str) -> Ordering {
    sort_key(a)
        .cmp(&sort_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Lowercased title with diacritics stripped.
fn sort_key(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
