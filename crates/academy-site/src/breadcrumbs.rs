//! Breadcrumb trail for nested pages.

use academy_markup::sanitize_slug;
use serde::Serialize;

/// Breadcrumb navigation item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    /// Title derived from the URL segment.
    pub title: String,
    /// Link to the segment.
    pub href: String,
}

/// Build breadcrumbs for a request pathname.
///
/// The leading route segment (`docs` in `/docs/nestle/rapport`) is dropped.
/// Pages one level deep get no breadcrumbs. Hrefs are cumulative and carry
/// `href_prefix`.
///
/// # Examples
///
/// ```
/// use academy_site::breadcrumbs;
///
/// let trail = breadcrumbs("/docs/manar-conseil/rapport", "/docs");
/// assert_eq!(trail[0].title, "Manar Conseil");
/// assert_eq!(trail[1].href, "/docs/manar-conseil/rapport");
/// ```
#[must_use]
pub fn breadcrumbs(pathname: &str, href_prefix: &str) -> Vec<BreadcrumbItem> {
    let segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).skip(1).collect();
    if segments.len() <= 1 {
        return Vec::new();
    }

    let mut href = href_prefix.to_owned();
    segments
        .iter()
        .map(|segment| {
            href.push('/');
            href.push_str(segment);
            BreadcrumbItem {
                title: sanitize_slug(segment),
                href: href.clone(),
            }
        })
        .collect()
}
