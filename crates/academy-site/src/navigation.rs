//! Category-grouped sidebar navigation.
//!
//! The sidebar is a list of hand-written static sections followed by one
//! section per category key, in sorted key order. Links inside a category
//! section are sorted by title.
//!
//! A document whose category is missing from the category table is a
//! configuration defect. It never disappears silently: strict builds fail,
//! lenient builds log a warning, record a [`NavigationIssue`] and show the
//! raw key as the section title.

use std::collections::{BTreeMap, HashSet};

use academy_config::StaticSectionConfig;
use serde::Serialize;

use crate::category::CategoryTable;
use crate::document::Document;

/// Default prefix for document hrefs.
pub const DEFAULT_HREF_PREFIX: &str = "/docs";

/// Sidebar link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Display title.
    pub title: String,
    /// Link target.
    pub href: String,
    /// Disabled documents stay listed as non-interactive entries.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

impl NavLink {
    /// Create an enabled link.
    #[must_use]
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            disabled: false,
        }
    }
}

/// Sidebar section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavigationSection {
    /// Section heading.
    pub title: String,
    /// Category key; `None` for static sections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Links in display order.
    pub links: Vec<NavLink>,
}

impl NavigationSection {
    /// Create a static section.
    #[must_use]
    pub fn fixed(title: impl Into<String>, links: Vec<NavLink>) -> Self {
        Self {
            title: title.into(),
            category: None,
            links,
        }
    }
}

impl From<&StaticSectionConfig> for NavigationSection {
    fn from(section: &StaticSectionConfig) -> Self {
        Self::fixed(
            section.title.clone(),
            section
                .links
                .iter()
                .map(|link| NavLink::new(link.title.clone(), link.href.clone()))
                .collect(),
        )
    }
}

/// Configuration drift found while building navigation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavigationIssue {
    /// Documents use a category key missing from the category table.
    UnknownCategory {
        /// The unknown key.
        category: String,
        /// Paths of the documents using it.
        paths: Vec<String>,
    },
    /// Two documents share a path; the first one wins for lookups.
    DuplicatePath {
        /// The shared path.
        path: String,
    },
}

/// Sidebar navigation with any issues found while building it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Navigation {
    /// Static sections followed by category sections.
    pub sections: Vec<NavigationSection>,
    /// Configuration issues (empty when the content is consistent).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<NavigationIssue>,
}

/// Error returned by strict navigation builds.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// A document uses a category key missing from the category table.
    #[error("Unknown category '{category}' used by: {}", .paths.join(", "))]
    UnknownCategory {
        /// The unknown key.
        category: String,
        /// Paths of the documents using it.
        paths: Vec<String>,
    },
}

/// Configurable navigation builder.
///
/// # Example
///
/// ```
/// use academy_site::{CategoryTable, Collection, Document, NavigationBuilder};
///
/// let categories: CategoryTable = [("cours", "Cours")].into_iter().collect();
/// let docs = vec![Document::new(Collection::Docs, "cours/van", "VAN").with_category("cours")];
///
/// let nav = NavigationBuilder::new(&categories).build(&docs).unwrap();
/// assert_eq!(nav.sections[0].title, "Cours");
/// assert_eq!(nav.sections[0].links[0].href, "/docs/cours/van");
/// ```
#[derive(Clone, Debug)]
pub struct NavigationBuilder<'a> {
    categories: &'a CategoryTable,
    static_sections: Vec<NavigationSection>,
    href_prefix: String,
    strict: bool,
    dedupe_static_links: bool,
}

impl<'a> NavigationBuilder<'a> {
    /// Create a lenient builder with no static sections and the `/docs` prefix.
    #[must_use]
    pub fn new(categories: &'a CategoryTable) -> Self {
        Self {
            categories,
            static_sections: Vec::new(),
            href_prefix: DEFAULT_HREF_PREFIX.to_owned(),
            strict: false,
            dedupe_static_links: false,
        }
    }

    /// Sections placed before the category sections, order preserved.
    #[must_use]
    pub fn static_sections(mut self, sections: Vec<NavigationSection>) -> Self {
        self.static_sections = sections;
        self
    }

    /// Prefix for document hrefs (no trailing slash).
    #[must_use]
    pub fn href_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.href_prefix = prefix.into();
        self
    }

    /// Fail on unknown categories instead of warning.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Skip category links whose href already appears in a static section.
    #[must_use]
    pub fn dedupe_static_links(mut self, dedupe: bool) -> Self {
        self.dedupe_static_links = dedupe;
        self
    }

    /// Build navigation for `documents`.
    ///
    /// # Errors
    ///
    /// In strict mode, returns [`NavigationError::UnknownCategory`] for the
    /// first (in key order) category missing from the table.
    pub fn build(&self, documents: &[Document]) -> Result<Navigation, NavigationError> {
        let navigation = self.collect(documents);

        if self.strict
            && let Some(NavigationIssue::UnknownCategory { category, paths }) =
                navigation.issues.first()
        {
            return Err(NavigationError::UnknownCategory {
                category: category.clone(),
                paths: paths.clone(),
            });
        }

        Ok(navigation)
    }

    fn collect(&self, documents: &[Document]) -> Navigation {
        let static_hrefs: HashSet<&str> = if self.dedupe_static_links {
            self.static_sections
                .iter()
                .flat_map(|s| s.links.iter().map(|l| l.href.as_str()))
                .collect()
        } else {
            HashSet::new()
        };

        let mut groups: BTreeMap<&str, Vec<&Document>> = BTreeMap::new();
        for doc in documents {
            let Some(category) = doc.category.as_deref() else {
                continue;
            };
            if self.dedupe_static_links && static_hrefs.contains(self.href(doc).as_str()) {
                continue;
            }
            groups.entry(category).or_default().push(doc);
        }

        let mut sections = self.static_sections.clone();
        let mut issues = Vec::new();

        for (category, docs) in groups {
            let title = if let Some(label) = self.categories.label(category) {
                label.to_owned()
            } else {
                let paths: Vec<String> = docs.iter().map(|d| d.path.clone()).collect();
                if !self.strict {
                    tracing::warn!(
                        category = %category,
                        paths = ?paths,
                        "Unknown category, showing raw key as section title"
                    );
                }
                issues.push(NavigationIssue::UnknownCategory {
                    category: category.to_owned(),
                    paths,
                });
                category.to_owned()
            };

            let mut links: Vec<NavLink> = docs
                .iter()
                .map(|doc| NavLink {
                    title: doc.title.clone(),
                    href: self.href(doc),
                    disabled: doc.disabled,
                })
                .collect();
            links.sort_by(|a, b| a.title.cmp(&b.title));

            sections.push(NavigationSection {
                title,
                category: Some(category.to_owned()),
                links,
            });
        }

        Navigation { sections, issues }
    }

    fn href(&self, doc: &Document) -> String {
        format!("{}/{}", self.href_prefix, doc.path)
    }
}

/// Build navigation with the default `/docs` prefix in lenient mode.
///
/// Unknown categories are logged and reported in [`Navigation::issues`].
#[must_use]
pub fn build_navigation(
    documents: &[Document],
    static_sections: &[NavigationSection],
    categories: &CategoryTable,
) -> Navigation {
    NavigationBuilder::new(categories)
        .static_sections(static_sections.to_vec())
        .collect(documents)
}
