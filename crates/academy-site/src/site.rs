//! Application context tying content and configuration together.
//!
//! [`Site`] is built once from [`Config`] and the loaded collections. Derived
//! values (navigation, search index) are computed on first use and cached
//! until [`Site::reload`] or [`Site::replace_content`].

use std::path::PathBuf;
use std::sync::OnceLock;

use academy_config::{Config, SiteConfig, ThemeConfig};
use academy_markup::{Heading, HeadingExtractor, Placeholders};

use crate::breadcrumbs::{BreadcrumbItem, breadcrumbs};
use crate::category::CategoryTable;
use crate::document::Collection;
use crate::listing::{SubPage, sub_pages};
use crate::loader::{CollectionLoader, LoadError};
use crate::metadata::PageMetadata;
use crate::navigation::{
    Navigation, NavigationBuilder, NavigationError, NavigationIssue, NavigationSection,
};
use crate::pager::{Adjacent, compute_adjacent};
use crate::resolver::{ContentRegistry, ContentResolver, Resolution};
use crate::search::{SearchGroup, SearchIndex};
use crate::theme::{ColorMode, ColorModeStorage, ConfigColorMode, ThemeState, storage_for};

/// Documentation site context.
pub struct Site {
    site: SiteConfig,
    theme: ThemeConfig,
    categories: CategoryTable,
    static_sections: Vec<NavigationSection>,
    href_prefix: String,
    strict_categories: bool,
    dedupe_static_links: bool,
    docs_dir: PathBuf,
    pages_dir: PathBuf,
    extractor: HeadingExtractor,
    registry: ContentRegistry,
    navigation: OnceLock<Result<Navigation, NavigationError>>,
    search: OnceLock<SearchIndex>,
}

impl Site {
    /// Load both collections from the directories in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if a collection cannot be read.
    pub fn load(config: &Config) -> Result<Self, LoadError> {
        let mut site = Self::new(config, ContentRegistry::default());
        site.reload()?;
        Ok(site)
    }

    /// Create a site over an already built registry.
    #[must_use]
    pub fn new(config: &Config, registry: ContentRegistry) -> Self {
        let placeholders: Placeholders = config.app_placeholders().into_iter().collect();

        Self {
            site: config.site.clone(),
            theme: config.theme.clone(),
            categories: CategoryTable::from(config.categories.as_slice()),
            static_sections: config
                .navigation
                .sections
                .iter()
                .map(NavigationSection::from)
                .collect(),
            href_prefix: config.content_resolved.href_prefix.clone(),
            strict_categories: config.navigation.strict_categories,
            dedupe_static_links: config.navigation.dedupe_static_links,
            docs_dir: config.content_resolved.docs_dir.clone(),
            pages_dir: config.content_resolved.pages_dir.clone(),
            extractor: HeadingExtractor::new(placeholders),
            registry,
            navigation: OnceLock::new(),
            search: OnceLock::new(),
        }
    }

    /// Re-read both collections from disk and drop cached values.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if a collection cannot be read. The previous
    /// content is kept in that case.
    pub fn reload(&mut self) -> Result<(), LoadError> {
        let docs = CollectionLoader::new(
            self.docs_dir.clone(),
            Collection::Docs,
            self.extractor.clone(),
        )
        .load()?;
        let pages = CollectionLoader::new(
            self.pages_dir.clone(),
            Collection::Pages,
            self.extractor.clone(),
        )
        .load()?;

        self.replace_content(ContentRegistry::new(docs, pages));
        Ok(())
    }

    /// Swap in new content and drop cached values.
    pub fn replace_content(&mut self, registry: ContentRegistry) {
        self.registry = registry;
        self.navigation = OnceLock::new();
        self.search = OnceLock::new();
    }

    /// Loaded content.
    #[must_use]
    pub fn registry(&self) -> &ContentRegistry {
        &self.registry
    }

    /// Category table.
    #[must_use]
    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    /// Heading extractor configured with the site placeholders.
    #[must_use]
    pub fn extractor(&self) -> &HeadingExtractor {
        &self.extractor
    }

    /// Sidebar navigation for the docs collection.
    ///
    /// Duplicate paths across docs and pages are appended as issues.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError`] when strict categories are enabled and a
    /// document uses an unknown category.
    pub fn navigation(&self) -> Result<&Navigation, NavigationError> {
        self.navigation
            .get_or_init(|| {
                let mut navigation = NavigationBuilder::new(&self.categories)
                    .static_sections(self.static_sections.clone())
                    .href_prefix(self.href_prefix.clone())
                    .strict(self.strict_categories)
                    .dedupe_static_links(self.dedupe_static_links)
                    .build(self.registry.docs())?;
                navigation.issues.extend(
                    self.registry
                        .duplicate_paths()
                        .iter()
                        .map(|path| NavigationIssue::DuplicatePath { path: path.clone() }),
                );
                Ok(navigation)
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Previous/next documents around `path` in load order.
    #[must_use]
    pub fn adjacent(&self, path: &str) -> Adjacent<'_> {
        compute_adjacent(self.registry.documents(), path.trim_matches('/'))
    }

    /// Resolve a request path to content.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Resolution<'_> {
        self.registry.resolve(path)
    }

    /// Table of contents for the document at `path`.
    #[must_use]
    pub fn toc(&self, path: &str) -> Option<&[Heading]> {
        self.resolve(path)
            .content()
            .map(|content| content.document.headings.as_slice())
    }

    /// Search document titles.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<SearchGroup> {
        self.search
            .get_or_init(|| {
                SearchIndex::build(self.registry.docs(), &self.categories, &self.href_prefix)
            })
            .query(query)
    }

    /// Breadcrumbs for a request pathname such as `/docs/nestle/rapport`.
    #[must_use]
    pub fn breadcrumbs(&self, pathname: &str) -> Vec<BreadcrumbItem> {
        breadcrumbs(pathname, &self.href_prefix)
    }

    /// Child pages listed on the landing page of `root`.
    ///
    /// Only single-segment roots have listings, and none is shown when the
    /// landing page itself is disabled.
    #[must_use]
    pub fn sub_pages(&self, root: &str) -> Vec<SubPage> {
        let root = root.trim_matches('/');
        if root.is_empty() || root.contains('/') {
            return Vec::new();
        }
        if matches!(self.resolve(root), Resolution::Disabled(_)) {
            return Vec::new();
        }
        sub_pages(self.registry.pages(), root)
    }

    /// Page metadata for the document at `path`.
    #[must_use]
    pub fn metadata(&self, path: &str) -> Option<PageMetadata> {
        let content = self.resolve(path).content()?;
        Some(PageMetadata::for_document(
            content.document,
            &self.site,
            &self.href_prefix,
        ))
    }

    /// Theme state for a request, using the configured storage.
    #[must_use]
    pub fn theme(
        &self,
        cookie_header: &str,
        system: Option<ColorMode>,
    ) -> ThemeState<Box<dyn ColorModeStorage>> {
        ThemeState::new(
            storage_for(&self.theme, cookie_header),
            ConfigColorMode::normalize(&self.theme.initial_mode),
            system,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::document::{Document, SourceDocument};

    static_assertions::assert_impl_all!(Site: Send, Sync);

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn config(root: &Path) -> Config {
        let mut config = Config::default();
        config.content_resolved.docs_dir = root.join("docs");
        config.content_resolved.pages_dir = root.join("pages");
        config
    }

    fn fixture() -> (tempfile::TempDir, Site) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(
            root,
            "docs/calculs/van.mdx",
            "---\ntitle: VAN\ncategory: calculs\n---\n# Valeur actuelle nette\n## Formule\n",
        );
        write(
            root,
            "docs/cours/ebitda.mdx",
            "---\ntitle: EBITDA\ncategory: cours\ndescription: Marge\n---\n# EBITDA\n",
        );
        write(root, "docs/faq.mdx", "---\ntitle: FAQ\n---\n# FAQ\n");
        write(
            root,
            "pages/nestle/index.mdx",
            "---\ntitle: Nestlé Maroc\n---\n# Bienvenue sur {APP.LONG_NAME}\n",
        );
        write(
            root,
            "pages/nestle/rapport.mdx",
            "---\ntitle: Rapport\n---\n# Rapport\n",
        );
        write(
            root,
            "pages/nestle/brouillon.mdx",
            "---\ntitle: Brouillon\ndisabled: true\n---\n",
        );

        let site = Site::load(&config(root)).unwrap();
        (dir, site)
    }

    #[test]
    fn test_navigation_sections() {
        let (_dir, site) = fixture();
        let nav = site.navigation().unwrap();
        let titles: Vec<&str> = nav.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Overview", "Internships", "Calculs", "Cours Académiques"]
        );
        assert_eq!(nav.sections[2].links[0].href, "/docs/calculs/van");
        assert!(nav.issues.is_empty());
    }

    #[test]
    fn test_navigation_is_memoized() {
        let (_dir, site) = fixture();
        let first: *const Navigation = site.navigation().unwrap();
        let second: *const Navigation = site.navigation().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_navigation_strict_error() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "docs/x.md", "---\ntitle: X\ncategory: archive\n---\n");
        let mut config = config(dir.path());
        config.navigation.strict_categories = true;

        let site = Site::load(&config).unwrap();

        assert!(matches!(
            site.navigation(),
            Err(NavigationError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_navigation_reports_duplicate_paths() {
        let mut site = Site::new(&Config::default(), ContentRegistry::default());
        site.replace_content(ContentRegistry::new(
            vec![SourceDocument::new(
                Document::new(Collection::Docs, "faq", "FAQ"),
                "",
            )],
            vec![SourceDocument::new(
                Document::new(Collection::Pages, "faq", "FAQ page"),
                "",
            )],
        ));

        let nav = site.navigation().unwrap();

        assert_eq!(
            nav.issues,
            vec![NavigationIssue::DuplicatePath {
                path: "faq".to_owned()
            }]
        );
    }

    #[test]
    fn test_adjacent_spans_docs_then_pages() {
        let (_dir, site) = fixture();
        let adjacent = site.adjacent("/faq");
        assert_eq!(adjacent.previous.unwrap().path, "cours/ebitda");
        assert_eq!(adjacent.next.unwrap().path, "nestle/brouillon");
    }

    #[test]
    fn test_resolve_index_and_toc_placeholders() {
        let (_dir, site) = fixture();
        let toc = site.toc("nestle").unwrap();
        assert_eq!(toc[0].text, "Bienvenue sur Fintech Academy");
        assert_eq!(toc[0].slug, "bienvenue-sur-fintech-academy");
    }

    #[test]
    fn test_toc_for_disabled_is_none() {
        let (_dir, site) = fixture();
        assert!(matches!(
            site.resolve("nestle/brouillon"),
            Resolution::Disabled(_)
        ));
        assert!(site.toc("nestle/brouillon").is_none());
    }

    #[test]
    fn test_search() {
        let (_dir, site) = fixture();
        let hits = site.search("ebit");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].items[0].href, "/docs/cours/ebitda");
        assert_eq!(site.search("").len(), 2);
    }

    #[test]
    fn test_sub_pages() {
        let (_dir, site) = fixture();
        let pages = site.sub_pages("nestle");
        let slugs: Vec<&str> = pages.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["rapport"]);
        assert!(site.sub_pages("nestle/rapport").is_empty());
    }

    #[test]
    fn test_breadcrumbs_use_prefix() {
        let (_dir, site) = fixture();
        let trail = site.breadcrumbs("/docs/nestle/rapport");
        assert_eq!(trail[0].href, "/docs/nestle");
        assert_eq!(trail[1].title, "Rapport");
    }

    #[test]
    fn test_metadata() {
        let (_dir, site) = fixture();
        let meta = site.metadata("cours/ebitda").unwrap();
        assert_eq!(meta.full_title, "EBITDA | Fintech Academy");
        assert_eq!(meta.description, "Marge");
        assert!(site.metadata("missing").is_none());
    }

    #[test]
    fn test_reload_picks_up_new_files() {
        let (dir, mut site) = fixture();
        assert!(site.search("tri").is_empty());

        write(
            dir.path(),
            "docs/calculs/tri.mdx",
            "---\ntitle: TRI\ncategory: calculs\n---\n",
        );
        site.reload().unwrap();

        assert_eq!(site.search("tri").len(), 1);
        assert_eq!(site.navigation().unwrap().sections[2].links.len(), 2);
    }

    #[test]
    fn test_theme_from_cookie() {
        let (_dir, site) = fixture();
        let state = site.theme("kb-color-mode=dark", None);
        assert_eq!(state.mode(), ColorMode::Dark);

        let state = site.theme("", Some(ColorMode::Dark));
        assert_eq!(state.mode(), ColorMode::Dark);
        assert_eq!(state.preference(), Some(ConfigColorMode::System));
    }
}
