//! Configuration management for Academy.
//!
//! Parses `academy.toml` with serde and discovers the file in the current
//! directory or any parent. Every section is optional; the defaults describe
//! the Fintech Academy site.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.home_page`
//! - `site.repository`

mod expand;

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs collection directory.
    pub docs_dir: Option<PathBuf>,
    /// Override pages collection directory.
    pub pages_dir: Option<PathBuf>,
    /// Override unknown-category handling.
    pub strict_categories: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "academy.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site identity used for metadata and placeholders.
    pub site: SiteConfig,
    /// Content locations (paths are relative strings from TOML).
    content: ContentConfigRaw,
    /// Sidebar configuration.
    pub navigation: NavigationConfig,
    /// Category table, in display order.
    pub categories: Vec<CategoryConfig>,
    /// Extra `{APP.KEY}` replacements.
    pub placeholders: BTreeMap<String, String>,
    /// Colour mode persistence.
    pub theme: ThemeConfig,

    /// Resolved content configuration (set after loading).
    #[serde(skip)]
    pub content_resolved: ContentConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site identity.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Short machine name (`{APP.SHORT_NAME}`).
    pub name: String,
    /// Display title, appended to every page title.
    pub title: String,
    /// Fallback description for pages without one.
    pub description: String,
    /// Public base URL, without trailing slash.
    pub home_page: String,
    /// Source repository URL.
    pub repository: Option<String>,
    /// Author shown in metadata.
    pub author: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "fintech-academy".to_owned(),
            title: "Fintech Academy".to_owned(),
            description: "Documentation for finance and fintech students".to_owned(),
            home_page: "https://walidoux.github.io/fintech-academy".to_owned(),
            repository: None,
            author: "Walid Korchi".to_owned(),
        }
    }
}

/// Raw content configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContentConfigRaw {
    docs_dir: Option<String>,
    pages_dir: Option<String>,
    href_prefix: Option<String>,
}

/// Resolved content configuration with absolute paths.
#[derive(Debug, Default)]
pub struct ContentConfig {
    /// Directory of the `docs` collection.
    pub docs_dir: PathBuf,
    /// Directory of the `pages` collection.
    pub pages_dir: PathBuf,
    /// URL prefix for document links, without trailing slash.
    pub href_prefix: String,
}

/// Sidebar configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Fail instead of warning when a document uses an unknown category.
    pub strict_categories: bool,
    /// Hide category links that duplicate a static link.
    pub dedupe_static_links: bool,
    /// Hand-written sections shown before the category sections.
    pub sections: Vec<StaticSectionConfig>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            strict_categories: false,
            dedupe_static_links: false,
            sections: default_sections(),
        }
    }
}

/// A hand-written sidebar section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StaticSectionConfig {
    /// Section heading.
    pub title: String,
    /// Links, in display order.
    #[serde(default)]
    pub links: Vec<StaticLinkConfig>,
}

/// A hand-written sidebar link.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StaticLinkConfig {
    /// Link label.
    pub title: String,
    /// Absolute href.
    pub href: String,
}

/// A category key and its display label.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CategoryConfig {
    /// Key used in document frontmatter.
    pub key: String,
    /// Section title shown in the sidebar and search.
    pub label: String,
}

/// Colour mode persistence.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Cookie or local storage key.
    pub storage_key: String,
    /// Where the preference is stored.
    pub storage: StorageKind,
    /// Mode used when nothing is stored (`light`, `dark` or `system`).
    pub initial_mode: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "kb-color-mode".to_owned(),
            storage: StorageKind::Cookie,
            initial_mode: "system".to_owned(),
        }
    }
}

/// Colour mode storage backend.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StorageKind {
    /// `Cookie` header, readable during server rendering.
    #[default]
    Cookie,
    /// Browser local storage.
    LocalStorage,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.home_page`").
        field: String,
        /// Error message (e.g., "${`HOME_PAGE`} not set").
        message: String,
    },
}

fn default_sections() -> Vec<StaticSectionConfig> {
    let section = |title: &str, links: &[(&str, &str)]| StaticSectionConfig {
        title: title.to_owned(),
        links: links
            .iter()
            .map(|(title, href)| StaticLinkConfig {
                title: (*title).to_owned(),
                href: (*href).to_owned(),
            })
            .collect(),
    };

    vec![
        section(
            "Overview",
            &[
                ("Introduction", "/docs/"),
                ("Comment ça marche ?", "/docs/how-this-works"),
                ("FAQ", "/docs/faq"),
            ],
        ),
        section(
            "Internships",
            &[
                ("Manar Conseil", "/docs/manar-conseil"),
                ("Nestlé Maroc", "/docs/nestle"),
                ("DOOC", "/docs/dooc"),
            ],
        ),
    ]
}

fn default_categories() -> Vec<CategoryConfig> {
    [
        ("calculs", "Calculs"),
        ("ressources", "Ressources"),
        ("cours", "Cours Académiques"),
        ("research", "Recherches"),
    ]
    .into_iter()
    .map(|(key, label)| CategoryConfig {
        key: key.to_owned(),
        label: label.to_owned(),
    })
    .collect()
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Strip trailing slashes and require a leading one (empty means site root).
fn normalize_href_prefix(prefix: &str) -> Result<String, ConfigError> {
    let trimmed = prefix.trim_end_matches('/');
    if !trimmed.is_empty() && !trimmed.starts_with('/') {
        return Err(ConfigError::Validation(
            "content.href_prefix must start with /".to_owned(),
        ));
    }
    Ok(trimmed.to_owned())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `academy.toml` in current directory and parents,
    /// falling back to defaults relative to the current directory.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(docs_dir) = &settings.docs_dir {
            self.content_resolved.docs_dir.clone_from(docs_dir);
        }
        if let Some(pages_dir) = &settings.pages_dir {
            self.content_resolved.pages_dir.clone_from(pages_dir);
        }
        if let Some(strict) = settings.strict_categories {
            self.navigation.strict_categories = strict;
        }
    }

    /// Display label for a category key, if the key is configured.
    #[must_use]
    pub fn category_label(&self, key: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.label.as_str())
    }

    /// `{APP.KEY}` replacements: site identity plus `[placeholders]`.
    ///
    /// Built-in keys are `SHORT_NAME`, `LONG_NAME`, `DESCRIPTION`,
    /// `HOME_PAGE`, `AUTHOR`, `OG_IMAGE_URL` and, when a repository is set,
    /// `GITHUB_URL`. Entries in `[placeholders]` win over built-ins.
    #[must_use]
    pub fn app_placeholders(&self) -> BTreeMap<String, String> {
        let mut values = BTreeMap::new();
        values.insert("SHORT_NAME".to_owned(), self.site.name.clone());
        values.insert("LONG_NAME".to_owned(), self.site.title.clone());
        values.insert("DESCRIPTION".to_owned(), self.site.description.clone());
        values.insert("HOME_PAGE".to_owned(), self.site.home_page.clone());
        values.insert("AUTHOR".to_owned(), self.site.author.clone());
        values.insert(
            "OG_IMAGE_URL".to_owned(),
            format!("{}/og-image.jpg", self.site.home_page),
        );
        if let Some(repository) = &self.site.repository {
            values.insert("GITHUB_URL".to_owned(), repository.clone());
        }
        values.extend(
            self.placeholders
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        values
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            content: ContentConfigRaw::default(),
            navigation: NavigationConfig::default(),
            categories: default_categories(),
            placeholders: BTreeMap::new(),
            theme: ThemeConfig::default(),
            content_resolved: ContentConfig {
                docs_dir: base.join("content/docs"),
                pages_dir: base.join("content/pages"),
                href_prefix: "/docs".to_owned(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_categories()?;
        self.validate_navigation()?;
        require_non_empty(&self.theme.storage_key, "theme.storage_key")?;
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        require_non_empty(&self.site.home_page, "site.home_page")?;
        require_http_url(&self.site.home_page, "site.home_page")?;
        if self.site.home_page.ends_with('/') {
            return Err(ConfigError::Validation(
                "site.home_page must not end with /".to_owned(),
            ));
        }
        if let Some(repository) = &self.site.repository {
            require_http_url(repository, "site.repository")?;
        }
        Ok(())
    }

    fn validate_categories(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for category in &self.categories {
            require_non_empty(&category.key, "categories.key")?;
            require_non_empty(&category.label, "categories.label")?;
            if !seen.insert(category.key.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "category '{}' is defined more than once",
                    category.key
                )));
            }
        }
        Ok(())
    }

    fn validate_navigation(&self) -> Result<(), ConfigError> {
        for section in &self.navigation.sections {
            require_non_empty(&section.title, "navigation.sections.title")?;
            for link in &section.links {
                require_non_empty(&link.href, "navigation.sections.links.href")?;
            }
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.home_page = expand::expand_env(&self.site.home_page, "site.home_page")?;
        if let Some(ref repository) = self.site.repository {
            self.site.repository = Some(expand::expand_env(repository, "site.repository")?);
        }
        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.content_resolved = ContentConfig {
            docs_dir: resolve(self.content.docs_dir.as_deref(), "content/docs"),
            pages_dir: resolve(self.content.pages_dir.as_deref(), "content/pages"),
            href_prefix: normalize_href_prefix(
                self.content.href_prefix.as_deref().unwrap_or("/docs"),
            )?,
        };

        Ok(())
    }
}
