//! Document index, navigation and content resolution for Academy.
//!
//! This crate provides:
//! - [`Site`]: application context over the loaded `docs` and `pages`
//!   collections
//! - [`build_navigation`] / [`NavigationBuilder`]: category-grouped sidebar
//! - [`compute_adjacent`]: previous/next pagination in load order
//! - [`ContentRegistry`]: path resolution with `index` fallback
//! - Search, breadcrumbs, sub-page listings, page metadata and colour mode
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use academy_config::Config;
//! use academy_site::Site;
//!
//! let config = Config::load(None, None)?;
//! let site = Site::load(&config)?;
//!
//! let nav = site.navigation()?;
//! let adjacent = site.adjacent("cours/ebitda");
//! # Ok(())
//! # }
//! ```

mod breadcrumbs;
mod category;
mod document;
mod listing;
mod loader;
mod metadata;
mod navigation;
mod pager;
mod resolver;
mod search;
mod site;
mod theme;

pub use breadcrumbs::{BreadcrumbItem, breadcrumbs};
pub use category::CategoryTable;
pub use document::{Collection, Document, SourceDocument};
pub use listing::{SubPage, sub_pages};
pub use loader::{CollectionLoader, LoadError};
pub use metadata::PageMetadata;
pub use navigation::{
    DEFAULT_HREF_PREFIX, NavLink, Navigation, NavigationBuilder, NavigationError,
    NavigationIssue, NavigationSection, build_navigation,
};
pub use pager::{Adjacent, compute_adjacent};
pub use resolver::{Content, ContentRegistry, ContentResolver, Resolution};
pub use search::{SearchGroup, SearchIndex, SearchItem};
pub use site::Site;
pub use theme::{
    ColorMode, ColorModeStorage, ConfigColorMode, CookieStorage, MemoryStorage, ThemeState,
    initial_color_mode, storage_for,
};
