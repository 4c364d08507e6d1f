//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod inline;
pub(crate) mod nav;
pub(crate) mod page;
pub(crate) mod search;

use std::path::PathBuf;

use academy_config::{CliSettings, Config};
use academy_site::Site;
use clap::Args;

use crate::error::CliError;

pub(crate) use inline::InlineArgs;
pub(crate) use page::PageCommand;
pub(crate) use search::SearchArgs;

/// Options shared by every command that reads content.
#[derive(Args, Debug, Default)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover academy.toml).
    #[arg(short, long, global = true, env = "ACADEMY_CONFIG")]
    config: Option<PathBuf>,

    /// Docs collection directory (overrides config).
    #[arg(long, global = true)]
    docs_dir: Option<PathBuf>,

    /// Pages collection directory (overrides config).
    #[arg(long, global = true)]
    pages_dir: Option<PathBuf>,

    /// Fail on documents with unknown categories.
    #[arg(long, global = true)]
    strict: bool,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl SiteArgs {
    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            docs_dir: self.docs_dir.clone(),
            pages_dir: self.pages_dir.clone(),
            strict_categories: self.strict.then_some(true),
        }
    }

    /// Load configuration and both content collections.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or any document fails to load.
    pub(crate) fn load_site(&self) -> Result<Site, CliError> {
        let config = Config::load(self.config.as_deref(), Some(&self.cli_settings()))?;
        tracing::info!(
            docs_dir = %config.content_resolved.docs_dir.display(),
            pages_dir = %config.content_resolved.pages_dir.display(),
            "Loading content"
        );
        Ok(Site::load(&config)?)
    }
}
