//! CLI error types.

use academy_config::ConfigError;
use academy_site::{LoadError, NavigationError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("{0}")]
    Navigation(#[from] NavigationError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("No document at '{0}'")]
    NotFound(String),

    #[error("Document '{0}' is disabled")]
    Disabled(String),

    #[error("{0}")]
    Validation(String),
}
