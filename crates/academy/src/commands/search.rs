//! `academy search` command implementation.

use clap::Args;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the search command.
#[derive(Args)]
pub(crate) struct SearchArgs {
    /// Title filter (case-insensitive); omit to list everything.
    #[arg(default_value = "")]
    query: String,
}

impl SearchArgs {
    /// Print matching documents grouped by category as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if content fails to load.
    pub(crate) fn execute(self, site: &SiteArgs) -> Result<(), CliError> {
        let site = site.load_site()?;
        Output::new().json(&site.search(&self.query))
    }
}
