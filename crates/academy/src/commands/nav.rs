//! `academy nav` command implementation.

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Print the sidebar navigation as JSON.
///
/// # Errors
///
/// Returns an error if content fails to load or strict categories reject
/// a document.
pub(crate) fn execute(site: &SiteArgs) -> Result<(), CliError> {
    let site = site.load_site()?;
    Output::new().json(site.navigation()?)
}
