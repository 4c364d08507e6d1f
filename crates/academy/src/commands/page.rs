//! Per-document commands: `pager`, `toc`, `resolve`, `meta`, `breadcrumbs`
//! and `subpages`.

use academy_site::{Content, Document, Resolution, Site};
use clap::{Args, Subcommand};
use serde::Serialize;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// A request path argument.
#[derive(Args)]
pub(crate) struct PageArgs {
    /// Document path such as `cours/ebitda` (leading/trailing slashes ignored).
    path: String,
}

/// Per-document queries.
#[derive(Subcommand)]
pub(crate) enum PageCommand {
    /// Previous/next documents in load order.
    Pager(PageArgs),
    /// Table of contents extracted from headings.
    Toc(PageArgs),
    /// Resolve a path and print the document with its body.
    Resolve(PageArgs),
    /// Page title, description and structured data.
    Meta(PageArgs),
    /// Breadcrumb trail for a request pathname such as `/docs/nestle/rapport`.
    Breadcrumbs(PageArgs),
    /// Child pages listed on a landing page.
    Subpages(PageArgs),
}

/// JSON shape printed by `resolve`.
#[derive(Serialize)]
struct ResolvedOutput<'a> {
    #[serde(flatten)]
    document: &'a Document,
    body: &'a str,
}

impl PageCommand {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns an error if content fails to load or the path does not resolve
    /// to a servable document.
    pub(crate) fn execute(self, site: &SiteArgs) -> Result<(), CliError> {
        let site = site.load_site()?;
        let output = Output::new();

        match self {
            Self::Pager(args) => output.json(&site.adjacent(&args.path)),
            Self::Toc(args) => {
                require(&site, &args.path)?;
                output.json(site.toc(&args.path).unwrap_or_default())
            }
            Self::Resolve(args) => {
                let content = require(&site, &args.path)?;
                output.json(&ResolvedOutput {
                    document: content.document,
                    body: content.body,
                })
            }
            Self::Meta(args) => {
                require(&site, &args.path)?;
                output.json(&site.metadata(&args.path))
            }
            Self::Breadcrumbs(args) => output.json(&site.breadcrumbs(&args.path)),
            Self::Subpages(args) => output.json(&site.sub_pages(&args.path)),
        }
    }
}

/// Resolve `path`, mapping disabled and missing documents to errors.
fn require<'a>(site: &'a Site, path: &str) -> Result<Content<'a>, CliError> {
    match site.resolve(path) {
        Resolution::Found(content) => Ok(content),
        Resolution::Disabled(document) => Err(CliError::Disabled(document.path.clone())),
        Resolution::NotFound => Err(CliError::NotFound(path.to_owned())),
    }
}
