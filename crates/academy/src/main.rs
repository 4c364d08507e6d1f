//! Academy CLI - content engine for the Fintech Academy knowledge base.
//!
//! Provides commands for:
//! - `nav`: Print the category-grouped sidebar
//! - `pager`, `toc`, `resolve`, `meta`, `breadcrumbs`, `subpages`: Query a document
//! - `search`: Filter document titles
//! - `inline`: Render inline markup
//! - `check`: Report category and path drift

mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{InlineArgs, PageCommand, SearchArgs, SiteArgs};
use output::Output;

/// Academy - content engine for the Fintech Academy knowledge base.
#[derive(Parser)]
#[command(name = "academy", version, about)]
struct Cli {
    #[command(flatten)]
    site: SiteArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sidebar navigation as JSON.
    Nav,
    #[command(flatten)]
    Page(PageCommand),
    /// Search document titles.
    Search(SearchArgs),
    /// Render inline markup to HTML.
    Inline(InlineArgs),
    /// Report unknown categories and duplicate paths.
    Check,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.site.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Nav => commands::nav::execute(&cli.site),
        Commands::Page(cmd) => cmd.execute(&cli.site),
        Commands::Search(args) => args.execute(&cli.site),
        Commands::Inline(args) => args.execute(),
        Commands::Check => commands::check::execute(&cli.site),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output.error(&format!("Error: {err}"));
            ExitCode::FAILURE
        }
    }
}
