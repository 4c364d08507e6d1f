//! `academy inline` command implementation.

use academy_markup::{HtmlBackend, parse, parse_task_item, render_inline, render_task_item};
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the inline command.
#[derive(Args)]
pub(crate) struct InlineArgs {
    /// Text using `**bold**`, `[label](url)` and `%caption%` markup.
    text: String,

    /// Treat the text as a task list item (`[ ] ...` or `[x] ...`).
    #[arg(long)]
    task: bool,

    /// Print the parsed nodes as JSON instead of HTML.
    #[arg(long)]
    json: bool,
}

impl InlineArgs {
    /// Render inline markup.
    ///
    /// # Errors
    ///
    /// Returns an error if `--task` is given and the text is not a task item.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        if self.task {
            let item = parse_task_item(&self.text).ok_or_else(|| {
                CliError::Validation(format!("Not a task item: '{}'", self.text))
            })?;
            return if self.json {
                output.json(&item)
            } else {
                output.result(&render_task_item::<HtmlBackend>(&item))
            };
        }

        let nodes = parse(&self.text);
        if self.json {
            output.json(&nodes)
        } else {
            output.result(&render_inline::<HtmlBackend>(&nodes))
        }
    }
}
