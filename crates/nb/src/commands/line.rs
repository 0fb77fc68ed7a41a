//! `nb line` command implementation.

use clap::Args;
use nb_config::CliSettings;

use super::{ConfigArgs, renderer};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the line command.
#[derive(Args)]
pub(crate) struct LineArgs {
    /// Markdown text, e.g. a page title.
    text: String,

    #[command(flatten)]
    config: ConfigArgs,
}

impl LineArgs {
    /// Print the title rich text (or the raw string) as JSON.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = self.config.load(CliSettings::default())?;
        let line = renderer(&config).render_line(&self.text)?;
        output.json(&line)
    }
}
