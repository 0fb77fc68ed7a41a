//! `nb append` command implementation.

use std::path::PathBuf;

use clap::Args;
use nb_config::CliSettings;

use super::{ConfigArgs, params_builder, read_markdown};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the append command.
#[derive(Args)]
pub(crate) struct AppendArgs {
    /// Path to the markdown file (`-` for stdin).
    markdown_file: PathBuf,

    #[command(flatten)]
    config: ConfigArgs,
}

impl AppendArgs {
    /// Print an append-children payload as JSON.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = self.config.load(CliSettings::default())?;
        let markdown = read_markdown(&self.markdown_file)?;

        let params = params_builder(&config).append_markdown(&markdown)?;
        output.warnings(&params.warnings);
        output.json(&params)
    }
}
