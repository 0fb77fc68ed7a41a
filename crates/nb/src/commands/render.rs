//! `nb render` command implementation.

use std::path::PathBuf;

use clap::Args;
use nb_config::CliSettings;

use super::{ConfigArgs, read_markdown, renderer};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Path to the markdown file (`-` for stdin).
    markdown_file: PathBuf,

    #[command(flatten)]
    config: ConfigArgs,
}

impl RenderArgs {
    /// Print the rendered block sequence as JSON.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = self.config.load(CliSettings::default())?;
        let markdown = read_markdown(&self.markdown_file)?;

        let result = renderer(&config).render_markdown(&markdown)?;
        tracing::info!(
            file = %self.markdown_file.display(),
            blocks = result.blocks.len(),
            "Rendered markdown"
        );
        output.warnings(&result.warnings);
        output.json(&result.blocks)
    }
}
