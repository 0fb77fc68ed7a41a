//! `nb page` command implementation.

use std::path::PathBuf;

use clap::Args;
use nb_config::CliSettings;
use nb_params::PageOptions;

use super::{ConfigArgs, params_builder, read_markdown};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the page command.
#[derive(Args)]
pub(crate) struct PageArgs {
    /// Path to the markdown page content (`-` for stdin).
    markdown_file: PathBuf,

    /// Page title (single line of markdown).
    #[arg(short, long)]
    title: String,

    /// Parent page ID (overrides page.parent_id).
    #[arg(short, long, env = "NB_PARENT_ID")]
    parent: Option<String>,

    /// Page icon emoji (overrides page.emoji).
    #[arg(short, long)]
    emoji: Option<String>,

    #[command(flatten)]
    config: ConfigArgs,
}

impl PageArgs {
    /// Print a create-page payload as JSON.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = self.config.load(CliSettings {
            parent_id: self.parent,
            emoji: self.emoji,
            ..CliSettings::default()
        })?;
        let parent_id = config.require_parent_id()?;
        let markdown = read_markdown(&self.markdown_file)?;

        let params = params_builder(&config).create_page(
            parent_id,
            &self.title,
            PageOptions {
                text: Some(&markdown),
                emoji: config.page.emoji.as_deref(),
            },
        )?;
        tracing::info!(
            title = %params.properties.title.plain_text(),
            parent = parent_id,
            "Built page payload"
        );
        output.warnings(&params.warnings);
        output.json(&params)
    }
}
