//! CLI command implementations.

mod append;
mod line;
mod page;
mod render;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use nb_config::{CliSettings, Config};
use nb_params::ParamsBuilder;
use nb_renderer::BlockRenderer;

use crate::error::CliError;

pub(crate) use append::AppendArgs;
pub(crate) use line::LineArgs;
pub(crate) use page::PageArgs;
pub(crate) use render::RenderArgs;

/// Options shared by every command.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover nb.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Disable tables, strikethrough, and task lists.
    #[arg(long)]
    no_gfm: bool,
}

impl ConfigArgs {
    /// Load configuration, overriding it with `settings` and `--no-gfm`.
    fn load(&self, mut settings: CliSettings) -> Result<Config, CliError> {
        if self.no_gfm {
            settings.gfm = Some(false);
        }
        let config = Config::load(self.config.as_deref(), Some(&settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }
        Ok(config)
    }
}

fn renderer(config: &Config) -> BlockRenderer {
    BlockRenderer::new().with_gfm(config.render.gfm)
}

fn params_builder(config: &Config) -> ParamsBuilder {
    ParamsBuilder::new().with_renderer(renderer(config))
}

/// Read a markdown file, or stdin when the path is `-`.
fn read_markdown(path: &Path) -> Result<String, CliError> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Ok(std::fs::read_to_string(path)?)
}
