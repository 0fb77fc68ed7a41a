//! CLI error types.

use nb_config::ConfigError;
use nb_params::ParamsError;
use nb_renderer::RenderError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Params(#[from] ParamsError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
