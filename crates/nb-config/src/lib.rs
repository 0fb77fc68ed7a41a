//! Configuration management for nb.
//!
//! Parses `nb.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [render]
//! gfm = true
//!
//! [page]
//! parent_id = "${NB_PARENT_ID}"
//! emoji = "📝"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! `page.parent_id` and `page.emoji` support `${VAR}` (errors if unset) and
//! `${VAR:-default}`.

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "nb.toml";

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override GFM parsing.
    pub gfm: Option<bool>,
    /// Override the default parent page.
    pub parent_id: Option<String>,
    /// Override the default page icon.
    pub emoji: Option<String>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Markdown rendering options.
    pub render: RenderConfig,
    /// Page payload defaults.
    pub page: PageConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Markdown rendering options.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Enable tables, strikethrough, and task lists.
    pub gfm: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { gfm: true }
    }
}

/// Defaults for page payloads.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Parent page for new pages.
    pub parent_id: Option<String>,
    /// Icon emoji for new pages.
    pub emoji: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`page.parent_id`").
        field: String,
        /// Error message (e.g., "${`NB_PARENT_ID`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a page id: 32 hex digits, dashes allowed.
fn require_page_id(value: &str, field: &str) -> Result<(), ConfigError> {
    let digits: Vec<char> = value.chars().filter(|c| *c != '-').collect();
    if digits.len() != 32 || !digits.iter().all(char::is_ascii_hexdigit) {
        return Err(ConfigError::Validation(format!(
            "{field} must be a 32 digit hex page id"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `nb.toml` in current directory and parents,
    /// falling back to defaults when none exists.
    ///
    /// CLI settings are applied after loading and validated with the rest of
    /// the configuration.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_from(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(gfm) = settings.gfm {
            self.render.gfm = gfm;
        }
        if let Some(parent_id) = &settings.parent_id {
            self.page.parent_id = Some(parent_id.clone());
        }
        if let Some(emoji) = &settings.emoji {
            self.page.emoji = Some(emoji.clone());
        }
    }

    /// Search for a config file in `start` and its parents.
    #[must_use]
    pub fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parent page id, required by commands that create pages.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if no parent is configured.
    pub fn require_parent_id(&self) -> Result<&str, ConfigError> {
        self.page.parent_id.as_deref().ok_or_else(|| {
            ConfigError::Validation(
                "page.parent_id required (set it in nb.toml or pass --parent)".to_owned(),
            )
        })
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(parent_id) = &self.page.parent_id {
            require_non_empty(parent_id, "page.parent_id")?;
            require_page_id(parent_id, "page.parent_id")?;
        }
        if let Some(emoji) = &self.page.emoji {
            require_non_empty(emoji, "page.emoji")?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_opt(&mut self.page.parent_id, "page.parent_id")?;
        expand::expand_opt(&mut self.page.emoji, "page.emoji")?;
        Ok(())
    }
}
