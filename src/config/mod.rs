//! Configuration management for jiradash.
//!
//! Credentials come from the environment; everything else from an optional
//! TOML settings file.

mod credentials;
mod settings;

use std::path::PathBuf;

use thiserror::Error;

pub use credentials::{Credentials, ENV_API_TOKEN, ENV_EMAIL, ENV_URL};
pub use settings::Settings;

/// Application directory name under the platform config/data directories.
pub const APP_DIR: &str = "jiradash";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform configuration directory could not be determined.
    #[error("could not determine configuration directory")]
    NoConfigDir,

    /// Required environment variables are unset or empty.
    #[error("Missing JIRA credentials in environment variables: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),

    /// The settings file could not be read.
    #[error("failed to read settings file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for [`Settings`].
    #[error("failed to parse settings file {path}: {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A configuration value is invalid.
    #[error("{0}")]
    ValidationError(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Get the default settings file path.
///
/// - Linux: `~/.config/jiradash/config.toml`
/// - macOS: `~/Library/Application Support/jiradash/config.toml`
/// - Windows: `C:\Users\<User>\AppData\Roaming\jiradash\config.toml`
pub fn default_settings_path() -> Result<PathBuf> {
    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join(APP_DIR).join("config.toml"))
}
