//! Application settings configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{default_settings_path, ConfigError, Result};
use crate::api::DEFAULT_MAX_RESULTS;

/// JQL used when neither a project nor a query is given.
pub const DEFAULT_JQL: &str = "ORDER BY created DESC";

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Maximum number of issues requested per search.
    pub max_results: u32,
    /// Number of fetched issues printed by `fetch`.
    pub display_limit: usize,
    /// JQL used when no project or query is given.
    pub default_jql: String,
    /// Dashboard event-loop tick rate in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            display_limit: 5,
            default_jql: DEFAULT_JQL.to_string(),
            tick_rate_ms: 250,
        }
    }
}

impl Settings {
    /// Load settings from `path`, or from the default location when `None`.
    ///
    /// A missing file at the default location yields the defaults. An
    /// explicitly given path must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or fails
    /// validation.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let settings = match path {
            Some(path) => Self::load_from(path)?,
            None => match default_settings_path() {
                Ok(path) if path.exists() => Self::load_from(&path)?,
                _ => {
                    debug!("No settings file found, using defaults");
                    Self::default()
                }
            },
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Read and parse a settings file.
    fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading settings");

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validate these settings.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ValidationError` naming the first bad value.
    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(ConfigError::ValidationError(
                "max_results must be greater than zero".to_string(),
            ));
        }

        if self.display_limit == 0 {
            return Err(ConfigError::ValidationError(
                "display_limit must be greater than zero".to_string(),
            ));
        }

        if self.default_jql.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "default_jql cannot be empty".to_string(),
            ));
        }

        if self.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError(
                "tick_rate_ms must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
