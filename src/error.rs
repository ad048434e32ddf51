//! Centralized error types for jiradash.
//!
//! This module provides a unified error hierarchy for the application with
//! user-friendly error messages. All error types use `thiserror` for
//! ergonomic error handling.

use thiserror::Error;

use crate::api::ApiError;
use crate::config::{ConfigError, ENV_API_TOKEN, ENV_EMAIL, ENV_URL};

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// API-related errors.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// IO errors (stdout, file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal-related errors.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl AppError {
    /// Create a terminal error.
    pub fn terminal(msg: impl Into<String>) -> Self {
        AppError::Terminal(msg.into())
    }

    /// Get a user-friendly message for display.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find configuration directory. Please check your system settings."
                        .to_string()
                }
                ConfigError::MissingCredentials(_) => e.to_string(),
                ConfigError::ReadError { path, .. } => {
                    format!("Could not read settings file {}.", path.display())
                }
                ConfigError::ParseError { path, source } => {
                    format!("Settings file {} is invalid: {}", path.display(), source)
                }
                ConfigError::ValidationError(msg) => format!("Configuration error: {}", msg),
            },
            AppError::Api(e) => match e {
                ApiError::Unauthorized => {
                    "Authentication failed. Please check your email and API token.".to_string()
                }
                ApiError::Forbidden => {
                    "Access denied. You don't have permission to access this resource.".to_string()
                }
                ApiError::NotFound(resource) => format!("'{}' was not found.", resource),
                ApiError::RateLimited => {
                    "Too many requests. Please wait a moment and try again.".to_string()
                }
                ApiError::ServerError(_) => "JIRA server error. Please try again later.".to_string(),
                ApiError::Network(_) | ApiError::Transport(_) => {
                    "Connection failed. Please check your internet connection.".to_string()
                }
                ApiError::InvalidResponse(_) => {
                    "Unexpected response from JIRA. Please try again.".to_string()
                }
                ApiError::ConnectionFailed(detail) => {
                    format!("Could not connect to JIRA: {}", detail)
                }
            },
            AppError::Io(e) => format!("IO error: {}", e),
            AppError::Terminal(msg) => format!("Terminal error: {}", msg),
        }
    }

    /// Get a suggested action for the user.
    pub fn suggested_action(&self) -> Option<String> {
        match self {
            AppError::Config(ConfigError::MissingCredentials(_)) => Some(format!(
                "Please set: {}, {}, {}",
                ENV_URL, ENV_EMAIL, ENV_API_TOKEN
            )),
            AppError::Config(ConfigError::ParseError { .. })
            | AppError::Config(ConfigError::ValidationError(_)) => {
                Some("Fix the settings file or pass another one with --config.".to_string())
            }
            AppError::Api(ApiError::Unauthorized) => Some(
                "Check your API token at https://id.atlassian.com/manage-profile/security/api-tokens"
                    .to_string(),
            ),
            AppError::Api(ApiError::RateLimited) => {
                Some("Wait a few seconds and try again.".to_string())
            }
            AppError::Api(ApiError::Network(_))
            | AppError::Api(ApiError::Transport(_))
            | AppError::Api(ApiError::ConnectionFailed(_)) => {
                Some(format!("Check your internet connection and {}.", ENV_URL))
            }
            _ => None,
        }
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;
