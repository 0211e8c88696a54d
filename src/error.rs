//! Error types for the configuration, parsing and CLI edges.
//!
//! The window manager, explorer and password gate are total and never
//! produce these; they only surface where outside input enters the system.

use thiserror::Error;

/// Errors surfaced by the public API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Clue not found: {0}")]
    ClueNotFound(u32),

    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt error: {0}")]
    Prompt(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<dialoguer::Error> for ApiError {
    fn from(err: dialoguer::Error) -> Self {
        ApiError::Prompt(err.to_string())
    }
}
