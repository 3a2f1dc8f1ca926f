//! Domain error types

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::request::{Mode, ALL_MODES};

/// Error when an unsupported download mode is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid mode: \"{input}\". Valid modes are: {}", valid_modes())]
pub struct InvalidModeError {
    pub input: String,
}

fn valid_modes() -> String {
    ALL_MODES
        .iter()
        .map(Mode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors raised while building a retrieval request.
///
/// Everything except `OutputDirectory` is an input problem and is caught
/// before the filesystem is touched.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("URL must not be empty")]
    EmptyUrl,

    #[error("Invalid resolution: {0}. Maximum height must be a positive integer")]
    InvalidResolution(u32),

    #[error("Audio codec must not be empty")]
    EmptyCodec,

    #[error("Audio quality must not be empty")]
    EmptyQuality,

    #[error(transparent)]
    InvalidMode(#[from] InvalidModeError),

    #[error("Failed to create output directory {path}: {source}")]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RequestError {
    /// Whether the error comes from user input rather than the environment
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Self::OutputDirectory { .. })
    }
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
