//! CLI error types.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands.
///
/// Per-record solve failures are not errors here: the batch writes the
/// NaN sentinel for those rows and carries on.
#[derive(Debug, Error)]
pub enum CliError {
    /// An input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// A command-line argument is out of its domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be loaded or failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Reading or writing a CSV file failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration could not be rendered as TOML.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
