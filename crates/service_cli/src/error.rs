//! CLI error types.

use thiserror::Error;

use crate::config::ConfigError;
use pricer_core::types::PricingError;

/// Errors surfaced by `optprice` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Pricing engine rejected the inputs.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Configuration file or environment could not be used.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Command-line arguments are inconsistent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing the path CSV failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Serialising JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
