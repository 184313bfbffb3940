//! Error types for the Monte Carlo engine.
//!
//! This module defines structured error types for configuration validation.

use std::fmt;

use pricer_core::types::PricingError;

/// Configuration validation errors.
///
/// Returned when Monte Carlo configuration parameters are invalid.
///
/// # Variants
///
/// - `InvalidPathCount`: Path count is zero or exceeds maximum
/// - `InvalidStepCount`: Step count is zero or exceeds maximum
/// - `PathBufferTooLarge`: Paths times time points exceeds the buffer limit
/// - `InvalidParameter`: Generic parameter validation failure
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count is invalid.
    InvalidPathCount(usize),

    /// Step count is invalid.
    InvalidStepCount(usize),

    /// The row-major path buffer would exceed the allowed size.
    PathBufferTooLarge {
        /// Requested number of paths
        n_paths: usize,
        /// Requested number of steps
        n_steps: usize,
    },

    /// Generic parameter validation failure.
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Description of the issue
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPathCount(count) => {
                write!(
                    f,
                    "Invalid path count {}: must be in range [1, 10_000_000]",
                    count
                )
            }
            Self::InvalidStepCount(count) => {
                write!(
                    f,
                    "Invalid step count {}: must be in range [1, 10_000]",
                    count
                )
            }
            Self::PathBufferTooLarge { n_paths, n_steps } => {
                write!(
                    f,
                    "Path buffer too large: {} paths x {} time points exceeds {} values",
                    n_paths,
                    n_steps.saturating_add(1),
                    super::config::MAX_PATH_VALUES
                )
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "Invalid parameter '{}': {}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        PricingError::InvalidConfiguration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidPathCount(0);
        assert!(err.to_string().contains("Invalid path count 0"));

        let err = ConfigError::InvalidStepCount(20_000);
        assert!(err.to_string().contains("Invalid step count 20000"));

        let err = ConfigError::InvalidParameter {
            name: "n_paths",
            value: "must be specified".to_string(),
        };
        assert!(err.to_string().contains("n_paths"));
    }

    #[test]
    fn test_buffer_error_display() {
        let err = ConfigError::PathBufferTooLarge {
            n_paths: 10_000_000,
            n_steps: 10_000,
        };
        let msg = err.to_string();
        assert!(msg.contains("10000000 paths"));
        assert!(msg.contains("10001 time points"));
    }

    #[test]
    fn test_into_pricing_error() {
        let err: PricingError = ConfigError::InvalidStepCount(0).into();
        match err {
            PricingError::InvalidConfiguration(msg) => assert!(msg.contains("step count")),
            other => panic!("Expected InvalidConfiguration, got {:?}", other),
        }
    }
}
