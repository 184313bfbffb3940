//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: every failure the pricing engine reports to its callers

use thiserror::Error;

/// Categorised pricing errors.
///
/// All engine-level failures surface synchronously through this type; no
/// partial result is ever returned alongside an error.
///
/// # Variants
/// - `InvalidParameter`: A market input is out of its admissible range
/// - `InvalidConfiguration`: Simulation or series settings are unusable
/// - `ModelFailure`: A sampling distribution could not be constructed, or a
///   series price stopped at its term cap
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidParameter {
///     name: "spot",
///     value: -1.0,
///     reason: "must be strictly positive",
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter 'spot' = -1: must be strictly positive"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// A market input violates its range constraint.
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
        /// Constraint that was violated
        reason: &'static str,
    },

    /// Simulation or analytical configuration is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Model could not be evaluated (e.g. a sampling distribution rejected its inputs).
    #[error("Model failure: {0}")]
    ModelFailure(String),
}

impl PricingError {
    /// Returns the offending parameter name for `InvalidParameter`.
    pub fn parameter_name(&self) -> Option<&'static str> {
        match self {
            PricingError::InvalidParameter { name, .. } => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = PricingError::InvalidParameter {
            name: "volatility",
            value: 0.0,
            reason: "must be strictly positive",
        };
        assert_eq!(
            format!("{}", err),
            "Invalid parameter 'volatility' = 0: must be strictly positive"
        );
        assert_eq!(err.parameter_name(), Some("volatility"));
    }

    #[test]
    fn test_invalid_configuration_display() {
        let err = PricingError::InvalidConfiguration("n_steps must be at least 1".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid configuration: n_steps must be at least 1"
        );
        assert_eq!(err.parameter_name(), None);
    }

    #[test]
    fn test_model_failure_display() {
        let err = PricingError::ModelFailure("Poisson rate is not finite".to_string());
        assert!(format!("{}", err).contains("Poisson"));
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::ModelFailure("x".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
