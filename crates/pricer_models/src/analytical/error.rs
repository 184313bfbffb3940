//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors specific to analytical pricing models

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// # Variants
/// - `InvalidVolatility`: Non-positive volatility
/// - `InvalidSpot`: Non-positive spot price
/// - `MissingJumpParameters`: A jump model was requested without jump inputs
/// - `InvalidConfig`: Series or degeneracy settings are unusable
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Jump-diffusion pricing requested without jump parameters.
    #[error("Merton jump-diffusion requires jump parameters")]
    MissingJumpParameters,

    /// Invalid analytical configuration.
    #[error("Invalid analytical configuration: {message}")]
    InvalidConfig {
        /// Description of the offending setting
        message: String,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidVolatility { volatility } => PricingError::InvalidParameter {
                name: "volatility",
                value: volatility,
                reason: "must be strictly positive",
            },
            AnalyticalError::InvalidSpot { spot } => PricingError::InvalidParameter {
                name: "spot",
                value: spot,
                reason: "must be strictly positive",
            },
            AnalyticalError::MissingJumpParameters => PricingError::InvalidParameter {
                name: "jump",
                value: f64::NAN,
                reason: "required by the Merton jump-diffusion model",
            },
            AnalyticalError::InvalidConfig { .. } => {
                PricingError::InvalidConfiguration(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_invalid_spot_display() {
        let err = AnalyticalError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_invalid_volatility_to_pricing_error() {
        let pricing_err: PricingError = AnalyticalError::InvalidVolatility { volatility: 0.0 }.into();
        assert_eq!(pricing_err.parameter_name(), Some("volatility"));
    }

    #[test]
    fn test_invalid_spot_to_pricing_error() {
        let pricing_err: PricingError = AnalyticalError::InvalidSpot { spot: -50.0 }.into();
        assert_eq!(pricing_err.parameter_name(), Some("spot"));
    }

    #[test]
    fn test_missing_jump_to_pricing_error() {
        let pricing_err: PricingError = AnalyticalError::MissingJumpParameters.into();
        assert_eq!(pricing_err.parameter_name(), Some("jump"));
    }

    #[test]
    fn test_invalid_config_to_pricing_error() {
        let err = AnalyticalError::InvalidConfig {
            message: "max_terms must be at least 1".to_string(),
        };
        match PricingError::from(err) {
            PricingError::InvalidConfiguration(msg) => assert!(msg.contains("max_terms")),
            other => panic!("Expected InvalidConfiguration, got {:?}", other),
        }
    }
}
