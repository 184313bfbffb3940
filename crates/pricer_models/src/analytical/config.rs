//! Numerical policy for the analytical pricers.

use super::error::AnalyticalError;

/// Default Poisson weight below which the Merton series stops.
pub const DEFAULT_SERIES_TOLERANCE: f64 = 1e-10;

/// Default hard cap on the number of Merton series terms.
pub const DEFAULT_MAX_TERMS: usize = 100;

/// Default σ√T below which Black-Scholes falls back to intrinsic value.
pub const DEFAULT_DEGENERACY_THRESHOLD: f64 = 1e-8;

/// Series truncation and degeneracy settings.
///
/// # Examples
///
/// ```rust
/// use pricer_models::analytical::AnalyticalConfig;
///
/// let config = AnalyticalConfig::default()
///     .with_series_tolerance(1e-12)
///     .with_max_terms(200);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_terms, 200);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnalyticalConfig {
    /// Stop the Merton series once past the Poisson mode and the weight drops below this.
    pub series_tolerance: f64,
    /// Maximum number of Merton series terms.
    pub max_terms: usize,
    /// σ√T threshold for the intrinsic-value fallback.
    pub degeneracy_threshold: f64,
}

impl Default for AnalyticalConfig {
    fn default() -> Self {
        Self {
            series_tolerance: DEFAULT_SERIES_TOLERANCE,
            max_terms: DEFAULT_MAX_TERMS,
            degeneracy_threshold: DEFAULT_DEGENERACY_THRESHOLD,
        }
    }
}

impl AnalyticalConfig {
    /// Sets the series tolerance.
    #[inline]
    pub fn with_series_tolerance(mut self, tolerance: f64) -> Self {
        self.series_tolerance = tolerance;
        self
    }

    /// Sets the maximum number of series terms.
    #[inline]
    pub fn with_max_terms(mut self, max_terms: usize) -> Self {
        self.max_terms = max_terms;
        self
    }

    /// Sets the degeneracy threshold.
    #[inline]
    pub fn with_degeneracy_threshold(mut self, threshold: f64) -> Self {
        self.degeneracy_threshold = threshold;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticalError::InvalidConfig` if:
    /// - `series_tolerance` is not finite and positive
    /// - `max_terms` is 0
    /// - `degeneracy_threshold` is negative or not finite
    pub fn validate(&self) -> Result<(), AnalyticalError> {
        if !(self.series_tolerance.is_finite() && self.series_tolerance > 0.0) {
            return Err(AnalyticalError::InvalidConfig {
                message: format!(
                    "series_tolerance must be finite and positive, got {}",
                    self.series_tolerance
                ),
            });
        }
        if self.max_terms == 0 {
            return Err(AnalyticalError::InvalidConfig {
                message: "max_terms must be at least 1".to_string(),
            });
        }
        if !(self.degeneracy_threshold.is_finite() && self.degeneracy_threshold >= 0.0) {
            return Err(AnalyticalError::InvalidConfig {
                message: format!(
                    "degeneracy_threshold must be finite and non-negative, got {}",
                    self.degeneracy_threshold
                ),
            });
        }
        Ok(())
    }
}
