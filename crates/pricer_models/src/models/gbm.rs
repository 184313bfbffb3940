//! Geometric Brownian Motion (GBM) model implementation.
//!
//! GBM is the fundamental model for asset price dynamics, described by:
//! ```text
//! dS = r * S * dt + sigma * S * dW
//! ```
//! where:
//! - S = asset price
//! - r = risk-free rate
//! - sigma = volatility
//! - dW = Wiener process increment
//!
//! ## Log-space formulation
//!
//! For numerical stability, we use the exact solution:
//! ```text
//! S(t+dt) = S(t) * exp((r - 0.5*sigma^2)*dt + sigma*sqrt(dt)*dW)
//! ```

use pricer_core::types::{MarketParameters, PricingError};

use super::stochastic::{StepShocks, StochasticModel};

/// Risk-neutral GBM dynamics.
///
/// Volatility may be zero here, giving deterministic compounding at `rate`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmDynamics {
    spot: f64,
    rate: f64,
    volatility: f64,
}

impl GbmDynamics {
    /// Create new GBM dynamics with validation.
    ///
    /// # Arguments
    /// * `spot` - Initial spot price (must be positive)
    /// * `rate` - Risk-free rate
    /// * `volatility` - Volatility (must be non-negative)
    ///
    /// # Errors
    /// Returns `PricingError::InvalidParameter` for a non-positive spot, a
    /// negative volatility or a non-finite rate.
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, PricingError> {
        if !(spot > 0.0 && spot.is_finite()) {
            return Err(PricingError::InvalidParameter {
                name: "spot",
                value: spot,
                reason: "must be finite and strictly positive",
            });
        }
        if !rate.is_finite() {
            return Err(PricingError::InvalidParameter {
                name: "rate",
                value: rate,
                reason: "must be finite",
            });
        }
        if !(volatility >= 0.0 && volatility.is_finite()) {
            return Err(PricingError::InvalidParameter {
                name: "volatility",
                value: volatility,
                reason: "must be finite and non-negative",
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// GBM dynamics for the underlying described by `params`.
    pub fn from_market(params: &MarketParameters) -> Self {
        Self {
            spot: params.spot(),
            rate: params.rate(),
            volatility: params.volatility(),
        }
    }

    /// Returns the initial spot.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }
}

impl StochasticModel for GbmDynamics {
    fn initial_state(&self) -> f64 {
        self.spot
    }

    #[inline]
    fn evolve_step(&self, spot: f64, dt: f64, shocks: &StepShocks) -> f64 {
        // Drift term: (r - 0.5 * sigma^2) * dt
        let drift = (self.rate - 0.5 * self.volatility * self.volatility) * dt;

        // Diffusion term: sigma * sqrt(dt) * dW
        let diffusion = self.volatility * dt.sqrt() * shocks.diffusion;

        spot * (drift + diffusion).exp()
    }

    fn model_name(&self) -> &'static str {
        "GBM"
    }
}
