//! Static dispatch enum for stochastic models.
//!
//! `StochasticModelEnum` lets the path simulator hold either dynamics without
//! trait objects; every call is a `match` on the variant.
//!
//! ## Example
//!
//! ```
//! use pricer_core::types::{MarketParameters, OptionType};
//! use pricer_models::models::{StochasticModel, StochasticModelEnum};
//!
//! let params = MarketParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Call).unwrap();
//! let model = StochasticModelEnum::gbm(&params);
//!
//! assert_eq!(model.model_name(), "GBM");
//! assert!(!model.has_jumps());
//! ```

use pricer_core::types::{MarketParameters, PricingError};

use super::gbm::GbmDynamics;
use super::jump_diffusion::JumpDiffusionDynamics;
use super::stochastic::{StepShocks, StochasticModel};

/// Enum wrapper over the supported dynamics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StochasticModelEnum {
    /// Geometric Brownian motion
    Gbm(GbmDynamics),
    /// Merton jump-diffusion
    JumpDiffusion(JumpDiffusionDynamics),
}

impl StochasticModelEnum {
    /// GBM dynamics for `params`.
    pub fn gbm(params: &MarketParameters) -> Self {
        StochasticModelEnum::Gbm(GbmDynamics::from_market(params))
    }

    /// Jump-diffusion dynamics for `params`.
    ///
    /// # Errors
    /// Returns `PricingError::InvalidParameter` named `jump` when `params`
    /// carries no jump component.
    pub fn jump_diffusion(params: &MarketParameters) -> Result<Self, PricingError> {
        Ok(StochasticModelEnum::JumpDiffusion(
            JumpDiffusionDynamics::from_market(params)?,
        ))
    }

    /// True when steps need a Poisson draw.
    #[inline]
    pub fn has_jumps(&self) -> bool {
        self.jump_intensity() > 0.0
    }
}

impl From<GbmDynamics> for StochasticModelEnum {
    fn from(model: GbmDynamics) -> Self {
        StochasticModelEnum::Gbm(model)
    }
}

impl From<JumpDiffusionDynamics> for StochasticModelEnum {
    fn from(model: JumpDiffusionDynamics) -> Self {
        StochasticModelEnum::JumpDiffusion(model)
    }
}

impl StochasticModel for StochasticModelEnum {
    fn initial_state(&self) -> f64 {
        match self {
            StochasticModelEnum::Gbm(m) => m.initial_state(),
            StochasticModelEnum::JumpDiffusion(m) => m.initial_state(),
        }
    }

    #[inline]
    fn evolve_step(&self, spot: f64, dt: f64, shocks: &StepShocks) -> f64 {
        match self {
            StochasticModelEnum::Gbm(m) => m.evolve_step(spot, dt, shocks),
            StochasticModelEnum::JumpDiffusion(m) => m.evolve_step(spot, dt, shocks),
        }
    }

    fn jump_intensity(&self) -> f64 {
        match self {
            StochasticModelEnum::Gbm(m) => m.jump_intensity(),
            StochasticModelEnum::JumpDiffusion(m) => m.jump_intensity(),
        }
    }

    fn model_name(&self) -> &'static str {
        match self {
            StochasticModelEnum::Gbm(m) => m.model_name(),
            StochasticModelEnum::JumpDiffusion(m) => m.model_name(),
        }
    }
}
