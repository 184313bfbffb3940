//! Merton jump-diffusion dynamics.
//!
//! ```text
//! dS / S- = (r - lambda*kappa) dt + sigma dW + (Y - 1) dN
//! ```
//! with N a Poisson process of intensity lambda, ln Y ~ N(mu_j, sigma_j^2) and
//! kappa = E[Y - 1]. The compensator -lambda*kappa keeps the discounted spot a
//! martingale.
//!
//! One step over dt with K jumps is exact in log space:
//! ```text
//! S(t+dt) = S(t) * exp((r - lambda*kappa - 0.5*sigma^2)*dt + sigma*sqrt(dt)*Z + J)
//! J = K*mu_j + sigma_j*sqrt(K)*Z_J
//! ```
//! The sum of K independent N(mu_j, sigma_j^2) jump sizes is itself
//! N(K*mu_j, K*sigma_j^2), so one extra normal covers any jump count.

use pricer_core::types::{JumpParameters, MarketParameters, PricingError};

use super::gbm::GbmDynamics;
use super::stochastic::{StepShocks, StochasticModel};

/// Risk-neutral Merton jump-diffusion dynamics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JumpDiffusionDynamics {
    diffusion: GbmDynamics,
    jump: JumpParameters,
}

impl JumpDiffusionDynamics {
    /// Create jump-diffusion dynamics with validation.
    ///
    /// # Errors
    /// Returns `PricingError::InvalidParameter` under the same rules as
    /// [`GbmDynamics::new`].
    pub fn new(
        spot: f64,
        rate: f64,
        volatility: f64,
        jump: JumpParameters,
    ) -> Result<Self, PricingError> {
        Ok(Self {
            diffusion: GbmDynamics::new(spot, rate, volatility)?,
            jump,
        })
    }

    /// Jump-diffusion dynamics for the underlying described by `params`.
    ///
    /// # Errors
    /// Returns `PricingError::InvalidParameter` named `jump` when `params`
    /// carries no jump component.
    pub fn from_market(params: &MarketParameters) -> Result<Self, PricingError> {
        let jump = params.jump().copied().ok_or(PricingError::InvalidParameter {
            name: "jump",
            value: f64::NAN,
            reason: "required by the Merton jump-diffusion model",
        })?;

        Ok(Self {
            diffusion: GbmDynamics::from_market(params),
            jump,
        })
    }

    /// Returns the jump parameters.
    #[inline]
    pub fn jump(&self) -> &JumpParameters {
        &self.jump
    }

    /// Returns the diffusive part of the dynamics.
    #[inline]
    pub fn diffusion(&self) -> &GbmDynamics {
        &self.diffusion
    }
}

impl StochasticModel for JumpDiffusionDynamics {
    fn initial_state(&self) -> f64 {
        self.diffusion.spot()
    }

    #[inline]
    fn evolve_step(&self, spot: f64, dt: f64, shocks: &StepShocks) -> f64 {
        let sigma = self.diffusion.volatility();
        let drift = (self.diffusion.rate() - self.jump.compensator() - 0.5 * sigma * sigma) * dt;
        let diffusion = sigma * dt.sqrt() * shocks.diffusion;

        let log_jump = if shocks.jump_count == 0 {
            0.0
        } else {
            let k = shocks.jump_count as f64;
            k * self.jump.mean() + self.jump.volatility() * k.sqrt() * shocks.jump_size
        };

        spot * (drift + diffusion + log_jump).exp()
    }

    fn jump_intensity(&self) -> f64 {
        self.jump.intensity()
    }

    fn model_name(&self) -> &'static str {
        "Merton jump-diffusion"
    }
}
