//! Pricing entry points.
//!
//! Each function takes validated [`MarketParameters`] and a [`ModelKind`]
//! and dispatches to the closed-form pricers of `pricer_models` or to the
//! Monte Carlo engine in [`crate::mc`].
//!
//! # Examples
//!
//! ```rust
//! use pricer_core::types::{JumpParameters, MarketParameters, OptionType};
//! use pricer_pricing::engine::{price_analytical, ModelKind};
//!
//! let params = MarketParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Call)
//!     .unwrap()
//!     .with_jump(JumpParameters::new(1.0, -0.1, 0.2).unwrap());
//!
//! let bsm = price_analytical(&params, ModelKind::BlackScholes).unwrap();
//! let merton = price_analytical(&params, "merton".parse().unwrap()).unwrap();
//! assert!(merton > bsm);
//! ```

use std::fmt;
use std::str::FromStr;

use pricer_core::types::{MarketParameters, PricingError};
use pricer_models::analytical::{AnalyticalConfig, BlackScholes, MertonJumpDiffusion};
use pricer_models::models::StochasticModelEnum;

use crate::mc::{MonteCarloConfig, MonteCarloPricer, MonteCarloResult};

/// Stochastic model used for pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ModelKind {
    /// Black-Scholes-Merton geometric Brownian motion.
    #[default]
    BlackScholes,
    /// Merton jump-diffusion; requires jump parameters.
    Merton,
}

impl ModelKind {
    /// Short identifier used on the command line and in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::BlackScholes => "bsm",
            ModelKind::Merton => "merton",
        }
    }

    /// Builds the path dynamics for `params`.
    ///
    /// # Errors
    /// Returns `PricingError::InvalidParameter` named `jump` for
    /// [`ModelKind::Merton`] when `params` has no jump component.
    pub fn dynamics(&self, params: &MarketParameters) -> Result<StochasticModelEnum, PricingError> {
        match self {
            ModelKind::BlackScholes => Ok(StochasticModelEnum::gbm(params)),
            ModelKind::Merton => StochasticModelEnum::jump_diffusion(params),
        }
    }
}

impl FromStr for ModelKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bsm" | "black-scholes" | "blackscholes" | "gbm" => Ok(ModelKind::BlackScholes),
            "merton" | "jump-diffusion" | "jd" => Ok(ModelKind::Merton),
            _ => Err(PricingError::InvalidParameter {
                name: "model",
                value: f64::NAN,
                reason: "expected one of: bsm, black-scholes, merton, jump-diffusion",
            }),
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::BlackScholes => write!(f, "Black-Scholes-Merton"),
            ModelKind::Merton => write!(f, "Merton jump-diffusion"),
        }
    }
}

/// Closed-form price with the default [`AnalyticalConfig`].
///
/// # Errors
/// See [`price_analytical_with`].
pub fn price_analytical(params: &MarketParameters, model: ModelKind) -> Result<f64, PricingError> {
    price_analytical_with(params, model, &AnalyticalConfig::default())
}

/// Closed-form price under `config`.
///
/// # Errors
/// - `PricingError::InvalidParameter` named `jump` for Merton without jump parameters
/// - `PricingError::InvalidConfiguration` if `config` does not validate
/// - `PricingError::ModelFailure` if the Merton series reaches `max_terms`
///   before meeting its tolerance
pub fn price_analytical_with(
    params: &MarketParameters,
    model: ModelKind,
    config: &AnalyticalConfig,
) -> Result<f64, PricingError> {
    let strike = params.strike();
    let expiry = params.time_to_exercise();
    let option_type = params.option_type();

    let price = match model {
        ModelKind::BlackScholes => {
            BlackScholes::from_market(params, config)?.price(strike, expiry, option_type)
        }
        ModelKind::Merton => {
            let series =
                MertonJumpDiffusion::from_market(params, config)?.series(strike, expiry, option_type);
            if !series.converged {
                return Err(PricingError::ModelFailure(format!(
                    "Merton series not converged after {} terms; raise max_terms",
                    series.terms
                )));
            }
            series.price
        }
    };

    tracing::debug!(model = model.as_str(), %option_type, price, "analytical price");
    Ok(price)
}

/// Monte Carlo price with `steps` time steps and `n_paths` paths.
///
/// Paths are generated in parallel. With `seed: None` a base seed is drawn
/// from the process entropy source and returned in the result.
///
/// # Errors
/// - `PricingError::InvalidConfiguration` for zero or excessive steps or paths
/// - `PricingError::InvalidParameter` named `jump` for Merton without jump parameters
pub fn price_monte_carlo(
    params: &MarketParameters,
    model: ModelKind,
    steps: usize,
    n_paths: usize,
    seed: Option<u64>,
) -> Result<MonteCarloResult, PricingError> {
    let config = MonteCarloConfig::builder()
        .n_steps(steps)
        .n_paths(n_paths)
        .maybe_seed(seed)
        .build()?;

    price_monte_carlo_with(params, model, &config)
}

/// Monte Carlo price under an explicit configuration.
///
/// # Errors
/// See [`price_monte_carlo`].
pub fn price_monte_carlo_with(
    params: &MarketParameters,
    model: ModelKind,
    config: &MonteCarloConfig,
) -> Result<MonteCarloResult, PricingError> {
    let dynamics = model.dynamics(params)?;
    MonteCarloPricer::new(config.clone())?.price(params, &dynamics)
}
