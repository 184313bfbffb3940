//! Monte Carlo pricing orchestration.
//!
//! The [`MonteCarloPricer`] coordinates:
//! 1. Path generation (via [`simulate_paths`](super::paths::simulate_paths))
//! 2. Payoff aggregation (via [`estimate`](super::estimator::estimate))
//! 3. Packaging price, standard error, paths and seed into a [`MonteCarloResult`]

use std::time::Instant;

use pricer_core::types::{MarketParameters, PricingError};
use pricer_models::models::{StochasticModel, StochasticModelEnum};

use super::config::MonteCarloConfig;
use super::error::ConfigError;
use super::estimator::estimate;
use super::paths::{simulate_paths, SimulatedPaths};

/// Result of a Monte Carlo pricing run.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{MarketParameters, OptionType};
/// use pricer_pricing::engine::{price_monte_carlo, ModelKind};
///
/// let params = MarketParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Call).unwrap();
/// let result = price_monte_carlo(&params, ModelKind::BlackScholes, 10, 5_000, Some(7)).unwrap();
///
/// println!("Price: {} +/- {}", result.price, result.confidence_95());
/// assert_eq!(result.seed, 7);
/// assert_eq!(result.paths.n_paths(), 5_000);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MonteCarloResult {
    /// Discounted mean payoff.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
    /// The simulated trajectories.
    pub paths: SimulatedPaths,
    /// Base seed the run used; replaying it reproduces the paths.
    pub seed: u64,
}

impl MonteCarloResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Monte Carlo pricing engine.
///
/// Holds a validated configuration; each call to
/// [`price`](MonteCarloPricer::price) simulates a fresh set of paths.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{MarketParameters, OptionType};
/// use pricer_models::models::StochasticModelEnum;
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(10_000)
///     .n_steps(52)
///     .seed(42)
///     .build()
///     .unwrap();
/// let pricer = MonteCarloPricer::new(config).unwrap();
///
/// let params = MarketParameters::new(100.0, 110.0, 0.03, 0.25, 0.5, OptionType::Put).unwrap();
/// let result = pricer.price(&params, &StochasticModelEnum::gbm(&params)).unwrap();
/// assert!(result.price > 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
}

impl MonteCarloPricer {
    /// Creates a new pricer with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration is invalid.
    pub fn new(config: MonteCarloConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Prices the option in `params` by simulating `model`.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`simulate_paths`].
    pub fn price(
        &self,
        params: &MarketParameters,
        model: &StochasticModelEnum,
    ) -> Result<MonteCarloResult, PricingError> {
        let started = Instant::now();
        let paths = simulate_paths(params, model, &self.config)?;
        let est = estimate(&paths, params);
        let seed = paths.seed();

        tracing::info!(
            model = model.model_name(),
            option_type = %params.option_type(),
            n_paths = paths.n_paths(),
            n_steps = paths.n_steps(),
            seed,
            price = est.price,
            std_error = est.std_error,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Monte Carlo run complete"
        );

        Ok(MonteCarloResult {
            price: est.price,
            std_error: est.std_error,
            paths,
            seed,
        })
    }
}
