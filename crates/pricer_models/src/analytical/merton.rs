//! Merton (1976) jump-diffusion pricing for European options.
//!
//! The price is a Poisson-weighted mixture of Black-Scholes prices, one per
//! jump count n:
//!
//! Price = Σₙ wₙ · BS(S, K, rₙ, σₙ, T)
//!
//! Where:
//! - κ = e^(μⱼ + σⱼ²/2) - 1 and λ' = λ(1 + κ)
//! - wₙ = e^(-λ'T) (λ'T)ⁿ / n!
//! - σₙ² = σ² + n·σⱼ²/T
//! - rₙ = r - λκ + n·ln(1 + κ)/T
//!
//! The weights are accumulated in log space through the recursion
//! wₙ₊₁ = wₙ · λ'T / (n + 1), so large λ'T does not underflow e^(-λ'T).

use pricer_core::types::{JumpParameters, MarketParameters, OptionType};

use super::black_scholes::BlackScholes;
use super::config::AnalyticalConfig;
use super::error::AnalyticalError;

/// Merton jump-diffusion model for European option pricing.
///
/// # Examples
/// ```
/// use pricer_core::types::{JumpParameters, OptionType};
/// use pricer_models::analytical::{BlackScholes, MertonJumpDiffusion};
///
/// let jump = JumpParameters::new(1.0, -0.1, 0.2).unwrap();
/// let merton = MertonJumpDiffusion::new(100.0, 0.05, 0.2, jump).unwrap();
/// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
///
/// // Jump risk adds to the ATM call value
/// assert!(merton.price(100.0, 1.0, OptionType::Call) > bs.price_call(100.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MertonJumpDiffusion {
    spot: f64,
    rate: f64,
    volatility: f64,
    jump: JumpParameters,
    config: AnalyticalConfig,
}

/// Outcome of a truncated Merton series evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SeriesPrice {
    /// Option price.
    pub price: f64,
    /// Number of series terms summed.
    pub terms: usize,
    /// False when `max_terms` was reached before the tolerance was met.
    pub converged: bool,
}

impl MertonJumpDiffusion {
    /// Creates a Merton model with the default [`AnalyticalConfig`].
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0
    pub fn new(
        spot: f64,
        rate: f64,
        volatility: f64,
        jump: JumpParameters,
    ) -> Result<Self, AnalyticalError> {
        // Diffusion inputs share the Black-Scholes constraints
        BlackScholes::new(spot, rate, volatility)?;

        Ok(Self {
            spot,
            rate,
            volatility,
            jump,
            config: AnalyticalConfig::default(),
        })
    }

    /// Builds the model from market parameters carrying a jump component.
    ///
    /// # Errors
    /// - `AnalyticalError::MissingJumpParameters` if `params` has no jump component
    /// - `AnalyticalError::InvalidConfig` if `config` does not validate
    pub fn from_market(
        params: &MarketParameters,
        config: &AnalyticalConfig,
    ) -> Result<Self, AnalyticalError> {
        let jump = params
            .jump()
            .copied()
            .ok_or(AnalyticalError::MissingJumpParameters)?;

        Self::new(params.spot(), params.rate(), params.volatility(), jump)?.with_config(*config)
    }

    /// Replaces the series and degeneracy settings.
    ///
    /// # Errors
    /// Returns `AnalyticalError::InvalidConfig` if `config` does not validate.
    pub fn with_config(mut self, config: AnalyticalConfig) -> Result<Self, AnalyticalError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Returns the jump parameters.
    #[inline]
    pub fn jump(&self) -> &JumpParameters {
        &self.jump
    }

    /// Returns the active configuration.
    #[inline]
    pub fn config(&self) -> &AnalyticalConfig {
        &self.config
    }

    /// Prices a European option.
    pub fn price(&self, strike: f64, expiry: f64, option_type: OptionType) -> f64 {
        self.series(strike, expiry, option_type).price
    }

    /// Evaluates the truncated series and reports how it terminated.
    ///
    /// Summation stops after term n once n ≥ λ'T and wₙ < `series_tolerance`,
    /// or when `max_terms` terms have been added.
    pub fn series(&self, strike: f64, expiry: f64, option_type: OptionType) -> SeriesPrice {
        let kappa = self.jump.kappa();
        let mean_jumps = self.jump.intensity() * (1.0 + kappa) * expiry;

        if !(mean_jumps > 0.0) || !(expiry > 0.0) {
            // No jumps within the horizon
            let price = self.diffusion(self.rate, self.volatility).price(strike, expiry, option_type);
            return SeriesPrice {
                price,
                terms: 1,
                converged: true,
            };
        }

        let compensated_rate = self.rate - self.jump.compensator();
        // ln(1 + κ) = μⱼ + σⱼ²/2
        let log_jump_growth = self.jump.mean() + 0.5 * self.jump.volatility().powi(2);
        let jump_variance = self.jump.volatility().powi(2);
        let ln_mean_jumps = mean_jumps.ln();

        if self.diffusion(self.rate, self.volatility).is_degenerate(expiry) {
            tracing::debug!(
                volatility = self.volatility,
                expiry,
                "sigma*sqrt(T) below threshold, zero-jump term uses forward intrinsic value"
            );
        }

        let mut ln_weight = -mean_jumps;
        let mut price = 0.0;
        let mut terms = 0;
        let mut converged = false;

        for n in 0..self.config.max_terms {
            let n_f = n as f64;
            let weight = ln_weight.exp();

            let sigma_n = (self.volatility.powi(2) + n_f * jump_variance / expiry).sqrt();
            let rate_n = compensated_rate + n_f * log_jump_growth / expiry;
            let term = self.diffusion(rate_n, sigma_n);

            price += weight
                * match option_type {
                    OptionType::Call => term.price_call(strike, expiry),
                    OptionType::Put => term.price_put(strike, expiry),
                };
            terms = n + 1;

            if n_f >= mean_jumps && weight < self.config.series_tolerance {
                converged = true;
                break;
            }

            ln_weight += ln_mean_jumps - (n_f + 1.0).ln();
        }

        if converged {
            tracing::debug!(terms, mean_jumps, "Merton series converged");
        } else {
            tracing::warn!(
                terms,
                mean_jumps,
                max_terms = self.config.max_terms,
                "Merton series truncated at max_terms before reaching tolerance"
            );
        }

        SeriesPrice {
            price,
            terms,
            converged,
        }
    }

    /// Black-Scholes pricer for one conditional jump count.
    ///
    /// σₙ ≥ σ > 0 holds for every term, so the constructor checks are skipped.
    fn diffusion(&self, rate: f64, volatility: f64) -> BlackScholes {
        BlackScholes::from_parts(self.spot, rate, volatility, self.config.degeneracy_threshold)
    }
}
