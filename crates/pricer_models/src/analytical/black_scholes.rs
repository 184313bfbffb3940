//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options with analytical Greeks calculations.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Degenerate Volatility
//!
//! Below the degeneracy threshold on σ√T the distribution of S_T collapses
//! onto the forward, and prices become the discounted forward intrinsic
//! values max(S - K·e^(-rT), 0) and max(K·e^(-rT) - S, 0).

use pricer_core::types::{MarketParameters, OptionType};

use super::config::{AnalyticalConfig, DEFAULT_DEGENERACY_THRESHOLD};
use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;

/// Black-Scholes model for European option pricing.
///
/// Provides closed-form pricing and Greeks calculations for European
/// options under lognormal dynamics.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Risk-free interest rate (r)
    rate: f64,
    /// Volatility (σ)
    volatility: f64,
    /// σ√T below which the intrinsic-value fallback applies
    degeneracy_threshold: f64,
}

/// Closed-form Black-Scholes sensitivities for one option.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Greeks {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ
    pub vega: f64,
    /// ∂V/∂t (calendar time, per year)
    pub theta: f64,
    /// ∂V/∂r
    pub rho: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0, 0.05, 0.2).is_ok());
    ///
    /// // Invalid spot
    /// assert!(BlackScholes::new(-100.0, 0.05, 0.2).is_err());
    ///
    /// // Invalid volatility
    /// assert!(BlackScholes::new(100.0, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, AnalyticalError> {
        if !(spot > 0.0) {
            return Err(AnalyticalError::InvalidSpot { spot });
        }

        if !(volatility > 0.0) {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
            degeneracy_threshold: DEFAULT_DEGENERACY_THRESHOLD,
        })
    }

    /// Assembles a model from inputs already known to be valid.
    #[inline]
    pub(crate) fn from_parts(spot: f64, rate: f64, volatility: f64, degeneracy_threshold: f64) -> Self {
        Self {
            spot,
            rate,
            volatility,
            degeneracy_threshold,
        }
    }

    /// Builds the model from validated market parameters.
    ///
    /// # Errors
    /// Returns `AnalyticalError::InvalidConfig` if `config` does not validate.
    pub fn from_market(
        params: &MarketParameters,
        config: &AnalyticalConfig,
    ) -> Result<Self, AnalyticalError> {
        config.validate()?;
        Ok(Self::new(params.spot(), params.rate(), params.volatility())?
            .with_degeneracy_threshold(config.degeneracy_threshold))
    }

    /// Replaces the σ√T threshold of the intrinsic-value fallback.
    #[inline]
    pub fn with_degeneracy_threshold(mut self, threshold: f64) -> Self {
        self.degeneracy_threshold = threshold;
        self
    }

    /// Returns the spot price.
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

    /// Returns true when σ√T is below the degeneracy threshold.
    #[inline]
    pub fn is_degenerate(&self, expiry: f64) -> bool {
        !(expiry > 0.0) || self.volatility * expiry.sqrt() < self.degeneracy_threshold
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// # Returns
    /// The d1 term. In the degenerate regime this is ±∞ according to whether
    /// the option is in or out of the money on a forward basis, and 0 at the
    /// forward.
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        if self.is_degenerate(expiry) {
            return self.forward_moneyness_sign(strike, expiry);
        }

        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + 0.5 * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        if self.is_degenerate(expiry) {
            return self.forward_moneyness_sign(strike, expiry);
        }

        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Limit of d1 and d2 as σ√T → 0.
    fn forward_moneyness_sign(&self, strike: f64, expiry: f64) -> f64 {
        let forward_gap = self.spot - strike * self.discount(expiry);
        if forward_gap > 0.0 {
            f64::INFINITY
        } else if forward_gap < 0.0 {
            f64::NEG_INFINITY
        } else {
            0.0
        }
    }

    #[inline]
    fn discount(&self, expiry: f64) -> f64 {
        (-self.rate * expiry.max(0.0)).exp()
    }

    /// Computes European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
    /// let price = bs.price_call(100.0, 1.0);
    ///
    /// assert!((price - 10.4506).abs() < 1e-4);
    /// ```
    #[inline]
    pub fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        let discount = self.discount(expiry);

        if self.is_degenerate(expiry) {
            return (self.spot - strike * discount).max(0.0);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
    /// let price = bs.price_put(100.0, 1.0);
    ///
    /// assert!((price - 5.5735).abs() < 1e-4);
    /// ```
    #[inline]
    pub fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        let discount = self.discount(expiry);

        if self.is_degenerate(expiry) {
            return (strike * discount - self.spot).max(0.0);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }

    /// Prices a European option of the given type.
    ///
    /// Emits a debug event when the intrinsic-value fallback is taken.
    pub fn price(&self, strike: f64, expiry: f64, option_type: OptionType) -> f64 {
        if self.is_degenerate(expiry) {
            tracing::debug!(
                volatility = self.volatility,
                expiry,
                threshold = self.degeneracy_threshold,
                "sigma*sqrt(T) below threshold, using discounted forward intrinsic value"
            );
        }

        match option_type {
            OptionType::Call => self.price_call(strike, expiry),
            OptionType::Put => self.price_put(strike, expiry),
        }
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = N(d₁)
    /// - Put Delta = N(d₁) - 1
    #[inline]
    pub fn delta(&self, strike: f64, expiry: f64, option_type: OptionType) -> f64 {
        let d1 = self.d1(strike, expiry);

        match option_type {
            OptionType::Call => norm_cdf(d1),
            OptionType::Put => -norm_cdf(-d1),
        }
    }

    /// Computes Gamma (∂²V/∂S²).
    ///
    /// Gamma = φ(d₁) / (S·σ·√T), identical for calls and puts.
    #[inline]
    pub fn gamma(&self, strike: f64, expiry: f64) -> f64 {
        if self.is_degenerate(expiry) {
            return 0.0;
        }

        let d1 = self.d1(strike, expiry);
        norm_pdf(d1) / (self.spot * self.volatility * expiry.sqrt())
    }

    /// Computes Vega (∂V/∂σ).
    ///
    /// Vega = S·√T·φ(d₁), identical for calls and puts.
    #[inline]
    pub fn vega(&self, strike: f64, expiry: f64) -> f64 {
        if self.is_degenerate(expiry) {
            return 0.0;
        }

        let d1 = self.d1(strike, expiry);
        self.spot * expiry.sqrt() * norm_pdf(d1)
    }

    /// Computes Theta (∂V/∂t).
    ///
    /// - Call Theta = -(S·σ·φ(d₁))/(2√T) - r·K·e^(-rT)·N(d₂)
    /// - Put Theta = -(S·σ·φ(d₁))/(2√T) + r·K·e^(-rT)·N(-d₂)
    ///
    /// This is the rate of change with respect to calendar time, usually
    /// negative (time decay).
    #[inline]
    pub fn theta(&self, strike: f64, expiry: f64, option_type: OptionType) -> f64 {
        let d2 = self.d2(strike, expiry);
        let discount = self.discount(expiry);

        let decay = if self.is_degenerate(expiry) {
            0.0
        } else {
            let d1 = self.d1(strike, expiry);
            -(self.spot * self.volatility * norm_pdf(d1)) / (2.0 * expiry.sqrt())
        };

        match option_type {
            OptionType::Call => decay - self.rate * strike * discount * norm_cdf(d2),
            OptionType::Put => decay + self.rate * strike * discount * norm_cdf(-d2),
        }
    }

    /// Computes Rho (∂V/∂r).
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂)
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂)
    #[inline]
    pub fn rho(&self, strike: f64, expiry: f64, option_type: OptionType) -> f64 {
        let d2 = self.d2(strike, expiry);
        let discount = self.discount(expiry);
        let expiry = expiry.max(0.0);

        match option_type {
            OptionType::Call => strike * expiry * discount * norm_cdf(d2),
            OptionType::Put => -strike * expiry * discount * norm_cdf(-d2),
        }
    }

    /// Computes all five Greeks at once.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::OptionType;
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
    /// let greeks = bs.greeks(100.0, 1.0, OptionType::Call);
    /// assert!(greeks.delta > 0.5 && greeks.delta < 1.0);
    /// assert!(greeks.gamma > 0.0);
    /// ```
    pub fn greeks(&self, strike: f64, expiry: f64, option_type: OptionType) -> Greeks {
        Greeks {
            delta: self.delta(strike, expiry, option_type),
            gamma: self.gamma(strike, expiry),
            vega: self.vega(strike, expiry),
            theta: self.theta(strike, expiry, option_type),
            rho: self.rho(strike, expiry, option_type),
        }
    }
}
