//! Validated market inputs for a single pricing request.
//!
//! [`MarketParameters`] is an immutable value object. It can only be obtained
//! through [`MarketParameters::new`] or [`MarketParametersBuilder::build`],
//! both of which reject non-positive scale inputs before they reach a pricer.

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// Option exercise payoff direction.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
///
/// assert_eq!(OptionType::Call.payoff(110.0, 100.0), 10.0);
/// assert_eq!(OptionType::Put.payoff(110.0, 100.0), 0.0);
/// assert_eq!("PUT".parse::<OptionType>().unwrap(), OptionType::Put);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    #[default]
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Terminal payoff for the given underlying price and strike.
    #[inline]
    pub fn payoff(&self, terminal: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (terminal - strike).max(0.0),
            OptionType::Put => (strike - terminal).max(0.0),
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(PricingError::InvalidParameter {
                name: "option_type",
                value: f64::NAN,
                reason: "must be 'call' or 'put'",
            }),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// Compound Poisson jump component of the Merton model.
///
/// Log-jump sizes are normal with mean `mean` and standard deviation
/// `volatility`; jumps arrive at `intensity` per year.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct JumpParameters {
    intensity: f64,
    mean: f64,
    volatility: f64,
}

impl JumpParameters {
    /// Creates validated jump parameters.
    ///
    /// # Errors
    /// - `intensity` negative or non-finite
    /// - `mean` non-finite
    /// - `volatility` negative or non-finite
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::JumpParameters;
    ///
    /// let jumps = JumpParameters::new(1.0, -0.1, 0.2).unwrap();
    /// assert!(jumps.kappa() < 0.0);
    /// assert!(JumpParameters::new(-1.0, 0.0, 0.2).is_err());
    /// ```
    pub fn new(intensity: f64, mean: f64, volatility: f64) -> Result<Self, PricingError> {
        non_negative("jump_intensity", intensity)?;
        finite("jump_mean", mean)?;
        non_negative("jump_volatility", volatility)?;
        Ok(Self {
            intensity,
            mean,
            volatility,
        })
    }

    /// Jump intensity λ (expected jumps per year).
    #[inline]
    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    /// Mean of the log-jump size μⱼ.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Standard deviation of the log-jump size σⱼ.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Expected relative jump size κ = exp(μⱼ + σⱼ²/2) - 1.
    #[inline]
    pub fn kappa(&self) -> f64 {
        (self.mean + 0.5 * self.volatility * self.volatility).exp() - 1.0
    }

    /// Risk-neutral drift compensator λκ.
    #[inline]
    pub fn compensator(&self) -> f64 {
        self.intensity * self.kappa()
    }
}

/// Validated scalar inputs for one pricing request.
///
/// # Invariants
/// - `spot`, `strike`, `volatility`, `time_to_exercise` are finite and > 0
/// - `rate` is finite (may be negative)
/// - jump parameters, when present, satisfy [`JumpParameters::new`]
///
/// # Examples
/// ```
/// use pricer_core::types::{MarketParameters, OptionType};
///
/// let params = MarketParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Put).unwrap();
/// assert_eq!(params.option_type(), OptionType::Put);
///
/// // Non-positive volatility never reaches a pricer
/// assert!(MarketParameters::new(100.0, 100.0, 0.05, 0.0, 1.0, OptionType::Put).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MarketParameters {
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    time_to_exercise: f64,
    option_type: OptionType,
    jump: Option<JumpParameters>,
}

impl MarketParameters {
    /// Creates validated parameters without a jump component.
    ///
    /// # Errors
    /// Returns `PricingError::InvalidParameter` naming the first input that
    /// violates its constraint.
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
        time_to_exercise: f64,
        option_type: OptionType,
    ) -> Result<Self, PricingError> {
        positive("spot", spot)?;
        positive("strike", strike)?;
        finite("rate", rate)?;
        positive("volatility", volatility)?;
        positive("time_to_exercise", time_to_exercise)?;

        Ok(Self {
            spot,
            strike,
            rate,
            volatility,
            time_to_exercise,
            option_type,
            jump: None,
        })
    }

    /// Creates a new builder.
    #[inline]
    pub fn builder() -> MarketParametersBuilder {
        MarketParametersBuilder::default()
    }

    /// Returns a copy carrying the given jump component.
    #[inline]
    pub fn with_jump(mut self, jump: JumpParameters) -> Self {
        self.jump = Some(jump);
        self
    }

    /// Returns a copy with a different option type.
    #[inline]
    pub fn with_option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = option_type;
        self
    }

    /// Current underlying price S₀.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Strike K.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Continuously compounded risk-free rate r.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Diffusion volatility σ.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Time to exercise T in years.
    #[inline]
    pub fn time_to_exercise(&self) -> f64 {
        self.time_to_exercise
    }

    /// Call or put.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Jump component, if any.
    #[inline]
    pub fn jump(&self) -> Option<&JumpParameters> {
        self.jump.as_ref()
    }

    /// Discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.time_to_exercise).exp()
    }

    /// Terminal payoff for this option at the given underlying price.
    #[inline]
    pub fn payoff(&self, terminal: f64) -> f64 {
        self.option_type.payoff(terminal, self.strike)
    }
}

/// Builder for [`MarketParameters`].
///
/// Every scalar must be set explicitly; `option_type` defaults to `Call`.
///
/// # Examples
/// ```
/// use pricer_core::types::{JumpParameters, MarketParameters};
///
/// let params = MarketParameters::builder()
///     .spot(100.0)
///     .strike(95.0)
///     .rate(0.03)
///     .volatility(0.25)
///     .time_to_exercise(0.5)
///     .jump(JumpParameters::new(1.0, -0.1, 0.2).unwrap())
///     .build()
///     .unwrap();
/// assert!(params.jump().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MarketParametersBuilder {
    spot: Option<f64>,
    strike: Option<f64>,
    rate: Option<f64>,
    volatility: Option<f64>,
    time_to_exercise: Option<f64>,
    option_type: OptionType,
    jump: Option<JumpParameters>,
}

impl MarketParametersBuilder {
    /// Sets the spot price.
    #[inline]
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the strike.
    #[inline]
    pub fn strike(mut self, strike: f64) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Sets the risk-free rate (decimal, not percent).
    #[inline]
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets the volatility (decimal, not percent).
    #[inline]
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Sets the time to exercise in years.
    #[inline]
    pub fn time_to_exercise(mut self, time_to_exercise: f64) -> Self {
        self.time_to_exercise = Some(time_to_exercise);
        self
    }

    /// Sets the option type.
    #[inline]
    pub fn option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = option_type;
        self
    }

    /// Attaches a jump component.
    #[inline]
    pub fn jump(mut self, jump: JumpParameters) -> Self {
        self.jump = Some(jump);
        self
    }

    /// Builds validated parameters.
    ///
    /// # Errors
    /// `InvalidParameter` if a field is missing (reported as NaN) or invalid.
    pub fn build(self) -> Result<MarketParameters, PricingError> {
        let params = MarketParameters::new(
            required("spot", self.spot)?,
            required("strike", self.strike)?,
            required("rate", self.rate)?,
            required("volatility", self.volatility)?,
            required("time_to_exercise", self.time_to_exercise)?,
            self.option_type,
        )?;

        Ok(match self.jump {
            Some(jump) => params.with_jump(jump),
            None => params,
        })
    }
}

fn required(name: &'static str, value: Option<f64>) -> Result<f64, PricingError> {
    value.ok_or(PricingError::InvalidParameter {
        name,
        value: f64::NAN,
        reason: "must be specified",
    })
}

fn finite(name: &'static str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        })
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), PricingError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(PricingError::InvalidParameter {
            name,
            value,
            reason: "must be strictly positive",
        })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), PricingError> {
    finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(PricingError::InvalidParameter {
            name,
            value,
            reason: "must be non-negative",
        })
    }
}
