//! CLI command implementations
//!
//! Each submodule implements a specific CLI command; the option inputs
//! shared by both commands live here.

pub mod analytical;
pub mod monte_carlo;
pub mod output;

use chrono::NaiveDate;
use clap::Args;
use pricer_core::types::{time_to_exercise, JumpParameters, MarketParameters, OptionType};
use pricer_pricing::ModelKind;

use crate::{CliError, Result};
use output::OutputFormat;

/// Option contract and market inputs
#[derive(Args, Debug, Clone)]
pub struct OptionArgs {
    /// Pricing model (bsm, merton)
    #[arg(short, long, default_value = "bsm")]
    pub model: ModelKind,

    /// Option type (call, put)
    #[arg(short = 't', long = "type", default_value = "call")]
    pub option_type: OptionType,

    /// Current underlying price
    #[arg(long)]
    pub spot: f64,

    /// Strike price
    #[arg(long)]
    pub strike: f64,

    /// Continuously compounded risk-free rate
    #[arg(long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Diffusion volatility
    #[arg(long)]
    pub volatility: f64,

    /// Time to exercise in years
    #[arg(long, conflicts_with = "exercise_date")]
    pub maturity: Option<f64>,

    /// Exercise date (YYYY-MM-DD), converted with Act/365
    #[arg(long)]
    pub exercise_date: Option<NaiveDate>,

    /// Valuation date for --exercise-date (defaults to today)
    #[arg(long, requires = "exercise_date")]
    pub today: Option<NaiveDate>,

    /// Rate and volatility are given in percent
    #[arg(long)]
    pub percent: bool,

    /// Jump intensity λ (jumps per year)
    #[arg(long)]
    pub jump_intensity: Option<f64>,

    /// Mean log jump size μj
    #[arg(long, allow_negative_numbers = true)]
    pub jump_mean: Option<f64>,

    /// Log jump size volatility σj
    #[arg(long)]
    pub jump_volatility: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl OptionArgs {
    /// Builds validated market parameters, resolving the exercise date
    /// against `today` when no maturity is given.
    pub fn market_parameters(&self, today: NaiveDate) -> Result<MarketParameters> {
        let scale = if self.percent { 0.01 } else { 1.0 };

        let maturity = match (self.maturity, self.exercise_date) {
            (Some(t), None) => t,
            (None, Some(date)) => time_to_exercise(self.today.unwrap_or(today), date)?,
            (None, None) => {
                return Err(CliError::InvalidArgument(
                    "one of --maturity or --exercise-date is required".into(),
                ))
            }
            (Some(_), Some(_)) => {
                return Err(CliError::InvalidArgument(
                    "--maturity and --exercise-date are mutually exclusive".into(),
                ))
            }
        };

        let mut builder = MarketParameters::builder()
            .spot(self.spot)
            .strike(self.strike)
            .rate(self.rate * scale)
            .volatility(self.volatility * scale)
            .time_to_exercise(maturity)
            .option_type(self.option_type);

        if let Some(jump) = self.jump()? {
            builder = builder.jump(jump);
        }

        Ok(builder.build()?)
    }

    fn jump(&self) -> Result<Option<JumpParameters>> {
        match (self.jump_intensity, self.jump_mean, self.jump_volatility) {
            (None, None, None) => Ok(None),
            (Some(intensity), Some(mean), Some(volatility)) => {
                Ok(Some(JumpParameters::new(intensity, mean, volatility)?))
            }
            _ => Err(CliError::InvalidArgument(
                "--jump-intensity, --jump-mean and --jump-volatility must be given together"
                    .into(),
            )),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use approx::assert_relative_eq;

    pub(crate) fn option_args() -> OptionArgs {
        OptionArgs {
            model: ModelKind::BlackScholes,
            option_type: OptionType::Call,
            spot: 100.0,
            strike: 100.0,
            rate: 0.05,
            volatility: 0.2,
            maturity: Some(1.0),
            exercise_date: None,
            today: None,
            percent: false,
            jump_intensity: None,
            jump_mean: None,
            jump_volatility: None,
            format: OutputFormat::Table,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_plain_inputs() {
        let params = option_args().market_parameters(date(2024, 1, 1)).unwrap();
        assert_eq!(params.spot(), 100.0);
        assert_eq!(params.time_to_exercise(), 1.0);
        assert!(params.jump().is_none());
    }

    #[test]
    fn test_percent_inputs() {
        let args = OptionArgs {
            rate: 5.0,
            volatility: 20.0,
            percent: true,
            ..option_args()
        };
        let params = args.market_parameters(date(2024, 1, 1)).unwrap();
        assert_relative_eq!(params.rate(), 0.05, epsilon = 1e-15);
        assert_relative_eq!(params.volatility(), 0.2, epsilon = 1e-15);
    }

    #[test]
    fn test_exercise_date_inputs() {
        let args = OptionArgs {
            maturity: None,
            exercise_date: Some(date(2025, 1, 1)),
            ..option_args()
        };
        let params = args.market_parameters(date(2024, 1, 1)).unwrap();
        assert_relative_eq!(params.time_to_exercise(), 366.0 / 365.0, epsilon = 1e-12);

        let past = OptionArgs {
            maturity: None,
            exercise_date: Some(date(2023, 6, 1)),
            ..option_args()
        };
        assert!(matches!(
            past.market_parameters(date(2024, 1, 1)),
            Err(CliError::Pricing(_))
        ));
    }

    #[test]
    fn test_missing_maturity() {
        let args = OptionArgs {
            maturity: None,
            ..option_args()
        };
        assert!(matches!(
            args.market_parameters(date(2024, 1, 1)),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_jump_inputs() {
        let args = OptionArgs {
            jump_intensity: Some(1.0),
            jump_mean: Some(-0.1),
            jump_volatility: Some(0.2),
            ..option_args()
        };
        let params = args.market_parameters(date(2024, 1, 1)).unwrap();
        assert_eq!(params.jump().unwrap().intensity(), 1.0);

        let partial = OptionArgs {
            jump_intensity: Some(1.0),
            ..option_args()
        };
        assert!(matches!(
            partial.market_parameters(date(2024, 1, 1)),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_invalid_market_input() {
        let args = OptionArgs {
            spot: -5.0,
            ..option_args()
        };
        match args.market_parameters(date(2024, 1, 1)) {
            Err(CliError::Pricing(e)) => assert_eq!(e.parameter_name(), Some("spot")),
            other => panic!("expected pricing error, got {:?}", other),
        }
    }
}
