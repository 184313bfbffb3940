//! Analytical command implementation
//!
//! Prices a European option in closed form. Black-Scholes-Merton output
//! includes the Greeks; Merton output includes the series diagnostics.

use chrono::{Local, NaiveDate};
use pricer_core::types::{MarketParameters, OptionType, PricingError};
use pricer_models::analytical::{
    AnalyticalConfig, BlackScholes, Greeks, MertonJumpDiffusion, SeriesPrice,
};
use pricer_pricing::ModelKind;
use serde::Serialize;
use tracing::info;

use super::output::render;
use super::OptionArgs;
use crate::config::CliConfig;
use crate::Result;

/// Closed-form pricing report
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticalReport {
    pub model: ModelKind,
    pub option_type: OptionType,
    pub inputs: MarketParameters,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greeks: Option<Greeks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<SeriesPrice>,
}

impl AnalyticalReport {
    /// Prices `params` under `model`.
    pub fn compute(
        params: &MarketParameters,
        model: ModelKind,
        config: &AnalyticalConfig,
    ) -> Result<Self> {
        let (strike, expiry, option_type) =
            (params.strike(), params.time_to_exercise(), params.option_type());

        let (price, greeks, series) = match model {
            ModelKind::BlackScholes => {
                let bs =
                    BlackScholes::from_market(params, config).map_err(PricingError::from)?;
                let price = bs.price(strike, expiry, option_type);
                (price, Some(bs.greeks(strike, expiry, option_type)), None)
            }
            ModelKind::Merton => {
                let merton = MertonJumpDiffusion::from_market(params, config)
                    .map_err(PricingError::from)?;
                let series = merton.series(strike, expiry, option_type);
                (series.price, None, Some(series))
            }
        };

        Ok(Self {
            model,
            option_type,
            inputs: *params,
            price,
            greeks,
            series,
        })
    }

    fn rows(&self) -> Vec<(String, String)> {
        let mut rows = vec![
            ("Spot".to_string(), format!("{:.4}", self.inputs.spot())),
            ("Strike".to_string(), format!("{:.4}", self.inputs.strike())),
            ("Rate".to_string(), format!("{:.4}", self.inputs.rate())),
            ("Volatility".to_string(), format!("{:.4}", self.inputs.volatility())),
            (
                "Time to exercise".to_string(),
                format!("{:.4}", self.inputs.time_to_exercise()),
            ),
        ];
        if let Some(jump) = self.inputs.jump() {
            rows.push(("Jump intensity".to_string(), format!("{:.4}", jump.intensity())));
            rows.push(("Jump mean".to_string(), format!("{:.4}", jump.mean())));
            rows.push(("Jump volatility".to_string(), format!("{:.4}", jump.volatility())));
        }

        rows.push(("Price".to_string(), format!("{:.4}", self.price)));

        if let Some(g) = &self.greeks {
            rows.push(("Delta".to_string(), format!("{:.4}", g.delta)));
            rows.push(("Gamma".to_string(), format!("{:.4}", g.gamma)));
            rows.push(("Vega".to_string(), format!("{:.4}", g.vega)));
            rows.push(("Theta".to_string(), format!("{:.4}", g.theta)));
            rows.push(("Rho".to_string(), format!("{:.4}", g.rho)));
        }
        if let Some(s) = &self.series {
            rows.push(("Series terms".to_string(), s.terms.to_string()));
            rows.push(("Converged".to_string(), s.converged.to_string()));
        }
        rows
    }

    /// Table or JSON rendering.
    pub fn render(&self, args: &OptionArgs) -> Result<String> {
        let title = format!("{} {}", self.model, self.option_type);
        render(args.format, &title, self, &self.rows())
    }
}

/// Run the analytical command
pub fn run(args: &OptionArgs, config: &CliConfig) -> Result<()> {
    run_on(args, config, Local::now().date_naive())
}

fn run_on(args: &OptionArgs, config: &CliConfig, today: NaiveDate) -> Result<()> {
    let params = args.market_parameters(today)?;
    info!(
        model = args.model.as_str(),
        option_type = %params.option_type(),
        "Starting analytical pricing"
    );

    let report = AnalyticalReport::compute(&params, args.model, &config.analytical)?;
    println!("{}", report.render(args)?);
    Ok(())
}
