//! Monte Carlo command implementation
//!
//! Simulates the selected model, prices the option from the terminal
//! prices and reports a sample of the trajectories for plotting.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Args;
use pricer_core::types::{MarketParameters, OptionType, PricingError};
use pricer_pricing::engine::{price_analytical_with, price_monte_carlo_with};
use pricer_pricing::{ModelKind, MonteCarloConfig, MonteCarloResult, SimulatedPaths};
use serde::{Serialize, Serializer};
use tracing::info;

use super::output::{render, write_paths_csv_file};
use super::OptionArgs;
use crate::config::{CliConfig, CliOverrides};
use crate::Result;

/// Monte Carlo command arguments
#[derive(Args, Debug, Clone)]
pub struct MonteCarloArgs {
    #[command(flatten)]
    pub option: OptionArgs,

    /// Number of simulated paths
    #[arg(short = 'n', long)]
    pub paths: Option<usize>,

    /// Time steps per path
    #[arg(short, long)]
    pub steps: Option<usize>,

    /// Base seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of sampled paths to report
    #[arg(long)]
    pub plot_paths: Option<usize>,

    /// Write the sampled paths to this CSV file
    #[arg(long, value_name = "FILE")]
    pub paths_csv: Option<PathBuf>,

    /// Generate paths on a single thread
    #[arg(long)]
    pub sequential: bool,
}

impl MonteCarloArgs {
    /// Flags that override file and environment settings.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            paths: self.paths,
            steps: self.steps,
            seed: self.seed,
            plot_paths: self.plot_paths,
            sequential: self.sequential,
            ..Default::default()
        }
    }
}

/// Sampled trajectories with their time grid
#[derive(Debug, Clone, Serialize)]
pub struct PathSample {
    pub time_grid: Vec<f64>,
    pub paths: Vec<Vec<f64>>,
}

impl From<&SimulatedPaths> for PathSample {
    fn from(paths: &SimulatedPaths) -> Self {
        Self {
            time_grid: paths.time_grid(),
            paths: paths.iter().map(<[f64]>::to_vec).collect(),
        }
    }
}

/// Monte Carlo pricing report
#[derive(Debug, Clone, Serialize)]
pub struct MonteCarloReport {
    pub model: ModelKind,
    pub option_type: OptionType,
    pub inputs: MarketParameters,
    pub price: f64,
    pub std_error: f64,
    pub confidence_95: f64,
    pub analytical_price: f64,
    pub n_paths: usize,
    pub n_steps: usize,
    pub seed: u64,
    #[serde(rename = "sample", serialize_with = "serialize_sample")]
    sampled: SimulatedPaths,
}

fn serialize_sample<S: Serializer>(
    paths: &SimulatedPaths,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    PathSample::from(paths).serialize(serializer)
}

impl MonteCarloReport {
    /// Runs the simulation for `params` and keeps `plot_paths` trajectories.
    pub fn compute(
        params: &MarketParameters,
        model: ModelKind,
        config: &CliConfig,
    ) -> Result<Self> {
        let mc = &config.monte_carlo;
        let mc_config = MonteCarloConfig::builder()
            .n_paths(mc.paths)
            .n_steps(mc.steps)
            .maybe_seed(mc.seed)
            .parallel(mc.parallel)
            .build()
            .map_err(PricingError::from)?;

        let result = price_monte_carlo_with(params, model, &mc_config)?;
        let analytical_price = price_analytical_with(params, model, &config.analytical)?;

        Ok(Self::from_result(params, model, result, analytical_price, mc.plot_paths))
    }

    fn from_result(
        params: &MarketParameters,
        model: ModelKind,
        result: MonteCarloResult,
        analytical_price: f64,
        plot_paths: usize,
    ) -> Self {
        Self {
            model,
            option_type: params.option_type(),
            inputs: *params,
            price: result.price,
            std_error: result.std_error,
            confidence_95: result.confidence_95(),
            analytical_price,
            n_paths: result.paths.n_paths(),
            n_steps: result.paths.n_steps(),
            seed: result.seed,
            sampled: result.paths.sample(plot_paths),
        }
    }

    /// The sampled trajectories.
    pub fn sampled_paths(&self) -> &SimulatedPaths {
        &self.sampled
    }

    fn rows(&self) -> Vec<(String, String)> {
        vec![
            ("Paths".to_string(), self.n_paths.to_string()),
            ("Steps".to_string(), self.n_steps.to_string()),
            ("Seed".to_string(), self.seed.to_string()),
            ("Price".to_string(), format!("{:.4}", self.price)),
            ("Std error".to_string(), format!("{:.4}", self.std_error)),
            (
                "95% CI".to_string(),
                format!(
                    "[{:.4}, {:.4}]",
                    self.price - self.confidence_95,
                    self.price + self.confidence_95
                ),
            ),
            ("Analytical".to_string(), format!("{:.4}", self.analytical_price)),
            ("Sampled paths".to_string(), self.sampled.n_paths().to_string()),
        ]
    }

    /// Table or JSON rendering.
    pub fn render(&self, args: &OptionArgs) -> Result<String> {
        let title = format!("{} {} (Monte Carlo)", self.model, self.option_type);
        render(args.format, &title, self, &self.rows())
    }
}

/// Run the Monte Carlo command
pub fn run(args: &MonteCarloArgs, config: &CliConfig) -> Result<()> {
    run_on(args, config, Local::now().date_naive())
}

fn run_on(args: &MonteCarloArgs, config: &CliConfig, today: NaiveDate) -> Result<()> {
    let params = args.option.market_parameters(today)?;
    info!(
        model = args.option.model.as_str(),
        n_paths = config.monte_carlo.paths,
        n_steps = config.monte_carlo.steps,
        "Starting Monte Carlo pricing"
    );

    let report = MonteCarloReport::compute(&params, args.option.model, config)?;

    if let Some(path) = &args.paths_csv {
        write_paths_csv_file(path, report.sampled_paths())?;
    }

    println!("{}", report.render(&args.option)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::output::OutputFormat;
    use crate::commands::tests::option_args;
    use crate::config::MonteCarloSettings;

    fn config(paths: usize, steps: usize, plot_paths: usize) -> CliConfig {
        CliConfig {
            monte_carlo: MonteCarloSettings {
                paths,
                steps,
                seed: Some(17),
                parallel: true,
                plot_paths,
            },
            ..Default::default()
        }
    }

    fn mc_args(option: OptionArgs) -> MonteCarloArgs {
        MonteCarloArgs {
            option,
            paths: None,
            steps: None,
            seed: None,
            plot_paths: None,
            paths_csv: None,
            sequential: false,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_report_fields() {
        let params = option_args().market_parameters(today()).unwrap();
        let report =
            MonteCarloReport::compute(&params, ModelKind::BlackScholes, &config(20_000, 20, 10))
                .unwrap();

        assert_eq!(report.n_paths, 20_000);
        assert_eq!(report.n_steps, 20);
        assert_eq!(report.seed, 17);
        let sampled = report.sampled_paths();
        assert_eq!(sampled.n_paths(), 10);
        assert_eq!(sampled.time_grid().len(), 21);
        assert!(sampled.iter().all(|p| p.len() == 21));
        assert!((report.price - report.analytical_price).abs() < 3.0 * report.std_error);
    }

    #[test]
    fn test_plot_paths_capped_at_path_count() {
        let params = option_args().market_parameters(today()).unwrap();
        let report =
            MonteCarloReport::compute(&params, ModelKind::BlackScholes, &config(4, 5, 10)).unwrap();
        assert_eq!(report.sampled_paths().n_paths(), 4);
    }

    #[test]
    fn test_json_output() {
        let option = OptionArgs {
            model: ModelKind::Merton,
            jump_intensity: Some(1.0),
            jump_mean: Some(-0.1),
            jump_volatility: Some(0.2),
            format: OutputFormat::Json,
            ..option_args()
        };
        let params = option.market_parameters(today()).unwrap();
        let report =
            MonteCarloReport::compute(&params, ModelKind::Merton, &config(500, 10, 3)).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&report.render(&option).unwrap()).unwrap();
        assert_eq!(json["seed"], 17);
        assert_eq!(json["n_paths"], 500);
        assert_eq!(json["sample"]["paths"].as_array().unwrap().len(), 3);
        assert_eq!(json["sample"]["time_grid"].as_array().unwrap().len(), 11);
        assert!(json.get("sampled").is_none());
    }

    #[test]
    fn test_sample_serialized_from_sampled_paths() {
        let params = option_args().market_parameters(today()).unwrap();
        let report =
            MonteCarloReport::compute(&params, ModelKind::BlackScholes, &config(50, 4, 2)).unwrap();

        let json = serde_json::to_value(&report).unwrap();
        let expected = serde_json::to_value(PathSample::from(report.sampled_paths())).unwrap();
        assert_eq!(json["sample"], expected);
        assert_eq!(json.as_object().unwrap().keys().filter(|k| k.starts_with("sample")).count(), 1);
    }

    #[test]
    fn test_truncated_merton_reference_is_an_error() {
        let option = OptionArgs {
            model: ModelKind::Merton,
            jump_intensity: Some(150.0),
            jump_mean: Some(-0.1),
            jump_volatility: Some(0.2),
            ..option_args()
        };
        let params = option.market_parameters(today()).unwrap();

        let err =
            MonteCarloReport::compute(&params, ModelKind::Merton, &config(10, 2, 1)).unwrap_err();
        assert!(err.to_string().contains("max_terms"), "{}", err);
    }

    #[test]
    fn test_run_writes_paths_csv() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("paths.csv");
        let args = MonteCarloArgs {
            paths_csv: Some(file.clone()),
            ..mc_args(option_args())
        };

        run_on(&args, &config(100, 8, 5), today()).unwrap();

        let mut reader = csv::Reader::from_path(&file).unwrap();
        assert_eq!(reader.headers().unwrap().len(), 6);
        assert_eq!(reader.records().count(), 9);
    }

    #[test]
    fn test_overrides_from_flags() {
        let args = MonteCarloArgs {
            paths: Some(50),
            seed: Some(3),
            sequential: true,
            ..mc_args(option_args())
        };
        let overrides = args.overrides();
        assert_eq!(overrides.paths, Some(50));
        assert_eq!(overrides.steps, None);
        assert_eq!(overrides.seed, Some(3));
        assert!(overrides.sequential);
    }
}
