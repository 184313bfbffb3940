//! optprice - European option pricing from the command line
//!
//! # Commands
//!
//! - `optprice analytical` - Closed-form Black-Scholes-Merton or Merton price
//! - `optprice monte-carlo` - Simulated price with standard error and sampled paths
//!
//! # Configuration
//!
//! Settings are read from an optional TOML file (`--config`), then
//! overridden by `OPTPRICE_*` environment variables, then by flags.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::monte_carlo::MonteCarloArgs;
use commands::OptionArgs;
use config::{build_config, CliOverrides, LogLevel};

/// European option pricing CLI
#[derive(Parser)]
#[command(name = "optprice")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price in closed form
    Analytical(OptionArgs),

    /// Price by Monte Carlo simulation
    MonteCarlo(MonteCarloArgs),
}

fn init_tracing(log_level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level.as_filter_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut overrides = match &cli.command {
        Commands::MonteCarlo(args) => args.overrides(),
        Commands::Analytical(_) => CliOverrides::default(),
    };
    overrides.log_level = match (cli.log_level, cli.verbose) {
        (Some(level), _) => Some(level),
        (None, true) => Some(LogLevel::Debug),
        (None, false) => None,
    };

    let config = build_config(cli.config.as_deref(), &overrides)?;
    init_tracing(config.log_level);
    debug!(?config, "Resolved configuration");

    match &cli.command {
        Commands::Analytical(args) => commands::analytical::run(args, &config),
        Commands::MonteCarlo(args) => commands::monte_carlo::run(args, &config),
    }
}
