//! CLI configuration management
//!
//! Settings come from a TOML file, environment variables and command-line
//! flags, in increasing order of precedence.
//!
//! ```toml
//! log_level = "info"
//!
//! [analytical]
//! series_tolerance = 1e-10
//! max_terms = 100
//! degeneracy_threshold = 1e-8
//!
//! [monte_carlo]
//! paths = 10000
//! steps = 100
//! seed = 42
//! parallel = true
//! plot_paths = 10
//! ```

use std::path::Path;
use std::str::FromStr;

use pricer_models::analytical::AnalyticalConfig;
use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "OPTPRICE_LOG_LEVEL";
/// Environment variable overriding the Monte Carlo path count.
pub const ENV_PATHS: &str = "OPTPRICE_PATHS";
/// Environment variable overriding the Monte Carlo step count.
pub const ENV_STEPS: &str = "OPTPRICE_STEPS";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable {name}={value}: expected a positive integer")]
    EnvError { name: &'static str, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Log levels accepted by `--log-level` and the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

/// `[monte_carlo]` section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MonteCarloSettings {
    /// Number of simulated paths
    pub paths: usize,
    /// Time steps per path
    pub steps: usize,
    /// Fixed base seed; drawn from entropy when absent
    pub seed: Option<u64>,
    /// Generate paths on the rayon pool
    pub parallel: bool,
    /// Number of sampled paths returned for display
    pub plot_paths: usize,
}

impl Default for MonteCarloSettings {
    fn default() -> Self {
        Self {
            paths: 10_000,
            steps: 100,
            seed: None,
            parallel: true,
            plot_paths: 10,
        }
    }
}

/// Full CLI configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Merton series and degeneracy policy
    pub analytical: AnalyticalConfig,
    /// Simulation defaults
    pub monte_carlo: MonteCarloSettings,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|name| std::env::var(name).ok())
    }

    /// Apply overrides looked up through `lookup`
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(paths) = lookup(ENV_PATHS) {
            self.monte_carlo.paths = parse_count(ENV_PATHS, paths)?;
        }
        if let Some(steps) = lookup(ENV_STEPS) {
            self.monte_carlo.steps = parse_count(ENV_STEPS, steps)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) {
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
        if let Some(paths) = cli.paths {
            self.monte_carlo.paths = paths;
        }
        if let Some(steps) = cli.steps {
            self.monte_carlo.steps = steps;
        }
        if cli.seed.is_some() {
            self.monte_carlo.seed = cli.seed;
        }
        if let Some(k) = cli.plot_paths {
            self.monte_carlo.plot_paths = k;
        }
        if cli.sequential {
            self.monte_carlo.parallel = false;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.analytical
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        if self.monte_carlo.paths == 0 {
            return Err(ConfigError::Invalid("monte_carlo.paths must be at least 1".into()));
        }
        if self.monte_carlo.steps == 0 {
            return Err(ConfigError::Invalid("monte_carlo.steps must be at least 1".into()));
        }
        Ok(())
    }
}

fn parse_count(name: &'static str, value: String) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::EnvError { name, value }),
    }
}

/// Overrides taken from command-line flags
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub log_level: Option<LogLevel>,
    pub paths: Option<usize>,
    pub steps: Option<usize>,
    pub seed: Option<u64>,
    pub plot_paths: Option<usize>,
    pub sequential: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(
    config_file: Option<&Path>,
    cli: &CliOverrides,
) -> Result<CliConfig, ConfigError> {
    let mut config = match config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.apply_env()?;
    config.merge_with_cli(cli);
    config.validate()?;

    Ok(config)
}
