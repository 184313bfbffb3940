//! Monte Carlo simulation configuration.
//!
//! This module provides configuration types and builders for Monte Carlo
//! pricing simulations.

use super::error::ConfigError;

/// Maximum allowed number of paths.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum allowed number of time steps.
pub const MAX_STEPS: usize = 10_000;

/// Maximum number of stored path values, n_paths × (n_steps + 1).
///
/// 250 million doubles is 2 GB of path storage.
pub const MAX_PATH_VALUES: usize = 250_000_000;

/// Monte Carlo simulation configuration.
///
/// Use [`MonteCarloConfig::builder()`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(50_000)
///     .n_steps(252)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.n_paths(), 50_000);
/// assert_eq!(config.n_steps(), 252);
/// assert_eq!(config.seed(), Some(42));
/// assert!(config.parallel());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonteCarloConfig {
    n_paths: usize,
    n_steps: usize,
    seed: Option<u64>,
    parallel: bool,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the number of stored values per path (n_steps + 1).
    #[inline]
    pub fn path_len(&self) -> usize {
        self.n_steps + 1
    }

    /// Returns the random seed, if set.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns whether paths are generated on the rayon pool.
    #[inline]
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Returns a copy of this configuration with `seed` fixed.
    #[inline]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` is 0 or exceeds `MAX_PATHS`
    /// - `n_steps` is 0 or exceeds `MAX_STEPS`
    /// - `n_paths * (n_steps + 1)` exceeds `MAX_PATH_VALUES`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount(self.n_steps));
        }
        match self.n_paths.checked_mul(self.path_len()) {
            Some(total) if total <= MAX_PATH_VALUES => Ok(()),
            _ => Err(ConfigError::PathBufferTooLarge {
                n_paths: self.n_paths,
                n_steps: self.n_steps,
            }),
        }
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Provides a fluent interface for constructing configuration with
/// validation at build time. Paths are generated in parallel unless
/// [`parallel(false)`](MonteCarloConfigBuilder::parallel) is set.
#[derive(Clone, Debug)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    seed: Option<u64>,
    parallel: bool,
}

impl Default for MonteCarloConfigBuilder {
    fn default() -> Self {
        Self {
            n_paths: None,
            n_steps: None,
            seed: None,
            parallel: true,
        }
    }
}

impl MonteCarloConfigBuilder {
    /// Sets the number of simulation paths.
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of time steps.
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the base random seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the base random seed if one is given.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables parallel path generation.
    #[inline]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builds the configuration, validating all parameters.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required fields are missing or invalid.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let n_paths = self.n_paths.ok_or(ConfigError::InvalidParameter {
            name: "n_paths",
            value: "must be specified".to_string(),
        })?;

        let n_steps = self.n_steps.ok_or(ConfigError::InvalidParameter {
            name: "n_steps",
            value: "must be specified".to_string(),
        })?;

        let config = MonteCarloConfig {
            n_paths,
            n_steps,
            seed: self.seed,
            parallel: self.parallel,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_valid() {
        let config = MonteCarloConfig::builder()
            .n_paths(10_000)
            .n_steps(252)
            .build()
            .unwrap();

        assert_eq!(config.n_paths(), 10_000);
        assert_eq!(config.n_steps(), 252);
        assert_eq!(config.path_len(), 253);
        assert_eq!(config.seed(), None);
        assert!(config.parallel());
    }

    #[test]
    fn test_config_builder_with_seed() {
        let config = MonteCarloConfig::builder()
            .n_paths(1000)
            .n_steps(100)
            .seed(42)
            .build()
            .unwrap();

        assert_eq!(config.seed(), Some(42));
    }

    #[test]
    fn test_config_maybe_seed() {
        let config = MonteCarloConfig::builder()
            .n_paths(10)
            .n_steps(10)
            .maybe_seed(None)
            .build()
            .unwrap();
        assert_eq!(config.seed(), None);
        assert_eq!(config.with_seed(9).seed(), Some(9));
    }

    #[test]
    fn test_config_sequential() {
        let config = MonteCarloConfig::builder()
            .n_paths(10)
            .n_steps(10)
            .parallel(false)
            .build()
            .unwrap();
        assert!(!config.parallel());
    }

    #[test]
    fn test_config_invalid_zero_paths() {
        let result = MonteCarloConfig::builder().n_paths(0).n_steps(100).build();

        assert!(matches!(result, Err(ConfigError::InvalidPathCount(0))));
    }

    #[test]
    fn test_config_invalid_too_many_paths() {
        let result = MonteCarloConfig::builder()
            .n_paths(MAX_PATHS + 1)
            .n_steps(100)
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidPathCount(_))));
    }

    #[test]
    fn test_config_invalid_zero_steps() {
        let result = MonteCarloConfig::builder().n_paths(1000).n_steps(0).build();

        assert!(matches!(result, Err(ConfigError::InvalidStepCount(0))));
    }

    #[test]
    fn test_config_invalid_too_many_steps() {
        let result = MonteCarloConfig::builder()
            .n_paths(1000)
            .n_steps(MAX_STEPS + 1)
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidStepCount(_))));
    }

    #[test]
    fn test_config_buffer_limit() {
        let result = MonteCarloConfig::builder()
            .n_paths(MAX_PATHS)
            .n_steps(MAX_STEPS)
            .build();

        assert!(matches!(result, Err(ConfigError::PathBufferTooLarge { .. })));

        // Just inside the limit
        assert!(MonteCarloConfig::builder()
            .n_paths(MAX_PATH_VALUES / 101)
            .n_steps(100)
            .build()
            .is_ok());
    }

    #[test]
    fn test_config_missing_paths() {
        let result = MonteCarloConfig::builder().n_steps(100).build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "n_paths",
                ..
            })
        ));
    }

    #[test]
    fn test_config_missing_steps() {
        let result = MonteCarloConfig::builder().n_paths(1000).build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "n_steps",
                ..
            })
        ));
    }
}
