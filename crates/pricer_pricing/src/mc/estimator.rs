//! Payoff aggregation.
//!
//! Turns simulated terminal prices into a discounted price estimate:
//!
//! ```text
//! price     = e^(-rT) * mean(payoff)
//! std_error = e^(-rT) * stddev(payoff) / sqrt(N)
//! ```
//!
//! with the (N - 1) sample standard deviation.

use pricer_core::types::MarketParameters;

use super::paths::SimulatedPaths;

/// Discounted Monte Carlo estimate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Estimate {
    /// Discounted mean payoff.
    pub price: f64,
    /// Standard error of `price`; zero for a single path.
    pub std_error: f64,
}

/// Estimates the option value from the terminal prices in `paths`.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{MarketParameters, OptionType};
/// use pricer_models::models::StochasticModelEnum;
/// use pricer_pricing::mc::{estimate, simulate_paths, MonteCarloConfig};
///
/// let params = MarketParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Put).unwrap();
/// let config = MonteCarloConfig::builder().n_paths(1_000).n_steps(10).seed(1).build().unwrap();
/// let paths = simulate_paths(&params, &StochasticModelEnum::gbm(&params), &config).unwrap();
///
/// let est = estimate(&paths, &params);
/// assert!(est.price > 0.0 && est.std_error > 0.0);
/// ```
pub fn estimate(paths: &SimulatedPaths, params: &MarketParameters) -> Estimate {
    let discount = params.discount_factor();
    let payoffs = paths.terminal_prices().map(|terminal| params.payoff(terminal));
    let (mean, std_dev) = mean_and_std_dev(payoffs);
    let n = paths.n_paths() as f64;

    Estimate {
        price: discount * mean,
        std_error: discount * std_dev / n.sqrt(),
    }
}

/// Mean and (N - 1) sample standard deviation in a single Welford pass.
///
/// Returns `(0.0, 0.0)` for an empty input and a zero deviation for one value.
fn mean_and_std_dev(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut count = 0usize;
    let mut mean = 0.0;
    let mut m2 = 0.0;

    for x in values {
        count += 1;
        let delta = x - mean;
        mean += delta / count as f64;
        m2 += delta * (x - mean);
    }

    if count < 2 {
        return (mean, 0.0);
    }
    (mean, (m2 / (count - 1) as f64).sqrt())
}
