//! Path generation for Monte Carlo simulation.
//!
//! Paths are stored row-major in one contiguous buffer:
//! `paths[path_idx * (n_steps + 1) + step]`, with step 0 holding the spot.
//!
//! # Random Streams
//!
//! Path i uses [`PricerRng::for_path`]`(base_seed, i)` and draws its shocks
//! strictly in step order: one normal per step, then for jump models a
//! Poisson count and, when the count is positive, one more normal for the
//! aggregated jump size. The output is therefore independent of thread
//! scheduling.

use pricer_core::types::{MarketParameters, PricingError};
use pricer_models::models::{StepShocks, StochasticModel, StochasticModelEnum};
use rand_distr::Poisson;
use rayon::prelude::*;

use super::config::MonteCarloConfig;
use crate::rng::{entropy_seed, PricerRng};

/// Simulated price trajectories on a uniform time grid.
///
/// Immutable once created. Holds N paths of M + 1 samples at t_j = j·T/M.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulatedPaths {
    data: Vec<f64>,
    n_paths: usize,
    n_steps: usize,
    maturity: f64,
    seed: u64,
}

impl SimulatedPaths {
    /// Returns the number of paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the time horizon T in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Returns the base seed the paths were generated from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the time step T / M.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.maturity / self.n_steps as f64
    }

    /// Returns path `index` as a slice of M + 1 prices.
    #[inline]
    pub fn path(&self, index: usize) -> Option<&[f64]> {
        let len = self.n_steps + 1;
        let start = index.checked_mul(len)?;
        self.data.get(start..start.checked_add(len)?)
    }

    /// Iterates over all paths in index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.n_steps + 1)
    }

    /// Iterates over the terminal price of every path.
    pub fn terminal_prices(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        let last = self.n_steps;
        self.iter().map(move |path| path[last])
    }

    /// Returns the sample times t_j = j·T/M, j = 0..=M.
    pub fn time_grid(&self) -> Vec<f64> {
        let dt = self.dt();
        (0..=self.n_steps).map(|j| j as f64 * dt).collect()
    }

    /// Returns the first `k` paths (all of them if `k` exceeds N).
    pub fn sample(&self, k: usize) -> SimulatedPaths {
        let k = k.min(self.n_paths);
        SimulatedPaths {
            data: self.data[..k * (self.n_steps + 1)].to_vec(),
            n_paths: k,
            n_steps: self.n_steps,
            maturity: self.maturity,
            seed: self.seed,
        }
    }

    /// Returns the raw row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

/// Simulates `config.n_paths()` trajectories of `model` up to the time to
/// exercise in `params`.
///
/// When the configuration has no seed, a base seed is drawn once from the
/// process entropy source and recorded in the result.
///
/// # Errors
///
/// - `PricingError::InvalidConfiguration` if `config` does not validate
/// - `PricingError::ModelFailure` if the jump-count distribution cannot be built
pub fn simulate_paths(
    params: &MarketParameters,
    model: &StochasticModelEnum,
    config: &MonteCarloConfig,
) -> Result<SimulatedPaths, PricingError> {
    config.validate()?;

    let n_paths = config.n_paths();
    let n_steps = config.n_steps();
    let path_len = config.path_len();
    let maturity = params.time_to_exercise();
    let dt = maturity / n_steps as f64;
    let base_seed = config.seed().unwrap_or_else(entropy_seed);

    let jumps = jump_distribution(model, dt)?;

    tracing::debug!(
        model = model.model_name(),
        n_paths,
        n_steps,
        dt,
        base_seed,
        parallel = config.parallel(),
        "simulating paths"
    );

    let mut data = vec![0.0; n_paths * path_len];
    let fill = |(index, path): (usize, &mut [f64])| {
        let mut rng = PricerRng::for_path(base_seed, index);
        simulate_path(model, dt, jumps.as_ref(), &mut rng, path);
    };

    if config.parallel() {
        data.par_chunks_mut(path_len).enumerate().for_each(fill);
    } else {
        data.chunks_mut(path_len).enumerate().for_each(fill);
    }

    Ok(SimulatedPaths {
        data,
        n_paths,
        n_steps,
        maturity,
        seed: base_seed,
    })
}

/// Poisson(λ·dt) for jump models; `None` when no jump can occur.
fn jump_distribution(
    model: &StochasticModelEnum,
    dt: f64,
) -> Result<Option<Poisson<f64>>, PricingError> {
    let mean = model.jump_intensity() * dt;
    if mean == 0.0 {
        return Ok(None);
    }

    Poisson::new(mean).map(Some).map_err(|err| {
        PricingError::ModelFailure(format!(
            "cannot build Poisson jump distribution with mean {}: {}",
            mean, err
        ))
    })
}

/// Fills one path buffer, step 0 first.
#[inline]
fn simulate_path(
    model: &StochasticModelEnum,
    dt: f64,
    jumps: Option<&Poisson<f64>>,
    rng: &mut PricerRng,
    path: &mut [f64],
) {
    let mut spot = model.initial_state();
    path[0] = spot;

    for value in path.iter_mut().skip(1) {
        let z = rng.gen_normal();
        let shocks = match jumps {
            Some(poisson) => {
                let count = rng.gen_poisson(poisson);
                if count > 0 {
                    StepShocks::with_jumps(z, count, rng.gen_normal())
                } else {
                    StepShocks::diffusion(z)
                }
            }
            None => StepShocks::diffusion(z),
        };

        spot = model.evolve_step(spot, dt, &shocks);
        *value = spot;
    }
}
