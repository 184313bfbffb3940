//! StochasticModel trait for single-asset price dynamics.
//!
//! A model advances a spot price across one time step given the random
//! shocks for that step. Drawing the shocks is the caller's job, which keeps
//! every model a pure function of its inputs and lets the simulator own the
//! random streams.
//!
//! ## Example
//!
//! ```
//! use pricer_models::models::{GbmDynamics, StepShocks, StochasticModel};
//!
//! let model = GbmDynamics::new(100.0, 0.05, 0.0).unwrap();
//! let next = model.evolve_step(model.initial_state(), 1.0, &StepShocks::diffusion(0.0));
//! assert!((next - 100.0 * 0.05_f64.exp()).abs() < 1e-12);
//! ```

/// Random inputs for one time step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepShocks {
    /// Standard normal driving the diffusion.
    pub diffusion: f64,
    /// Number of jumps arriving within the step.
    pub jump_count: u64,
    /// Standard normal used to sample the aggregated jump size.
    pub jump_size: f64,
}

impl StepShocks {
    /// Shocks for a step with no jumps.
    #[inline]
    pub fn diffusion(z: f64) -> Self {
        Self {
            diffusion: z,
            jump_count: 0,
            jump_size: 0.0,
        }
    }

    /// Shocks for a step with `jump_count` jumps.
    #[inline]
    pub fn with_jumps(z: f64, jump_count: u64, jump_size: f64) -> Self {
        Self {
            diffusion: z,
            jump_count,
            jump_size,
        }
    }
}

/// Unified interface for the spot dynamics used by path simulation.
pub trait StochasticModel {
    /// Spot price at t = 0.
    fn initial_state(&self) -> f64;

    /// Evolve the spot by one time step.
    ///
    /// # Arguments
    /// * `spot` - Spot price at the start of the step
    /// * `dt` - Time step size (must be positive)
    /// * `shocks` - Random inputs for this step
    ///
    /// # Postconditions
    /// - Returned spot is strictly positive when `spot` is
    fn evolve_step(&self, spot: f64, dt: f64, shocks: &StepShocks) -> f64;

    /// Poisson jump arrival rate λ; zero for pure diffusions.
    fn jump_intensity(&self) -> f64 {
        0.0
    }

    /// Model name for logging and debugging.
    fn model_name(&self) -> &'static str;
}
