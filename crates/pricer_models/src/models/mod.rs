//! Stochastic price dynamics for Monte Carlo simulation.
//!
//! This module provides:
//! - `StochasticModel` trait: one-step evolution given externally drawn shocks
//! - `GbmDynamics`: Geometric Brownian Motion
//! - `JumpDiffusionDynamics`: Merton jump-diffusion
//! - `StochasticModelEnum`: Static dispatch over the two
//!
//! ## Example
//!
//! ```
//! use pricer_models::models::{GbmDynamics, StepShocks, StochasticModel};
//!
//! let model = GbmDynamics::new(100.0, 0.05, 0.2).unwrap();
//! let n_steps = 10;
//! let dt = 1.0 / 252.0;
//!
//! let mut spot = model.initial_state();
//! for _ in 0..n_steps {
//!     spot = model.evolve_step(spot, dt, &StepShocks::diffusion(0.0));
//! }
//! assert!(spot > 100.0);
//! ```

pub mod gbm;
pub mod jump_diffusion;
pub mod model_enum;
pub mod stochastic;

pub use gbm::GbmDynamics;
pub use jump_diffusion::JumpDiffusionDynamics;
pub use model_enum::StochasticModelEnum;
pub use stochastic::{StepShocks, StochasticModel};
