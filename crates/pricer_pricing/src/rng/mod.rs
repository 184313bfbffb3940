//! # Random Number Generation Infrastructure
//!
//! This module provides random number generation for Monte Carlo simulation.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: All generators support seeding for deterministic sequences
//! - **Independent streams**: One generator per path, seeded from a base seed
//!   and the path index
//! - **Efficiency**: Zero-allocation batch operations via `&mut [f64]` slices
//!
//! ## British English Convention
//!
//! All documentation in this module uses British English spelling conventions:
//! - "initialise" (not "initialize")
//! - "randomise" (not "randomize")
//! - "behaviour" (not "behavior")
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = PricerRng::from_seed(12345);
//!
//! // Generate standard normal variates (mean=0, std=1)
//! let normal_value = rng.gen_normal();
//!
//! // Stream for path 7 of a run seeded with 12345
//! let mut path_rng = PricerRng::for_path(12345, 7);
//! assert_eq!(path_rng.seed(), 12352);
//! # let _ = (normal_value, path_rng.gen_uniform());
//! ```

pub mod prng;

pub use prng::{entropy_seed, PricerRng};
