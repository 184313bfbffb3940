//! Monte Carlo pricing for European options.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig  (paths, steps, seed, parallel flag)
//! └── Orchestration
//!     ├── simulate_paths()  (per-path RNG streams, rayon over paths)
//!     └── estimate()        (discounted mean payoff, standard error)
//! ```
//!
//! # Examples
//!
//! ## Basic European Option Pricing
//!
//! ```rust
//! use pricer_core::types::{MarketParameters, OptionType};
//! use pricer_models::models::StochasticModelEnum;
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(10_000)
//!     .n_steps(50)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let params = MarketParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Call).unwrap();
//! let result = MonteCarloPricer::new(config)
//!     .unwrap()
//!     .price(&params, &StochasticModelEnum::gbm(&params))
//!     .unwrap();
//!
//! println!("Price: {:.4} ± {:.4}", result.price, result.confidence_95());
//! ```

pub mod config;
pub mod error;
pub mod estimator;
pub mod paths;
pub mod pricer;

pub use config::{
    MonteCarloConfig, MonteCarloConfigBuilder, MAX_PATHS, MAX_PATH_VALUES, MAX_STEPS,
};
pub use error::ConfigError;
pub use estimator::{estimate, Estimate};
pub use paths::{simulate_paths, SimulatedPaths};
pub use pricer::{MonteCarloPricer, MonteCarloResult};
