//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model for lognormal dynamics
//! - Merton (1976) jump-diffusion as a Poisson mixture of Black-Scholes prices
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho) for Black-Scholes
//!
//! ## Degenerate Inputs
//!
//! When σ√T falls below [`AnalyticalConfig::degeneracy_threshold`] the
//! Black-Scholes formula is replaced by the discounted forward intrinsic
//! value. No division by σ√T happens below the threshold.

pub mod black_scholes;
pub mod config;
pub mod distributions;
pub mod error;
pub mod merton;

// Re-export main types at module level
pub use black_scholes::{BlackScholes, Greeks};
pub use config::AnalyticalConfig;
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use merton::{MertonJumpDiffusion, SeriesPrice};
