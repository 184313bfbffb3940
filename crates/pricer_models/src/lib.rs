//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form option pricers and the stochastic dynamics used by the Monte
//! Carlo engine.
//!
//! This crate provides:
//! - Black-Scholes-Merton prices and Greeks for European options
//! - The Merton jump-diffusion price as a truncated Poisson-weighted series
//! - Single-step GBM and jump-diffusion evolution for path simulation
//! - `AnalyticalConfig`, the series and degeneracy policy constants
//!
//! ## Design Principles
//!
//! - **Validated inputs**: pricers are built from `pricer_core::types::MarketParameters`
//! - **No hidden randomness**: model steps take their normal and Poisson draws
//!   as arguments; the caller owns the random source
//! - **Explicit policy**: series truncation and the σ√T fallback threshold are
//!   configuration, not magic numbers

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod models;
