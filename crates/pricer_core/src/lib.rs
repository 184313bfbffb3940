//! # pricer_core: Foundation Types for the Option Pricing Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace and provides:
//! - Validated market inputs: `MarketParameters`, `JumpParameters`, `OptionType` (`types::market`)
//! - The engine-wide error taxonomy: `PricingError` (`types::error`)
//! - Exercise-date to year-fraction conversion (`types::time`)
//!
//! Layer 1 has no dependencies on other pricer_* crates.
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{MarketParameters, OptionType};
//!
//! let params = MarketParameters::builder()
//!     .spot(100.0)
//!     .strike(100.0)
//!     .rate(0.05)
//!     .volatility(0.2)
//!     .time_to_exercise(1.0)
//!     .option_type(OptionType::Call)
//!     .build()
//!     .unwrap();
//!
//! assert!((params.discount_factor() - (-0.05_f64).exp()).abs() < 1e-15);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `OptionType`, `JumpParameters`
//!   and `MarketParameters`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
