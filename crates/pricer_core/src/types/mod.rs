//! Core market, time, and error types.
//!
//! This module provides:
//! - `market`: Validated pricing inputs (`MarketParameters`, `JumpParameters`, `OptionType`)
//! - `time`: Exercise-date to year-fraction conversion (Act/365)
//! - `error`: The structured `PricingError` taxonomy
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level.

pub mod error;
pub mod market;
pub mod time;

pub use error::PricingError;
pub use market::{JumpParameters, MarketParameters, MarketParametersBuilder, OptionType};
pub use time::{time_to_exercise, DAYS_PER_YEAR};
