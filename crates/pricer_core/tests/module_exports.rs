//! Integration tests for module exports.
//!
//! Verify that the public types are reachable through both the module
//! re-exports and their absolute paths, and behave as documented when used
//! from outside the crate.

use chrono::NaiveDate;

/// Test that market types are accessible via absolute path.
#[test]
fn test_market_module_exports() {
    use pricer_core::types::market::JumpParameters;
    use pricer_core::types::market::MarketParameters;
    use pricer_core::types::market::MarketParametersBuilder;
    use pricer_core::types::market::OptionType;

    let builder: MarketParametersBuilder = MarketParameters::builder();
    let params = builder
        .spot(100.0)
        .strike(95.0)
        .rate(0.01)
        .volatility(0.3)
        .time_to_exercise(0.5)
        .option_type(OptionType::Put)
        .jump(JumpParameters::new(0.5, -0.05, 0.1).unwrap())
        .build()
        .unwrap();

    assert_eq!(params.option_type(), OptionType::Put);
    assert_eq!(params.payoff(90.0), 5.0);
    assert!(params.jump().is_some());
}

/// Test that the error type is accessible via absolute path.
#[test]
fn test_error_module_exports() {
    use pricer_core::types::error::PricingError;
    use pricer_core::types::MarketParameters;
    use pricer_core::types::OptionType;

    let err: PricingError =
        MarketParameters::new(100.0, 100.0, f64::NAN, 0.2, 1.0, OptionType::Call).unwrap_err();
    assert_eq!(err.parameter_name(), Some("rate"));

    let config = PricingError::InvalidConfiguration("n_paths must be at least 1".to_string());
    assert_eq!(config.parameter_name(), None);
    assert!(config.to_string().contains("n_paths"));
}

/// Test that time helpers are accessible via absolute path.
#[test]
fn test_time_module_exports() {
    use pricer_core::types::time::time_to_exercise;
    use pricer_core::types::time::DAYS_PER_YEAR;

    let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let exercise = NaiveDate::from_ymd_opt(2025, 5, 30).unwrap();

    let t = time_to_exercise(today, exercise).unwrap();
    assert!((t - 90.0 / DAYS_PER_YEAR).abs() < 1e-15);
    assert!(time_to_exercise(today, today).is_err());
}

/// Test that the module-level re-exports resolve to the same items.
#[test]
fn test_types_reexports() {
    use pricer_core::types::{time_to_exercise, OptionType, PricingError};

    let parsed: OptionType = "CALL".parse().unwrap();
    assert_eq!(parsed, pricer_core::types::market::OptionType::Call);

    let err: PricingError = "straddle".parse::<OptionType>().unwrap_err();
    assert_eq!(err.parameter_name(), Some("option_type"));

    let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    assert!(time_to_exercise(d, d.succ_opt().unwrap()).is_ok());
}
