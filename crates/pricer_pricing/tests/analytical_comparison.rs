//! Analytical comparison tests for Monte Carlo pricing.
//!
//! These tests verify that Monte Carlo prices converge to the closed-form
//! Black-Scholes-Merton and Merton series prices.
//!
//! # Test Categories
//!
//! 1. **Black-Scholes-Merton**: MC(GBM) vs closed form
//! 2. **Merton jump-diffusion**: MC(jump-diffusion) vs series price
//! 3. **Reproducibility**: seeds, parallel vs sequential
//! 4. **Input errors**: surfaced through the pricing entry points

use approx::assert_relative_eq;
use pricer_core::types::{JumpParameters, MarketParameters, OptionType, PricingError};
use pricer_pricing::engine::{
    price_analytical, price_monte_carlo, price_monte_carlo_with, ModelKind,
};
use pricer_pricing::mc::MonteCarloConfig;

/// Standard at-the-money test parameters.
fn standard_params(option_type: OptionType) -> MarketParameters {
    MarketParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, option_type).unwrap()
}

fn standard_jump() -> JumpParameters {
    JumpParameters::new(1.0, -0.1, 0.2).unwrap()
}

fn assert_within_std_errors(label: &str, mc: f64, std_error: f64, reference: f64, k: f64) {
    let error = (mc - reference).abs();
    let tolerance = k * std_error;
    assert!(
        error < tolerance,
        "{}: MC={:.4}, Analytical={:.4}, Error={:.4}, Tolerance={:.4}",
        label,
        mc,
        reference,
        error,
        tolerance
    );
}

// ============================================================================
// Black-Scholes-Merton
// ============================================================================

#[test]
fn test_textbook_bsm_values() {
    let call = price_analytical(&standard_params(OptionType::Call), ModelKind::BlackScholes).unwrap();
    let put = price_analytical(&standard_params(OptionType::Put), ModelKind::BlackScholes).unwrap();

    assert_relative_eq!(call, 10.4506, epsilon = 1e-4);
    assert_relative_eq!(put, 5.5735, epsilon = 1e-4);
}

#[test]
fn test_bsm_call_mc_vs_analytical() {
    let params = standard_params(OptionType::Call);
    let analytical = price_analytical(&params, ModelKind::BlackScholes).unwrap();

    let result = price_monte_carlo(&params, ModelKind::BlackScholes, 100, 200_000, Some(42)).unwrap();

    assert_within_std_errors("BSM call", result.price, result.std_error, analytical, 3.0);
    assert!(result.std_error < 0.05);
}

#[test]
fn test_bsm_put_mc_vs_analytical() {
    let params = MarketParameters::new(100.0, 110.0, 0.03, 0.25, 0.5, OptionType::Put).unwrap();
    let analytical = price_analytical(&params, ModelKind::BlackScholes).unwrap();

    let result = price_monte_carlo(&params, ModelKind::BlackScholes, 50, 100_000, Some(7)).unwrap();

    assert_within_std_errors("BSM put", result.price, result.std_error, analytical, 3.0);
}

#[test]
fn test_near_zero_volatility_matches_forward_intrinsic() {
    let params = MarketParameters::new(100.0, 90.0, 0.05, 1e-12, 1.0, OptionType::Call).unwrap();
    let intrinsic = 100.0 - 90.0 * (-0.05_f64).exp();

    let analytical = price_analytical(&params, ModelKind::BlackScholes).unwrap();
    assert_relative_eq!(analytical, intrinsic, epsilon = 1e-9);

    let result = price_monte_carlo(&params, ModelKind::BlackScholes, 10, 1_000, Some(3)).unwrap();
    assert_relative_eq!(result.price, intrinsic, epsilon = 1e-6);
    assert!(result.std_error < 1e-6);
}

// ============================================================================
// Merton jump-diffusion
// ============================================================================

#[test]
fn test_merton_call_mc_vs_analytical() {
    let params = standard_params(OptionType::Call).with_jump(standard_jump());
    let analytical = price_analytical(&params, ModelKind::Merton).unwrap();

    let result = price_monte_carlo(&params, ModelKind::Merton, 50, 50_000, Some(2024)).unwrap();

    assert_within_std_errors("Merton call", result.price, result.std_error, analytical, 3.0);
}

#[test]
fn test_merton_put_mc_vs_analytical() {
    let params = standard_params(OptionType::Put).with_jump(standard_jump());
    let analytical = price_analytical(&params, ModelKind::Merton).unwrap();

    let result = price_monte_carlo(&params, ModelKind::Merton, 50, 50_000, Some(99)).unwrap();

    assert_within_std_errors("Merton put", result.price, result.std_error, analytical, 3.0);
}

#[test]
fn test_jumps_add_value_to_atm_call() {
    let params = standard_params(OptionType::Call).with_jump(standard_jump());

    let bsm = price_analytical(&params, ModelKind::BlackScholes).unwrap();
    let merton = price_analytical(&params, ModelKind::Merton).unwrap();

    assert!(merton > bsm, "Merton={:.4} should exceed BSM={:.4}", merton, bsm);
}

#[test]
fn test_merton_put_call_parity() {
    let call = standard_params(OptionType::Call).with_jump(standard_jump());
    let put = call.with_option_type(OptionType::Put);

    let c = price_analytical(&call, ModelKind::Merton).unwrap();
    let p = price_analytical(&put, ModelKind::Merton).unwrap();

    assert_relative_eq!(c - p, 100.0 - 100.0 * (-0.05_f64).exp(), epsilon = 1e-8);
}

// ============================================================================
// Reproducibility
// ============================================================================

#[test]
fn test_seeded_runs_are_bit_identical() {
    let params = standard_params(OptionType::Call).with_jump(standard_jump());

    let a = price_monte_carlo(&params, ModelKind::Merton, 20, 5_000, Some(11)).unwrap();
    let b = price_monte_carlo(&params, ModelKind::Merton, 20, 5_000, Some(11)).unwrap();

    assert_eq!(a.price.to_bits(), b.price.to_bits());
    assert_eq!(a.std_error.to_bits(), b.std_error.to_bits());
    assert_eq!(a.paths, b.paths);
}

#[test]
fn test_parallel_and_sequential_agree() {
    let params = standard_params(OptionType::Call).with_jump(standard_jump());
    let config = |parallel| {
        MonteCarloConfig::builder()
            .n_paths(3_000)
            .n_steps(25)
            .seed(5)
            .parallel(parallel)
            .build()
            .unwrap()
    };

    let par = price_monte_carlo_with(&params, ModelKind::Merton, &config(true)).unwrap();
    let seq = price_monte_carlo_with(&params, ModelKind::Merton, &config(false)).unwrap();

    assert_eq!(par.paths, seq.paths);
    assert_eq!(par.price.to_bits(), seq.price.to_bits());
}

#[test]
fn test_different_seeds_differ() {
    let params = standard_params(OptionType::Call);

    let a = price_monte_carlo(&params, ModelKind::BlackScholes, 10, 2_000, Some(1)).unwrap();
    let b = price_monte_carlo(&params, ModelKind::BlackScholes, 10, 2_000, Some(2)).unwrap();

    assert_ne!(a.price.to_bits(), b.price.to_bits());
}

#[test]
fn test_paths_start_at_spot() {
    let params = standard_params(OptionType::Put).with_jump(standard_jump());
    let result = price_monte_carlo(&params, ModelKind::Merton, 12, 500, Some(8)).unwrap();

    assert_eq!(result.paths.n_steps(), 12);
    for path in result.paths.iter() {
        assert_eq!(path.len(), 13);
        assert_eq!(path[0], 100.0);
        assert!(path.iter().all(|s| *s > 0.0 && s.is_finite()));
    }
}

// ============================================================================
// Input errors
// ============================================================================

#[test]
fn test_merton_without_jump_parameters() {
    let params = standard_params(OptionType::Call);

    let analytical = price_analytical(&params, ModelKind::Merton).unwrap_err();
    let mc = price_monte_carlo(&params, ModelKind::Merton, 10, 100, Some(1)).unwrap_err();

    assert_eq!(analytical.parameter_name(), Some("jump"));
    assert_eq!(mc.parameter_name(), Some("jump"));
}

#[test]
fn test_zero_paths_or_steps_rejected() {
    let params = standard_params(OptionType::Call);

    let zero_paths = price_monte_carlo(&params, ModelKind::BlackScholes, 10, 0, Some(1)).unwrap_err();
    let zero_steps = price_monte_carlo(&params, ModelKind::BlackScholes, 0, 10, Some(1)).unwrap_err();

    assert!(matches!(zero_paths, PricingError::InvalidConfiguration(_)));
    assert!(matches!(zero_steps, PricingError::InvalidConfiguration(_)));
}

#[test]
fn test_invalid_market_inputs_rejected() {
    let negative_spot = MarketParameters::new(-1.0, 100.0, 0.05, 0.2, 1.0, OptionType::Call);
    let zero_vol = MarketParameters::new(100.0, 100.0, 0.05, 0.0, 1.0, OptionType::Call);

    assert_eq!(negative_spot.unwrap_err().parameter_name(), Some("spot"));
    assert_eq!(zero_vol.unwrap_err().parameter_name(), Some("volatility"));
}
