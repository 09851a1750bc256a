#![cfg(feature = "dev")]
//! Tests for the mean-squared-error loss.
//!
//! ## Test Organization
//!
//! 1. **Values** - Hand-computed aggregates
//! 2. **Properties** - Order independence and the exact-fit zero
//! 3. **Rejection** - Empty splits fail explicitly

use approx::assert_relative_eq;

use descent_rs::internals::algorithms::loss::mse;
use descent_rs::internals::algorithms::model::ModelParams;
use descent_rs::internals::primitives::dataset::Sample;
use descent_rs::internals::primitives::errors::DescentError;

// ============================================================================
// Helper Functions
// ============================================================================

fn samples(pairs: &[(f64, f64)]) -> Vec<Sample<f64>> {
    pairs.iter().map(|&(x, y)| Sample { x, y }).collect()
}

// ============================================================================
// Values
// ============================================================================

#[test]
fn test_mse_hand_computed() {
    let params = ModelParams::Linear { w: 1.0, b: 0.0 };
    // Residuals: 1 - 2 = -1, 2 - 2 = 0
    let batch = samples(&[(1.0, 2.0), (2.0, 2.0)]);
    let loss = mse(&params, &batch, "train").unwrap();
    assert_relative_eq!(loss, 0.5, epsilon = 1e-12);
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_mse_is_order_independent() {
    let params = ModelParams::Linear { w: 2.0, b: 0.0 };
    // Residuals 1, 2, 3: squares sum exactly in any order
    let forward = samples(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
    let mut reversed = forward.clone();
    reversed.reverse();

    let a = mse(&params, &forward, "train").unwrap();
    let b = mse(&params, &reversed, "train").unwrap();
    assert_relative_eq!(a, b, epsilon = 1e-12);
}

#[test]
fn test_mse_zero_on_exact_fit() {
    let params = ModelParams::Linear { w: 2.0, b: 1.0 };
    let batch = samples(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]);
    assert_eq!(mse(&params, &batch, "train").unwrap(), 0.0);
}

// ============================================================================
// Rejection
// ============================================================================

#[test]
fn test_mse_rejects_empty_split() {
    let params = ModelParams::Linear { w: 1.0, b: 1.0 };
    let err = mse(&params, &[], "val").unwrap_err();
    assert_eq!(err, DescentError::EmptySplit { split: "val" });
}
