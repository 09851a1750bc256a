#![cfg(feature = "dev")]
//! Tests for the analytic gradient steps.
//!
//! ## Test Organization
//!
//! 1. **Full Batch** - Hand-computed accumulated updates
//! 2. **Per Sample** - Immediate updates and the missing normalization
//! 3. **Descent Property** - One small step decreases the loss
//! 4. **Rejection** - Empty batches fail explicitly

use approx::assert_relative_eq;

use descent_rs::internals::algorithms::gradient::{batch_step, per_sample_sweep};
use descent_rs::internals::algorithms::loss::mse;
use descent_rs::internals::algorithms::model::{AffineTerm, ModelParams};
use descent_rs::internals::primitives::dataset::Sample;
use descent_rs::internals::primitives::errors::DescentError;

// ============================================================================
// Helper Functions
// ============================================================================

fn samples(pairs: &[(f64, f64)]) -> Vec<Sample<f64>> {
    pairs.iter().map(|&(x, y)| Sample { x, y }).collect()
}

// ============================================================================
// Full Batch
// ============================================================================

#[test]
fn test_batch_step_matches_hand_computed_gradient() {
    let mut params = ModelParams::Linear { w: 0.0, b: 0.0 };
    let batch = samples(&[(1.0, 1.0), (2.0, 2.0)]);

    // Residuals: -1, -2. dw = (-1*1 + -2*2)/2 = -2.5, db = (-1 + -2)/2 = -1.5
    batch_step(&mut params, &batch, 0.1).unwrap();

    match params {
        ModelParams::Linear { w, b } => {
            assert_relative_eq!(w, 0.25, epsilon = 1e-12);
            assert_relative_eq!(b, 0.15, epsilon = 1e-12);
        }
        other => panic!("shape changed: {:?}", other),
    }
}

#[test]
fn test_batch_step_uses_epoch_start_parameters_for_whole_batch() {
    // Two identical samples: if the second gradient saw the first
    // update, the result would drift from the accumulated value.
    let mut params = ModelParams::Linear { w: 0.0, b: 0.0 };
    let batch = samples(&[(1.0, 2.0), (1.0, 2.0)]);

    // Residuals both -2 with frozen parameters: dw = db = -2
    batch_step(&mut params, &batch, 0.1).unwrap();

    match params {
        ModelParams::Linear { w, b } => {
            assert_relative_eq!(w, 0.2, epsilon = 1e-12);
            assert_relative_eq!(b, 0.2, epsilon = 1e-12);
        }
        other => panic!("shape changed: {:?}", other),
    }
}

#[test]
fn test_batch_step_polynomial_hand_computed() {
    let mut params = ModelParams::Polynomial {
        terms: vec![
            AffineTerm { k: 0.0, b: 0.0 },
            AffineTerm { k: 0.0, b: 0.0 },
            AffineTerm { k: 0.0, b: 0.0 },
        ],
    };
    let batch = samples(&[(2.0, 3.0)]);

    // y_pred = 0, residual = -3. Per power j: dk_j = -3 * 2^j, db_j = -3.
    batch_step(&mut params, &batch, 0.1).unwrap();

    match params {
        ModelParams::Polynomial { terms } => {
            assert_relative_eq!(terms[0].k, 0.3, epsilon = 1e-12);
            assert_relative_eq!(terms[1].k, 0.6, epsilon = 1e-12);
            assert_relative_eq!(terms[2].k, 1.2, epsilon = 1e-12);
            for term in &terms {
                assert_relative_eq!(term.b, 0.3, epsilon = 1e-12);
            }
        }
        other => panic!("shape changed: {:?}", other),
    }
}

// ============================================================================
// Per Sample
// ============================================================================

#[test]
fn test_per_sample_uses_previous_samples_updates() {
    let mut params = ModelParams::Linear { w: 0.0, b: 0.0 };
    let batch = samples(&[(1.0, 1.0), (1.0, 1.0)]);

    // Sample 1: residual -1, w -> 0.5, b -> 0.5.
    // Sample 2 sees y_pred = 1.0, residual 0: no further change.
    per_sample_sweep(&mut params, &batch, 0.5).unwrap();

    match params {
        ModelParams::Linear { w, b } => {
            assert_relative_eq!(w, 0.5, epsilon = 1e-12);
            assert_relative_eq!(b, 0.5, epsilon = 1e-12);
        }
        other => panic!("shape changed: {:?}", other),
    }
}

#[test]
fn test_per_sample_applies_no_batch_normalization() {
    // x = 0 isolates the bias update.
    let batch = samples(&[(0.0, 1.0), (0.0, 1.0)]);

    let mut per_sample = ModelParams::Linear { w: 0.0, b: 0.0 };
    per_sample_sweep(&mut per_sample, &batch, 0.1).unwrap();

    let mut full_batch = ModelParams::Linear { w: 0.0, b: 0.0 };
    batch_step(&mut full_batch, &batch, 0.1).unwrap();

    // Per-sample: b -> 0.1, then residual -0.9 gives b -> 0.19.
    // Full batch: db = (-1 + -1)/2 = -1, b -> 0.1.
    match (per_sample, full_batch) {
        (ModelParams::Linear { b: b_ps, .. }, ModelParams::Linear { b: b_fb, .. }) => {
            assert_relative_eq!(b_ps, 0.19, epsilon = 1e-12);
            assert_relative_eq!(b_fb, 0.1, epsilon = 1e-12);
        }
        other => panic!("shape changed: {:?}", other),
    }
}

#[test]
fn test_per_sample_polynomial_hand_computed() {
    let mut params = ModelParams::Polynomial {
        terms: vec![AffineTerm { k: 0.0, b: 0.0 }, AffineTerm { k: 0.0, b: 0.0 }],
    };
    let batch = samples(&[(2.0, 3.0)]);

    // Single sample, so identical to the batch formulas minus the
    // (size 1) normalization: residual -3, dk = [-3, -6], db = [-3, -3].
    per_sample_sweep(&mut params, &batch, 0.1).unwrap();

    match params {
        ModelParams::Polynomial { terms } => {
            assert_relative_eq!(terms[0].k, 0.3, epsilon = 1e-12);
            assert_relative_eq!(terms[1].k, 0.6, epsilon = 1e-12);
            assert_relative_eq!(terms[0].b, 0.3, epsilon = 1e-12);
            assert_relative_eq!(terms[1].b, 0.3, epsilon = 1e-12);
        }
        other => panic!("shape changed: {:?}", other),
    }
}

// ============================================================================
// Descent Property
// ============================================================================

#[test]
fn test_one_batch_step_decreases_loss() {
    let batch = samples(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0), (3.0, 7.0)]);
    let mut params = ModelParams::Linear { w: 0.0, b: 0.0 };

    let before = mse(&params, &batch, "train").unwrap();
    batch_step(&mut params, &batch, 0.01).unwrap();
    let after = mse(&params, &batch, "train").unwrap();

    assert!(
        after < before,
        "loss did not decrease: {} -> {}",
        before,
        after
    );
}

// ============================================================================
// Rejection
// ============================================================================

#[test]
fn test_empty_batch_is_rejected() {
    let mut params = ModelParams::Linear { w: 0.0, b: 0.0 };

    let err = batch_step(&mut params, &[], 0.1).unwrap_err();
    assert_eq!(err, DescentError::EmptySplit { split: "train" });

    let err = per_sample_sweep(&mut params, &[], 0.1).unwrap_err();
    assert_eq!(err, DescentError::EmptySplit { split: "train" });
}
