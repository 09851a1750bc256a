//! Held-out test-set evaluation of a trained model.
//!
//! ## Purpose
//!
//! This module runs a fitted parameter set over the test split,
//! producing one prediction record per sample plus the aggregate loss.
//!
//! ## Design notes
//!
//! * **Read-Only**: Evaluation never mutates the model.
//! * **Order-Preserving**: Records come back in the same order as the
//!   test split.
//! * **Explicit Rejection**: An empty test split fails with
//!   [`DescentError::EmptySplit`] instead of producing NaN aggregates.
//!
//! ## Non-goals
//!
//! * No diagnostics beyond MSE (no R², no intervals).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::loss::mse;
use crate::algorithms::model::ModelParams;
use crate::primitives::dataset::Sample;
use crate::primitives::errors::DescentError;

// ============================================================================
// Prediction Records
// ============================================================================

/// One test sample together with the model's prediction for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction<T> {
    /// Predictor value.
    pub x: T,
    /// Observed response.
    pub y: T,
    /// Predicted response.
    pub y_pred: T,
}

/// The full test-set report: per-sample records and the aggregate loss.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation<T> {
    /// One record per test sample, in split order.
    pub predictions: Vec<Prediction<T>>,
    /// Mean squared error over the test split.
    pub loss: T,
}

impl<T: Float + fmt::Display> fmt::Display for Evaluation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in &self.predictions {
            writeln!(f, "x: {}, y: {}, y_pred: {}", p.x, p.y, p.y_pred)?;
        }
        write!(f, "Loss: {}", self.loss)
    }
}

// ============================================================================
// Evaluator
// ============================================================================

/// Test-set evaluation over a trained model.
pub struct Evaluator;

impl Evaluator {
    /// Evaluate `params` over `test_samples`.
    ///
    /// Returns per-sample predictions in split order plus the aggregate
    /// MSE. Fails with [`DescentError::EmptySplit`] on an empty split.
    pub fn evaluate<T: Float>(
        params: &ModelParams<T>,
        test_samples: &[Sample<T>],
    ) -> Result<Evaluation<T>, DescentError> {
        let loss = mse(params, test_samples, "test")?;

        let predictions = test_samples
            .iter()
            .map(|sample| Prediction {
                x: sample.x,
                y: sample.y,
                y_pred: params.predict(sample.x),
            })
            .collect();

        Ok(Evaluation { predictions, loss })
    }
}
