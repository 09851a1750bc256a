//! Mean squared error over a sample set.
//!
//! ## Purpose
//!
//! This module provides the single loss function used for training
//! progress, validation probes, and test-set evaluation.
//!
//! ## Design notes
//!
//! * **Explicit Rejection**: An empty sample slice is rejected with
//!   [`DescentError::EmptySplit`]; the division by the sample count can
//!   never silently produce NaN.
//! * **Order-Independent**: The aggregate is a plain sum of squared
//!   residuals, so reordering the samples cannot change the result
//!   beyond float addition order.
//!
//! ## Non-goals
//!
//! * No alternative losses (MAE, Huber); the reference behavior is MSE
//!   only.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::model::ModelParams;
use crate::primitives::dataset::Sample;
use crate::primitives::errors::DescentError;

/// Mean squared error of `params` over `samples`.
///
/// `(1/n) * Σ (predict(x_i) - y_i)^2`. Fails with
/// [`DescentError::EmptySplit`] when `samples` is empty.
pub fn mse<T: Float>(
    params: &ModelParams<T>,
    samples: &[Sample<T>],
    split: &'static str,
) -> Result<T, DescentError> {
    if samples.is_empty() {
        return Err(DescentError::EmptySplit { split });
    }

    let mut sum = T::zero();
    for sample in samples {
        let residual = params.predict(sample.x) - sample.y;
        sum = sum + residual * residual;
    }
    Ok(sum / T::from(samples.len()).unwrap())
}
