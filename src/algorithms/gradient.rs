//! Analytic gradient computation and parameter updates.
//!
//! ## Purpose
//!
//! This module implements the two update disciplines of the fitter:
//! one accumulated full-batch step, and one per-sample sweep of
//! immediate updates.
//!
//! ## Design notes
//!
//! * **Full Batch**: [`batch_step`] evaluates every sample with the
//!   parameters fixed at call entry, accumulates the gradient, divides
//!   by the batch size, and applies exactly one update per call.
//! * **Per Sample**: [`per_sample_sweep`] updates the parameters after
//!   every sample, so each prediction uses whatever values the previous
//!   sample left behind. No batch-size normalization is applied on this
//!   path; the asymmetry with the full-batch step is intentional and
//!   the two disciplines must not be merged.
//! * **Analytic Only**: Partial derivatives of the squared error are
//!   written out by hand; there is no automatic differentiation.
//!
//! ## Key concepts
//!
//! * Linear shape: `dw = Σ (ŷ_i - y_i)·x_i`, `db = Σ (ŷ_i - y_i)`.
//! * Polynomial shape, power `j`: `dk_j = (ŷ - y)·x^j`, `db_j = (ŷ - y)`.
//!
//! ## Invariants
//!
//! * A full-batch step never reads partially-updated parameters
//!   mid-batch.
//! * Both disciplines reject an empty batch explicitly.
//!
//! ## Non-goals
//!
//! * No momentum, no adaptive learning rates, no mini-batching.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::model::{AffineTerm, ModelParams};
use crate::primitives::dataset::Sample;
use crate::primitives::errors::DescentError;

/// Apply one accumulated full-batch gradient update.
///
/// Gradients are computed with the parameters held fixed for the whole
/// batch, averaged over the batch size, and applied exactly once:
/// `p -= lr * grad`. Fails with [`DescentError::EmptySplit`] on an
/// empty batch.
pub fn batch_step<T: Float>(
    params: &mut ModelParams<T>,
    batch: &[Sample<T>],
    learning_rate: T,
) -> Result<(), DescentError> {
    if batch.is_empty() {
        return Err(DescentError::EmptySplit { split: "train" });
    }

    let size = T::from(batch.len()).unwrap();

    match params {
        ModelParams::Linear { w, b } => {
            let mut dw = T::zero();
            let mut db = T::zero();
            for sample in batch.iter() {
                let y_pred = *w * sample.x + *b;
                let residual = y_pred - sample.y;
                dw = dw + residual * sample.x;
                db = db + residual;
            }
            dw = dw / size;
            db = db / size;
            *w = *w - learning_rate * dw;
            *b = *b - learning_rate * db;
        }
        ModelParams::Polynomial { terms } => {
            let mut dk = vec![T::zero(); terms.len()];
            let mut db = vec![T::zero(); terms.len()];
            for sample in batch.iter() {
                let y_pred = predict_terms(terms, sample.x);
                let residual = y_pred - sample.y;
                let mut power = T::one();
                for j in 0..terms.len() {
                    dk[j] = dk[j] + residual * power;
                    db[j] = db[j] + residual;
                    power = power * sample.x;
                }
            }
            for (j, term) in terms.iter_mut().enumerate() {
                term.k = term.k - learning_rate * (dk[j] / size);
                term.b = term.b - learning_rate * (db[j] / size);
            }
        }
    }

    Ok(())
}

/// Run one per-sample (stochastic) sweep over the batch.
///
/// Each sample's prediction uses the parameters left by the previous
/// sample, and the update is applied immediately, without batch-size
/// normalization. Fails with [`DescentError::EmptySplit`] on an empty
/// batch.
pub fn per_sample_sweep<T: Float>(
    params: &mut ModelParams<T>,
    batch: &[Sample<T>],
    learning_rate: T,
) -> Result<(), DescentError> {
    if batch.is_empty() {
        return Err(DescentError::EmptySplit { split: "train" });
    }

    match params {
        ModelParams::Linear { w, b } => {
            for sample in batch.iter() {
                let y_pred = *w * sample.x + *b;
                let residual = y_pred - sample.y;
                *w = *w - learning_rate * residual * sample.x;
                *b = *b - learning_rate * residual;
            }
        }
        ModelParams::Polynomial { terms } => {
            for sample in batch.iter() {
                let y_pred = predict_terms(terms, sample.x);
                let residual = y_pred - sample.y;
                let mut power = T::one();
                for term in terms.iter_mut() {
                    term.k = term.k - learning_rate * residual * power;
                    term.b = term.b - learning_rate * residual;
                    power = power * sample.x;
                }
            }
        }
    }

    Ok(())
}

/// Forward pass over a raw term slice, shared by both disciplines.
fn predict_terms<T: Float>(terms: &[AffineTerm<T>], x: T) -> T {
    let mut y = T::zero();
    let mut power = T::one();
    for term in terms {
        y = y + term.k * power + term.b;
        power = power * x;
    }
    y
}
