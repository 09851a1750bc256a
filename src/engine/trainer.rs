//! The epoch loop: repeated gradient steps with cadenced reporting.
//!
//! ## Purpose
//!
//! This module orchestrates a training run: it owns the parameter set
//! for the duration of the loop, applies one update procedure per epoch
//! according to the configured discipline, and collects loss records on
//! the reporting cadence.
//!
//! ## Design notes
//!
//! * **Sequential Epochs**: Epoch `n + 1` starts from the parameters
//!   epoch `n` produced; there is no parallelism across epochs.
//! * **Reporting Is Passive**: Loss probes happen after the epoch's
//!   update and never alter the floating-point update sequence,
//!   whatever the cadence.
//! * **Exclusive Ownership**: The caller hands the parameters in by
//!   mutable borrow; nothing else touches them until `run` returns.
//!
//! ## Key concepts
//!
//! * **Epoch**: One pass of the update procedure over the training
//!   split — a single accumulated step under the full-batch discipline,
//!   one immediate update per sample under the per-sample discipline.
//!
//! ## Invariants
//!
//! * Exactly `epochs` update passes are applied, in order.
//! * A record is taken at every epoch index divisible by the cadence.
//!
//! ## Non-goals
//!
//! * No early stopping, no learning-rate schedules, no checkpointing.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::info;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::gradient::{batch_step, per_sample_sweep};
use crate::algorithms::loss::mse;
use crate::algorithms::model::ModelParams;
use crate::engine::output::LossRecord;
use crate::primitives::dataset::Sample;
use crate::primitives::errors::DescentError;

// ============================================================================
// Update Discipline
// ============================================================================

/// How the gradient is applied within one epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateDiscipline {
    /// One accumulated, batch-size-normalized update per epoch, computed
    /// with the parameters fixed at epoch start (default).
    #[default]
    FullBatch,

    /// One immediate, unnormalized update per training sample, each
    /// using the parameters the previous sample left behind.
    PerSample,
}

// ============================================================================
// Trainer
// ============================================================================

/// Immutable configuration of a training run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainerConfig<T> {
    /// Step size for every parameter update.
    pub learning_rate: T,
    /// Number of epochs to run.
    pub epochs: usize,
    /// Record a loss observation every this many epochs.
    pub report_every: usize,
    /// Gradient application discipline.
    pub discipline: UpdateDiscipline,
}

/// Epoch-loop orchestrator.
///
/// Moves through `Initialized -> Training -> Completed`; the trained
/// parameters and the collected loss records are the result.
#[derive(Debug, Clone)]
pub struct Trainer<T> {
    config: TrainerConfig<T>,
}

impl<T: Float + core::fmt::Display> Trainer<T> {
    /// Create a trainer from a validated configuration.
    pub fn new(config: TrainerConfig<T>) -> Self {
        Self { config }
    }

    /// Run the configured number of epochs over the training split.
    ///
    /// Per epoch: apply the update discipline once, then on the
    /// reporting cadence probe the train split (and the validation
    /// split when it is non-empty) and record a [`LossRecord`].
    ///
    /// Fails with [`DescentError::EmptySplit`] when the training split
    /// is empty.
    pub fn run(
        &self,
        params: &mut ModelParams<T>,
        train: &[Sample<T>],
        val: &[Sample<T>],
    ) -> Result<Vec<LossRecord<T>>, DescentError> {
        let mut history = Vec::with_capacity(self.config.epochs / self.config.report_every + 1);

        for epoch in 0..self.config.epochs {
            match self.config.discipline {
                UpdateDiscipline::FullBatch => {
                    batch_step(params, train, self.config.learning_rate)?
                }
                UpdateDiscipline::PerSample => {
                    per_sample_sweep(params, train, self.config.learning_rate)?
                }
            }

            if epoch % self.config.report_every == 0 {
                let train_loss = mse(params, train, "train")?;
                let val_loss = if val.is_empty() {
                    None
                } else {
                    Some(mse(params, val, "val")?)
                };
                let record = LossRecord {
                    epoch,
                    train_loss,
                    val_loss,
                };
                info!("{}", record);
                history.push(record);
            }
        }

        Ok(history)
    }
}
