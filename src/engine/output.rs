//! Result types produced by a training run.
//!
//! ## Purpose
//!
//! This module defines the observational records the trainer emits on
//! its reporting cadence and the final result bundle a fit returns.
//!
//! ## Design notes
//!
//! * **Observational Only**: Loss records are never fed back into
//!   training; dropping or re-reading them cannot change the parameter
//!   trajectory.
//! * **Optional Validation**: When the validation split is empty the
//!   record simply carries no validation loss; computing it would
//!   require invoking the loss on an empty split.
//! * **Printable**: Records and results implement `Display` in the
//!   classic console format.
//!
//! ## Non-goals
//!
//! * No persistence of loss histories; callers own the records.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::model::ModelParams;
use crate::evaluation::evaluate::Evaluation;

// ============================================================================
// Loss Records
// ============================================================================

/// One reporting-cadence observation of training progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LossRecord<T> {
    /// Epoch index the record was taken at (0-based).
    pub epoch: usize,
    /// Mean squared error over the training split.
    pub train_loss: T,
    /// Mean squared error over the validation split, when one exists.
    pub val_loss: Option<T>,
}

impl<T: Float + fmt::Display> fmt::Display for LossRecord<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.val_loss {
            Some(val) => write!(
                f,
                "Epoch: {}, Train Loss: {}, Val Loss: {}",
                self.epoch, self.train_loss, val
            ),
            None => write!(f, "Epoch: {}, Loss: {}", self.epoch, self.train_loss),
        }
    }
}

// ============================================================================
// Fit Result
// ============================================================================

/// Everything a completed fit produces.
#[derive(Debug, Clone)]
pub struct DescentResult<T> {
    /// The trained parameter set.
    pub params: ModelParams<T>,
    /// Loss records collected on the reporting cadence.
    pub history: Vec<LossRecord<T>>,
    /// Test-split report, when a test split was configured.
    pub evaluation: Option<Evaluation<T>>,
}

impl<T: Float + fmt::Display> fmt::Display for DescentResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        if let Some(record) = self.history.last() {
            writeln!(f, "  {}", record)?;
        }
        writeln!(f, "  {}", self.params)?;
        if let Some(evaluation) = &self.evaluation {
            writeln!(f)?;
            writeln!(f, "Test report:")?;
            write!(f, "{}", evaluation)?;
        }
        Ok(())
    }
}
