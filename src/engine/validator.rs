//! Input validation for fitter configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions applied to
//! hyperparameters and input data before any training happens. It
//! checks requirements such as input lengths, finite values, and
//! parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Learning rate must be positive and finite,
//!   epoch and report counts positive.
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//! * **Partition Bounds**: Split sizes must sum to the dataset size.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not shuffle, split, or transform input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform the training itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::dataset::SplitSizes;
use crate::primitives::errors::DescentError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for fitter configuration and input data.
///
/// Provides static methods for validating hyperparameters and input
/// data. All methods return `Result<(), DescentError>` and fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate input arrays before fitting.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), DescentError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(DescentError::EmptyInput);
        }

        // Check 2: Matching lengths
        if x.len() != y.len() {
            return Err(DescentError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        // Check 3: All values finite
        for (i, &val) in x.iter().enumerate() {
            if !val.is_finite() {
                return Err(DescentError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        for (i, &val) in y.iter().enumerate() {
            if !val.is_finite() {
                return Err(DescentError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Hyperparameter Validation
    // ========================================================================

    /// Validate the learning rate.
    pub fn validate_learning_rate<T: Float>(learning_rate: T) -> Result<(), DescentError> {
        if !learning_rate.is_finite() || learning_rate <= T::zero() {
            return Err(DescentError::InvalidLearningRate(
                learning_rate.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the number of training epochs.
    pub fn validate_epochs(epochs: usize) -> Result<(), DescentError> {
        if epochs == 0 {
            return Err(DescentError::InvalidEpochs(epochs));
        }
        Ok(())
    }

    /// Validate the reporting cadence.
    pub fn validate_report_every(report_every: usize) -> Result<(), DescentError> {
        if report_every == 0 {
            return Err(DescentError::InvalidReportEvery(report_every));
        }
        Ok(())
    }

    /// Validate split sizes against the actual sample count.
    pub fn validate_split(sizes: SplitSizes, total: usize) -> Result<(), DescentError> {
        if sizes.total() != total {
            return Err(DescentError::SplitSizeMismatch {
                train: sizes.train,
                val: sizes.val,
                test: sizes.test,
                total,
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), DescentError> {
        if let Some(param) = duplicate_param {
            return Err(DescentError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
