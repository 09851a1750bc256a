//! Error types for gradient-descent fitting.
//!
//! ## Purpose
//!
//! This module defines the single crate-wide error enum returned by every
//! fallible operation: configuration validation, data loading, dataset
//! partitioning, training, and evaluation.
//!
//! ## Design notes
//!
//! * **Single Enum**: One error type keeps `Result` signatures uniform
//!   across layers.
//! * **Fail-Fast**: Every variant represents a configuration or data
//!   error surfaced immediately; nothing is retried.
//! * **Comparable**: Implements `Clone` and `PartialEq` so tests can
//!   assert on exact error values.
//!
//! ## Key concepts
//!
//! * **Empty splits**: Loss and gradient computations reject empty
//!   sample slices explicitly instead of dividing by zero.
//! * **Hyperparameter bounds**: Non-positive learning rates, zero epoch
//!   counts, and split sizes that do not sum to the dataset size are all
//!   rejected before training starts.
//!
//! ## Non-goals
//!
//! * This module does not classify errors as retryable; none are.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;

/// Errors produced by descent-rs configuration, data handling, and fitting.
#[derive(Debug, Clone, PartialEq)]
pub enum DescentError {
    /// Input arrays are empty.
    EmptyInput,

    /// Input arrays have different lengths.
    MismatchedInputs {
        /// Length of the x array.
        x_len: usize,
        /// Length of the y array.
        y_len: usize,
    },

    /// A non-finite value (NaN or infinity) was found in the inputs.
    InvalidNumericValue(String),

    /// A loss, gradient, or evaluation routine was invoked on an empty split.
    EmptySplit {
        /// Which split was empty ("train", "val", or "test").
        split: &'static str,
    },

    /// The learning rate is non-positive or non-finite.
    InvalidLearningRate(f64),

    /// The epoch count is zero.
    InvalidEpochs(usize),

    /// The reporting interval is zero.
    InvalidReportEvery(usize),

    /// Configured split sizes do not sum to the dataset size.
    SplitSizeMismatch {
        /// Configured training split size.
        train: usize,
        /// Configured validation split size.
        val: usize,
        /// Configured test split size.
        test: usize,
        /// Actual number of samples.
        total: usize,
    },

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
    },

    /// The data file could not be opened or read.
    #[cfg(feature = "std")]
    DataLoad {
        /// Path of the file.
        path: String,
        /// Underlying I/O failure, rendered as text.
        reason: String,
    },

    /// A line in the data file did not parse as `x,y`.
    #[cfg(feature = "std")]
    MalformedLine {
        /// One-based line number.
        line: usize,
        /// The offending line content.
        content: String,
    },

    /// The data file yielded a different number of samples than expected.
    #[cfg(feature = "std")]
    SampleCountMismatch {
        /// Number of samples actually read.
        got: usize,
        /// Number of samples the caller required.
        expected: usize,
    },
}

impl fmt::Display for DescentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescentError::EmptyInput => write!(f, "Input arrays are empty"),
            DescentError::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {} points, y has {}", x_len, y_len)
            }
            DescentError::InvalidNumericValue(detail) => {
                write!(f, "Invalid numeric value: {}", detail)
            }
            DescentError::EmptySplit { split } => {
                write!(f, "The '{}' split is empty", split)
            }
            DescentError::InvalidLearningRate(lr) => {
                write!(f, "Invalid learning rate: {} (must be > 0 and finite)", lr)
            }
            DescentError::InvalidEpochs(epochs) => {
                write!(f, "Invalid epochs: {} (must be > 0)", epochs)
            }
            DescentError::InvalidReportEvery(interval) => {
                write!(f, "Invalid report interval: {} (must be > 0)", interval)
            }
            DescentError::SplitSizeMismatch {
                train,
                val,
                test,
                total,
            } => {
                write!(
                    f,
                    "Split sizes {} + {} + {} do not sum to the dataset size {}",
                    train, val, test, total
                )
            }
            DescentError::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                    parameter
                )
            }
            #[cfg(feature = "std")]
            DescentError::DataLoad { path, reason } => {
                write!(f, "Failed to load data from '{}': {}", path, reason)
            }
            #[cfg(feature = "std")]
            DescentError::MalformedLine { line, content } => {
                write!(f, "Malformed data on line {}: '{}'", line, content)
            }
            #[cfg(feature = "std")]
            DescentError::SampleCountMismatch { got, expected } => {
                write!(f, "Sample count mismatch: read {}, expected {}", got, expected)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DescentError {}
