//! Sample storage, shuffling, and the train/validation/test partition.
//!
//! ## Purpose
//!
//! This module holds the ordered sequence of observations and carves it
//! into the three disjoint views the trainer and evaluator consume.
//!
//! ## Design notes
//!
//! * **Single Owner**: One backing `Vec<Sample<T>>`; the splits are pure
//!   re-slicings, never copies.
//! * **Configured Sizes**: Split sizes are configuration, not derived;
//!   they are checked against the data length at construction.
//! * **One Shuffle**: The dataset is shuffled once, in place, with an
//!   injected random source, before any view is taken.
//!
//! ## Invariants
//!
//! * `train.len() + val.len() + test.len() == len()`.
//! * No sample appears in more than one view.
//! * Order within a view is stable once the shuffle has happened.
//!
//! ## Non-goals
//!
//! * This module does not read files (see `loader`).
//! * This module does not stratify or re-balance splits.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::DescentError;
use crate::primitives::rng::SeededRng;

// ============================================================================
// Sample
// ============================================================================

/// One observation: a predictor value and its response.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample<T> {
    /// Predictor value.
    pub x: T,
    /// Observed response.
    pub y: T,
}

// ============================================================================
// Split Sizes
// ============================================================================

/// Configured sizes of the train/validation/test partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitSizes {
    /// Number of training samples.
    pub train: usize,
    /// Number of validation samples.
    pub val: usize,
    /// Number of held-out test samples.
    pub test: usize,
}

impl SplitSizes {
    /// Create a new size triple.
    pub const fn new(train: usize, val: usize, test: usize) -> Self {
        Self { train, val, test }
    }

    /// Total number of samples the partition accounts for.
    pub const fn total(&self) -> usize {
        self.train + self.val + self.test
    }

    /// Proportional 80/10/10 split of `n`, remainder assigned to train.
    pub fn proportional(n: usize) -> Self {
        let val = n / 10;
        let test = n / 10;
        Self {
            train: n - val - test,
            val,
            test,
        }
    }
}

// ============================================================================
// DataSet
// ============================================================================

/// An owned, shuffled sequence of samples partitioned into three views.
#[derive(Debug, Clone)]
pub struct DataSet<T> {
    samples: Vec<Sample<T>>,
    sizes: SplitSizes,
}

impl<T: Float> DataSet<T> {
    /// Take ownership of `samples` and record the partition sizes.
    ///
    /// Fails with [`DescentError::SplitSizeMismatch`] unless the sizes
    /// sum to the number of samples.
    pub fn new(samples: Vec<Sample<T>>, sizes: SplitSizes) -> Result<Self, DescentError> {
        if sizes.total() != samples.len() {
            return Err(DescentError::SplitSizeMismatch {
                train: sizes.train,
                val: sizes.val,
                test: sizes.test,
                total: samples.len(),
            });
        }
        Ok(Self { samples, sizes })
    }

    /// Zip parallel x/y arrays into a dataset.
    pub fn from_xy(x: &[T], y: &[T], sizes: SplitSizes) -> Result<Self, DescentError> {
        let samples = x
            .iter()
            .zip(y.iter())
            .map(|(&x, &y)| Sample { x, y })
            .collect();
        Self::new(samples, sizes)
    }

    /// Shuffle the backing sequence in place with a Fisher-Yates pass.
    ///
    /// Must happen before the views are consumed; the partition is taken
    /// over the shuffled order.
    pub fn shuffle(&mut self, rng: &mut SeededRng) {
        rng.shuffle(&mut self.samples);
    }

    /// Total number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the dataset holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The configured partition sizes.
    pub fn sizes(&self) -> SplitSizes {
        self.sizes
    }

    /// Training view: indices `[0, train)`.
    pub fn train(&self) -> &[Sample<T>] {
        &self.samples[..self.sizes.train]
    }

    /// Validation view: indices `[train, train + val)`.
    pub fn val(&self) -> &[Sample<T>] {
        &self.samples[self.sizes.train..self.sizes.train + self.sizes.val]
    }

    /// Test view: indices `[train + val, N)`.
    pub fn test(&self) -> &[Sample<T>] {
        &self.samples[self.sizes.train + self.sizes.val..]
    }
}
