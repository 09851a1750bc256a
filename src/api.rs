//! High-level API for gradient-descent curve fitting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It
//! implements a fluent builder pattern for configuring hyperparameters
//! and choosing an update discipline (FullBatch or PerSample).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with the reference defaults for all
//!   parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized
//!   adapter builders.
//! * **Validated**: Core parameters are validated during adapter
//!   construction.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Update Disciplines**: FullBatch and PerSample modes.
//! * **Configuration Flow**: Builder pattern ending in
//!   `.adapter(FullBatch)` or `.adapter(PerSample)`.
//! * **Validation**: Parameters are validated when `.build()` is called
//!   on the adapter.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`DescentBuilder`] via `Descent::new()`.
//! 2. Chain configuration methods (`.learning_rate()`, `.epochs()`, ...).
//! 3. Select a discipline via `.adapter(FullBatch)` to get an execution
//!    builder, then `.build()` and `.fit()`.

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::adapters::full_batch::FullBatchDescentBuilder;
use crate::adapters::per_sample::PerSampleDescentBuilder;

// Publicly re-exported types
pub use crate::algorithms::model::{AffineTerm, Degree, InitStrategy, ModelParams};
pub use crate::engine::output::{DescentResult, LossRecord};
pub use crate::engine::trainer::UpdateDiscipline;
pub use crate::evaluation::evaluate::{Evaluation, Evaluator, Prediction};
pub use crate::primitives::dataset::{DataSet, Sample, SplitSizes};
pub use crate::primitives::errors::DescentError;
pub use crate::primitives::rng::SeededRng;

/// Marker types for selecting update-discipline adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{FullBatch, PerSample};
}

/// Fluent builder for configuring a gradient-descent fit.
#[derive(Debug, Clone)]
pub struct DescentBuilder<T: Float + Debug> {
    /// Step size for every parameter update.
    pub learning_rate: Option<T>,

    /// Number of training epochs.
    pub epochs: Option<usize>,

    /// Polynomial order of the model.
    pub degree: Option<Degree>,

    /// Parameter initialization policy.
    pub init: Option<InitStrategy>,

    /// Seed for the shuffle and for random initialization.
    pub seed: Option<u64>,

    /// Explicit train/validation/test split sizes.
    pub split: Option<SplitSizes>,

    /// Reporting cadence in epochs.
    pub report_every: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float + Debug> Default for DescentBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Debug> DescentBuilder<T> {
    /// Select an update discipline to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: DescentAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            learning_rate: None,
            epochs: None,
            degree: None,
            init: None,
            seed: None,
            split: None,
            report_every: None,
            duplicate_param: None,
        }
    }

    /// Set the learning rate.
    pub fn learning_rate(mut self, learning_rate: T) -> Self {
        if self.learning_rate.is_some() {
            self.duplicate_param = Some("learning_rate");
        }
        self.learning_rate = Some(learning_rate);
        self
    }

    /// Set the number of training epochs.
    pub fn epochs(mut self, epochs: usize) -> Self {
        if self.epochs.is_some() {
            self.duplicate_param = Some("epochs");
        }
        self.epochs = Some(epochs);
        self
    }

    /// Set the polynomial order of the model.
    pub fn degree(mut self, degree: Degree) -> Self {
        if self.degree.is_some() {
            self.duplicate_param = Some("degree");
        }
        self.degree = Some(degree);
        self
    }

    /// Set the parameter initialization policy.
    pub fn init(mut self, init: InitStrategy) -> Self {
        if self.init.is_some() {
            self.duplicate_param = Some("init");
        }
        self.init = Some(init);
        self
    }

    /// Set the seed for the shuffle and random initialization.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Set explicit train/validation/test split sizes.
    pub fn split(mut self, train: usize, val: usize, test: usize) -> Self {
        if self.split.is_some() {
            self.duplicate_param = Some("split");
        }
        self.split = Some(SplitSizes::new(train, val, test));
        self
    }

    /// Set the reporting cadence in epochs.
    pub fn report_every(mut self, report_every: usize) -> Self {
        if self.report_every.is_some() {
            self.duplicate_param = Some("report_every");
        }
        self.report_every = Some(report_every);
        self
    }
}

/// Trait for transitioning from the generic builder to an execution builder.
pub trait DescentAdapter<T: Float + Debug> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`DescentBuilder`] into a specialized execution builder.
    fn convert(builder: DescentBuilder<T>) -> Self::Output;
}

/// Marker for full-batch gradient descent.
#[derive(Debug, Clone, Copy)]
pub struct FullBatch;

impl<T: Float + Debug> DescentAdapter<T> for FullBatch {
    type Output = FullBatchDescentBuilder<T>;

    fn convert(builder: DescentBuilder<T>) -> Self::Output {
        let mut result = FullBatchDescentBuilder::default();

        if let Some(lr) = builder.learning_rate {
            result.learning_rate = lr;
        }
        if let Some(epochs) = builder.epochs {
            result.epochs = epochs;
        }
        if let Some(degree) = builder.degree {
            result.degree = degree;
        }
        if let Some(init) = builder.init {
            result.init = init;
        }
        if let Some(seed) = builder.seed {
            result.seed = seed;
        }
        if let Some(split) = builder.split {
            result.split = Some(split);
        }
        if let Some(report_every) = builder.report_every {
            result.report_every = report_every;
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for per-sample (stochastic) gradient descent.
#[derive(Debug, Clone, Copy)]
pub struct PerSample;

impl<T: Float + Debug> DescentAdapter<T> for PerSample {
    type Output = PerSampleDescentBuilder<T>;

    fn convert(builder: DescentBuilder<T>) -> Self::Output {
        let mut result = PerSampleDescentBuilder::default();

        if let Some(lr) = builder.learning_rate {
            result.learning_rate = lr;
        }
        if let Some(epochs) = builder.epochs {
            result.epochs = epochs;
        }
        if let Some(degree) = builder.degree {
            result.degree = degree;
        }
        if let Some(init) = builder.init {
            result.init = init;
        }
        if let Some(seed) = builder.seed {
            result.seed = seed;
        }
        if let Some(split) = builder.split {
            result.split = Some(split);
        }
        if let Some(report_every) = builder.report_every {
            result.report_every = report_every;
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}
