//! Per-sample adapter: one immediate update per training sample.
//!
//! ## Purpose
//!
//! This module provides the execution front end for per-sample
//! (stochastic) gradient descent. Every epoch walks the training split
//! in order, updating the parameters after each sample with no
//! batch-size normalization.
//!
//! ## Design notes
//!
//! * **Processing**: Shuffles, partitions, trains, and evaluates in a
//!   single `fit` call.
//! * **Noisier Trajectory**: Each sample's prediction uses the
//!   parameters the previous sample left behind, so the loss trajectory
//!   is rougher than the full-batch path for the same data.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Defaults**: Learning rate 0.005, 2500 epochs, cubic model,
//!   uniform-random init, a report every 100 epochs.
//!
//! ## Invariants
//!
//! * Updates are applied in split order, one per sample per epoch.
//! * The split partition covers every sample exactly once.
//!
//! ## Non-goals
//!
//! * This adapter does not accumulate batch gradients (use the
//!   full-batch adapter).

// External dependencies
use core::fmt::Debug;
use core::fmt::Display;
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::model::{Degree, InitStrategy, ModelParams};
use crate::engine::output::DescentResult;
use crate::engine::trainer::{Trainer, TrainerConfig, UpdateDiscipline};
use crate::engine::validator::Validator;
use crate::evaluation::evaluate::Evaluator;
use crate::primitives::dataset::{DataSet, SplitSizes};
use crate::primitives::errors::DescentError;
use crate::primitives::rng::SeededRng;

// ============================================================================
// Per-Sample Builder
// ============================================================================

/// Builder for the per-sample fitter.
#[derive(Debug, Clone)]
pub struct PerSampleDescentBuilder<T> {
    /// Step size for every parameter update.
    pub learning_rate: T,

    /// Number of training epochs.
    pub epochs: usize,

    /// Polynomial order of the model.
    pub degree: Degree,

    /// Parameter initialization policy.
    pub init: InitStrategy,

    /// Seed for the shuffle and for random initialization.
    pub seed: u64,

    /// Explicit split sizes; proportional 80/10/10 when unset.
    pub split: Option<SplitSizes>,

    /// Record a loss observation every this many epochs.
    pub report_every: usize,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for PerSampleDescentBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> PerSampleDescentBuilder<T> {
    /// Create a new per-sample builder with default parameters.
    fn new() -> Self {
        Self {
            learning_rate: T::from(0.005).unwrap(),
            epochs: 2500,
            degree: Degree::Cubic,
            init: InitStrategy::default(),
            seed: 0,
            split: None,
            report_every: 100,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the learning rate.
    pub fn learning_rate(mut self, learning_rate: T) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Set the number of training epochs.
    pub fn epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    /// Set the polynomial order of the model.
    pub fn degree(mut self, degree: Degree) -> Self {
        self.degree = degree;
        self
    }

    /// Set the parameter initialization policy.
    pub fn init(mut self, init: InitStrategy) -> Self {
        self.init = init;
        self
    }

    /// Set the seed for the shuffle and random initialization.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set explicit train/validation/test split sizes.
    pub fn split(mut self, train: usize, val: usize, test: usize) -> Self {
        self.split = Some(SplitSizes::new(train, val, test));
        self
    }

    /// Set the reporting cadence.
    pub fn report_every(mut self, report_every: usize) -> Self {
        self.report_every = report_every;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the per-sample fitter.
    pub fn build(self) -> Result<PerSampleDescent<T>, DescentError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate hyperparameters
        Validator::validate_learning_rate(self.learning_rate)?;
        Validator::validate_epochs(self.epochs)?;
        Validator::validate_report_every(self.report_every)?;

        Ok(PerSampleDescent { config: self })
    }
}

// ============================================================================
// Per-Sample Processor
// ============================================================================

/// Per-sample gradient-descent fitter.
#[derive(Debug, Clone)]
pub struct PerSampleDescent<T> {
    config: PerSampleDescentBuilder<T>,
}

impl<T: Float + Display + Debug> PerSampleDescent<T> {
    /// Fit the model to the provided data.
    ///
    /// Validates the inputs, shuffles and partitions the samples,
    /// initializes the parameters, runs the epoch loop, and evaluates
    /// the held-out test split when one is configured.
    pub fn fit(self, x: &[T], y: &[T]) -> Result<DescentResult<T>, DescentError> {
        Validator::validate_inputs(x, y)?;

        let sizes = self
            .config
            .split
            .unwrap_or_else(|| SplitSizes::proportional(x.len()));
        Validator::validate_split(sizes, x.len())?;

        let mut dataset = DataSet::from_xy(x, y, sizes)?;
        let mut rng = SeededRng::new(self.config.seed);
        dataset.shuffle(&mut rng);

        let mut params = ModelParams::init(self.config.degree, self.config.init, &mut rng);

        debug!("Training...");
        let trainer = Trainer::new(TrainerConfig {
            learning_rate: self.config.learning_rate,
            epochs: self.config.epochs,
            report_every: self.config.report_every,
            discipline: UpdateDiscipline::PerSample,
        });
        let history = trainer.run(&mut params, dataset.train(), dataset.val())?;

        let evaluation = if dataset.test().is_empty() {
            None
        } else {
            debug!("Testing...");
            Some(Evaluator::evaluate(&params, dataset.test())?)
        };

        Ok(DescentResult {
            params,
            history,
            evaluation,
        })
    }
}
