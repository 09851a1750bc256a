//! # descent-rs — Gradient-Descent Curve Fitting for Rust
//!
//! A small, dependency-light crate that fits a scalar function (linear
//! or low-degree polynomial) to a set of `(x, y)` samples using batch
//! or per-sample gradient descent, then reports validation and test
//! loss over a held-out partition of the data.
//!
//! ## What does it do?
//!
//! Given a sequence of observations, the fitter:
//!
//! 1. Shuffles the samples once with a seeded, reproducible permutation
//! 2. Partitions them into train/validation/test views
//! 3. Initializes the model parameters (all-zero or uniform-random)
//! 4. Runs the configured number of epochs, applying analytic gradient
//!    updates under one of two disciplines
//! 5. Records train/validation loss on a reporting cadence
//! 6. Evaluates the fitted model over the test split, one prediction
//!    record per sample plus the aggregate mean squared error
//!
//! **Model shapes:**
//! - Degree 1: a single affine map, `y = w*x + b`
//! - Degree 2-4: a sum of independent affine terms, one per power of x,
//!   each with its own additive bias: `y = Σ (k_i * x^i + b_i)`
//!
//! The per-power-bias parameterization is deliberate: the gradient
//! formulas and the convergence trajectories depend on it, and
//! collapsing it to a conventional single-intercept polynomial would
//! change the fitted results.
//!
//! **Update disciplines:**
//! - `FullBatch`: one update per epoch from gradients averaged over the
//!   whole training split, computed with the parameters fixed at epoch
//!   start
//! - `PerSample`: one immediate update per training sample, each using
//!   the parameters the previous sample left behind, with no batch-size
//!   normalization
//!
//! The two disciplines produce materially different convergence
//! trajectories and are selectable independently of the model shape.
//!
//! ## Quick Start
//!
//! ### Linear fit, full batch
//!
//! ```rust
//! use descent_rs::prelude::*;
//!
//! // y = 2x + 1, exactly
//! let x = vec![0.0, 1.0, 2.0, 3.0];
//! let y = vec![1.0, 3.0, 5.0, 7.0];
//!
//! let model = Descent::new()
//!     .learning_rate(0.01)
//!     .epochs(2000)
//!     .degree(Linear)
//!     .init(Zero)
//!     .split(4, 0, 0)     // train on everything
//!     .adapter(FullBatch)
//!     .build()?;
//!
//! let result = model.fit(&x, &y)?;
//!
//! // The fitted equation, e.g. "y = 1.98x + 1.02"
//! println!("{}", result.params);
//! # Result::<(), DescentError>::Ok(())
//! ```
//!
//! ### Cubic fit, per-sample updates
//!
//! ```rust
//! use descent_rs::prelude::*;
//!
//! let x: Vec<f64> = (0..50).map(|i| i as f64 / 25.0 - 1.0).collect();
//! let y: Vec<f64> = x.iter().map(|&x| x * x * x + 2.0).collect();
//!
//! let result = Descent::new()
//!     .learning_rate(0.005)
//!     .epochs(1500)
//!     .degree(Cubic)
//!     .seed(7)
//!     .split(40, 5, 5)
//!     .report_every(100)
//!     .adapter(PerSample)
//!     .build()?
//!     .fit(&x, &y)?;
//!
//! for record in &result.history {
//!     // "Epoch: 0, Train Loss: ..., Val Loss: ..."
//!     println!("{}", record);
//! }
//! if let Some(evaluation) = &result.evaluation {
//!     // "x: ..., y: ..., y_pred: ..." per test sample, then "Loss: ..."
//!     println!("{}", evaluation);
//! }
//! # Result::<(), DescentError>::Ok(())
//! ```
//!
//! ### Loading data from a file
//!
//! The loader consumes plain text, one `x,y` pair per line (optional
//! space after the comma), no header row:
//!
//! ```no_run
//! use descent_rs::loader;
//! use descent_rs::prelude::*;
//!
//! let samples = loader::load_exact("data.txt", 5000)?;
//! let x: Vec<f64> = samples.iter().map(|s| s.x).collect();
//! let y: Vec<f64> = samples.iter().map(|s| s.y).collect();
//!
//! let result = Descent::new()
//!     .split(4000, 500, 500)
//!     .adapter(FullBatch)
//!     .build()?
//!     .fit(&x, &y)?;
//! println!("{}", result);
//! # Result::<(), DescentError>::Ok(())
//! ```
//!
//! ## Reproducibility
//!
//! All randomness — the shuffle and uniform-random initialization —
//! flows from one explicit seed. Identical seeds reproduce identical
//! parameter trajectories:
//!
//! ```rust
//! use descent_rs::prelude::*;
//!
//! let x = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = vec![2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
//!
//! let run = |seed: u64| {
//!     Descent::new()
//!         .epochs(50)
//!         .seed(seed)
//!         .split(4, 1, 1)
//!         .adapter(FullBatch)
//!         .build()
//!         .unwrap()
//!         .fit(&x, &y)
//!         .unwrap()
//! };
//!
//! assert_eq!(run(42).params, run(42).params);
//! ```
//!
//! ## Observability
//!
//! The trainer emits every [`prelude::LossRecord`] through the
//! [`log`] facade at `info` level, and the adapters mark the training
//! and testing phases at `debug` level. Install any `log`-compatible
//! sink to see the classic console trace:
//!
//! ```text
//! Epoch: 0, Train Loss: 36.81, Val Loss: 37.95
//! Epoch: 100, Train Loss: 0.92, Val Loss: 1.04
//! ...
//! x: 1.25, y: 3.51, y_pred: 3.49
//! Loss: 0.0004
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`prelude::DescentError`]. All
//! errors are configuration or data errors surfaced immediately —
//! nothing is retried, and no empty split ever turns into a silent
//! NaN:
//!
//! ```rust
//! use descent_rs::prelude::*;
//!
//! let err = Descent::<f64>::new()
//!     .learning_rate(-0.5)
//!     .adapter(FullBatch)
//!     .build()
//!     .unwrap_err();
//! assert_eq!(err, DescentError::InvalidLearningRate(-0.5));
//!
//! let trained = ModelParams::Linear { w: 2.0, b: 1.0 };
//! let err = Evaluator::evaluate(&trained, &[]).unwrap_err();
//! assert_eq!(err, DescentError::EmptySplit { split: "test" });
//! ```
//!
//! ## Model Persistence
//!
//! With the `serde` feature enabled, [`prelude::ModelParams`] derives
//! `Serialize`/`Deserialize`, so a fitted model round-trips through any
//! serde format as a degree-tagged sequence of `(k, b)` pairs.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Effect |
//! |---------|---------|--------|
//! | `std`   | yes     | File loading, `std::error::Error` for the error type |
//! | `serde` | no      | `Serialize`/`Deserialize` on the model parameter types |
//! | `dev`   | no      | Re-export internal modules for white-box testing |
//!
//! Without `std` the crate is `no_std + alloc`: the core fitting
//! pipeline works unchanged; only the file loader is absent.
//!
//! ## Scope
//!
//! Deliberately out of scope: automatic differentiation, matrix or
//! vectorized linear algebra, regularization, adaptive optimizers
//! (momentum, Adam), mini-batching, and parallel execution. Training is
//! single-threaded and strictly sequential; epoch `n + 1` is defined in
//! terms of epoch `n`'s parameters.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the crate-wide error type, the seeded random source, and
// sample storage with the train/validation/test partition.
mod primitives;

// Layer 2: Algorithms - the numeric core.
//
// Contains the model parameterizations with the forward pass, the mean
// squared error, and the analytic gradient steps for both disciplines.
mod algorithms;

// Layer 3: Evaluation - post-training analysis.
//
// Contains the held-out test-set evaluation: per-sample prediction
// records plus the aggregate loss.
mod evaluation;

// Layer 4: Engine - orchestration and execution control.
//
// Contains hyperparameter validation, the epoch loop with cadenced
// reporting, and the result types a run produces.
mod engine;

// Layer 5: Adapters - update-discipline front ends.
//
// Contains the execution adapters for the two disciplines:
// full-batch (one accumulated update per epoch) and per-sample
// (immediate updates, no normalization).
mod adapters;

// High-level fluent API for gradient-descent fitting.
//
// Provides the `Descent` builder for configuring and running a fit.
mod api;

/// Loading samples from two-column text files (requires `std`).
#[cfg(feature = "std")]
pub mod loader;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use descent_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Adapter::{FullBatch, PerSample},
        AffineTerm, DataSet,
        Degree::{Cubic, Linear, Quadratic, Quartic},
        DescentBuilder as Descent, DescentError, DescentResult, Evaluation, Evaluator,
        InitStrategy::{UniformRandom, Zero},
        LossRecord, ModelParams, Prediction, Sample, SeededRng, SplitSizes, UpdateDiscipline,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
