//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer implements the numeric core of the fitter:
//! - The model parameterizations and the forward pass
//! - The mean-squared-error loss
//! - The analytic gradient steps for both update disciplines
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Model shapes, initialization, and the forward pass.
pub mod model;

/// Mean squared error.
pub mod loss;

/// Gradient computation and parameter updates.
pub mod gradient;
