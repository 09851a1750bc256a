//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer contains the execution front ends, one per update
//! discipline:
//! - Full-batch: one accumulated, normalized update per epoch
//! - Per-sample: one immediate, unnormalized update per training sample
//!
//! Both run the same pipeline — validate, shuffle, partition, train,
//! evaluate — and differ only in how the gradient is applied.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Full-batch gradient descent.
pub mod full_batch;

/// Per-sample (stochastic) gradient descent.
pub mod per_sample;
