//! Layer 3: Evaluation
//!
//! # Purpose
//!
//! This layer contains the post-training analysis: running the fitted
//! model over the held-out test split and reporting per-sample
//! predictions with the aggregate loss.
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
//! Layer 3: Evaluation ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Test-set evaluation.
pub mod evaluate;
