//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental building blocks shared by every
//! other layer:
//! - The crate-wide error type
//! - The seeded random source
//! - Sample storage and the train/validation/test partition
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
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Crate-wide error type.
pub mod errors;

/// Seeded pseudo-random numbers.
pub mod rng;

/// Sample storage, shuffling, and partitioning.
pub mod dataset;
