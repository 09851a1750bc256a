//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer contains the orchestration and control machinery:
//! - Fail-fast validation of configuration and inputs
//! - The epoch loop with cadenced loss reporting
//! - The record and result types a run produces
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Hyperparameter and input validation.
pub mod validator;

/// The epoch loop.
pub mod trainer;

/// Loss records and the fit result bundle.
pub mod output;
