//! Seeded pseudo-random numbers for shuffling and parameter init.
//!
//! ## Purpose
//!
//! This module provides a minimal deterministic random source used for
//! the dataset shuffle and for uniform-random parameter initialization.
//!
//! ## Design notes
//!
//! * **Injectable**: The generator is constructed from an explicit seed
//!   supplied through configuration; nothing is seeded from the clock,
//!   so identical seeds reproduce identical training runs.
//! * **no_std-friendly**: An LCG needs no OS entropy and no external
//!   crate.
//!
//! ## Invariants
//!
//! * The same seed yields the same stream of values on every platform.
//!
//! ## Non-goals
//!
//! * Cryptographic quality. The stream only has to be uniform enough to
//!   permute a dataset and draw initial parameters.

// External dependencies
use num_traits::Float;

/// Minimal seeded PRNG.
///
/// Uses an LCG (Linear Congruential Generator) with constants from PCG/MQL.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a generator from an explicit seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance the state and return the high 32 bits.
    pub fn next_u32(&mut self) -> u32 {
        // LCG constants for 64-bit state
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    /// Draw a float uniformly from [0, 1).
    pub fn next_float<T: Float>(&mut self) -> T {
        let numerator = T::from(self.next_u32()).unwrap();
        let denominator = T::from(1u64 << 32).unwrap();
        numerator / denominator
    }

    /// Shuffle a slice in place with a Fisher-Yates pass.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        let n = items.len();
        for i in (1..n).rev() {
            let j = (self.next_u32() as usize) % (i + 1);
            items.swap(i, j);
        }
    }
}
