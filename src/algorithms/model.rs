//! Model parameterization and the forward (predict) computation.
//!
//! ## Purpose
//!
//! This module defines the two model shapes the fitter supports and the
//! pure forward pass that maps an input to a prediction.
//!
//! ## Design notes
//!
//! * **Two Shapes**: Degree 1 is a single affine map `w*x + b`. Higher
//!   degrees are a sum of independent affine terms, one per power of x,
//!   each with its own additive bias.
//! * **Per-Power Bias**: The polynomial shape is intentionally *not* a
//!   conventional polynomial with a single intercept. Every power `i`
//!   carries its own `(k_i, b_i)` pair and the prediction is
//!   `Σ (k_i * x^i + b_i)`. The gradient formulas in
//!   [`crate::algorithms::gradient`] depend on this exact layout.
//! * **Pure Forward Pass**: `predict` has no side effects and is
//!   deterministic for identical inputs.
//!
//! ## Key concepts
//!
//! * **Degree**: Polynomial order, 1 through 4; degree 1 reduces to
//!   plain linear regression.
//! * **Initialization**: All-zero or uniform-random in [0, 1), selected
//!   by configuration and driven by the injected random source.
//!
//! ## Non-goals
//!
//! * No activation functions, no multi-layer composition.
//! * No closed-form (least-squares) fitting; parameters only change
//!   through gradient updates.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::rng::SeededRng;

// ============================================================================
// Degree
// ============================================================================

/// Polynomial order of the fitted model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Degree {
    /// Degree 1: plain linear regression `y = w*x + b` (default).
    #[default]
    Linear,

    /// Degree 2: quadratic term sum.
    Quadratic,

    /// Degree 3: cubic term sum.
    Cubic,

    /// Degree 4: quartic term sum.
    Quartic,
}

impl Degree {
    /// Get the numeric degree value.
    #[inline]
    pub const fn value(&self) -> usize {
        match self {
            Degree::Linear => 1,
            Degree::Quadratic => 2,
            Degree::Cubic => 3,
            Degree::Quartic => 4,
        }
    }

    /// Number of `(k, b)` pairs in the per-power parameterization.
    #[inline]
    pub const fn term_count(&self) -> usize {
        self.value() + 1
    }
}

// ============================================================================
// Initialization Strategy
// ============================================================================

/// Policy for choosing initial parameter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitStrategy {
    /// Draw every parameter uniformly from [0, 1) (default).
    #[default]
    UniformRandom,

    /// Start every parameter at zero.
    Zero,
}

// ============================================================================
// Model Parameters
// ============================================================================

/// One per-power parameter pair of the polynomial shape.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffineTerm<T> {
    /// Coefficient multiplying `x^i`.
    pub k: T,
    /// Additive bias owned by this power.
    pub b: T,
}

/// The full parameter set of a fitted (or in-training) model.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModelParams<T> {
    /// Degree-1 shape: a single affine map.
    Linear {
        /// Slope.
        w: T,
        /// Intercept.
        b: T,
    },

    /// Degree-p shape: `p + 1` independent affine terms, one per power.
    Polynomial {
        /// Terms ordered by power, index 0 first.
        terms: Vec<AffineTerm<T>>,
    },
}

impl<T: Float> ModelParams<T> {
    /// Create parameters for `degree` using the given init strategy.
    ///
    /// Degree 1 produces the [`ModelParams::Linear`] shape; higher
    /// degrees produce [`ModelParams::Polynomial`] with `degree + 1`
    /// terms. Random draws consume the injected generator in parameter
    /// order, `k` before `b` within each pair.
    pub fn init(degree: Degree, strategy: InitStrategy, rng: &mut SeededRng) -> Self {
        let draw = |rng: &mut SeededRng| match strategy {
            InitStrategy::Zero => T::zero(),
            InitStrategy::UniformRandom => rng.next_float(),
        };

        match degree {
            Degree::Linear => {
                let w = draw(rng);
                let b = draw(rng);
                ModelParams::Linear { w, b }
            }
            _ => {
                let terms = (0..degree.term_count())
                    .map(|_| {
                        let k = draw(rng);
                        let b = draw(rng);
                        AffineTerm { k, b }
                    })
                    .collect();
                ModelParams::Polynomial { terms }
            }
        }
    }

    /// The degree value of this parameter set.
    pub fn degree_value(&self) -> usize {
        match self {
            ModelParams::Linear { .. } => 1,
            ModelParams::Polynomial { terms } => terms.len().saturating_sub(1),
        }
    }

    /// Forward pass: predict the response for one input.
    ///
    /// * Linear: `w*x + b`.
    /// * Polynomial: `Σ_{i=0..p} (k_i * x^i + b_i)`.
    pub fn predict(&self, x: T) -> T {
        match self {
            ModelParams::Linear { w, b } => *w * x + *b,
            ModelParams::Polynomial { terms } => {
                let mut y = T::zero();
                let mut power = T::one();
                for term in terms {
                    y = y + term.k * power + term.b;
                    power = power * x;
                }
                y
            }
        }
    }
}

impl<T: Float + fmt::Display> fmt::Display for ModelParams<T> {
    /// Render the fitted function in human-readable form.
    ///
    /// The linear shape prints the closed equation `y = <w>x + <b>`;
    /// the polynomial shape prints one `k_i*x^i + b_i` term per power.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelParams::Linear { w, b } => write!(f, "y = {}x + {}", w, b),
            ModelParams::Polynomial { terms } => {
                write!(f, "y =")?;
                for (i, term) in terms.iter().enumerate() {
                    if i > 0 {
                        write!(f, " +")?;
                    }
                    write!(f, " {}*x^{} + {}", term.k, i, term.b)?;
                }
                Ok(())
            }
        }
    }
}
