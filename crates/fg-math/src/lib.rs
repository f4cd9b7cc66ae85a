//! # fg-math
//!
//! Mathematical utilities: a dense matrix newtype (over nalgebra), the
//! standard normal distribution (with `statrs`), Mersenne-Twister random
//! numbers, and a statistics accumulator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Probability distributions.
pub mod distributions;

/// Dense column-major matrix.
pub mod matrix;

/// Random number generators.
pub mod random_numbers;

/// Statistics accumulators.
pub mod statistics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use distributions::{normal_cdf, normal_cdf_inverse, two_sided_quantile};
pub use matrix::Matrix;
pub use random_numbers::{InverseCumulativeNormalRng, MersenneTwisterUniformRng};
pub use statistics::Statistics;
