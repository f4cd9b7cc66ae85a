//! Probability distributions.
//!
//! Only the standard normal is needed here: its inverse CDF drives the
//! Gaussian RNG and its quantiles size Monte Carlo confidence intervals.

pub mod normal;

pub use normal::{normal_cdf, normal_cdf_inverse, two_sided_quantile};
