//! Error types for forward-greeks.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single `thiserror`-derived [`Error`] enum below. The
//! `ensure!`, `ensure_post!` and `fail!` macros are shorthands for the
//! precondition, postcondition and runtime variants.

use thiserror::Error;

/// The top-level error type used throughout forward-greeks.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error (raised by `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Postcondition violated (raised by `ensure_post!`).
    #[error("postcondition not satisfied: {0}")]
    Postcondition(String),

    /// An economic input (spot, strike, maturity, rate, volatility) is
    /// outside its admissible domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The finite-difference grid is too coarse or degenerate to build.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    /// A Greek was requested at a spot without a grid neighbour on both
    /// sides.
    #[error("spot {spot} outside the differentiable range [{lower}, {upper}]")]
    OutOfRangeQuery {
        /// The requested spot.
        spot: f64,
        /// Lowest admissible spot (one price step above zero).
        lower: f64,
        /// Highest admissible spot (one price step below the grid top).
        upper: f64,
    },

    /// A numerical routine broke down (e.g. a zero pivot).
    #[error("numerical error: {0}")]
    Numerical(String),

    /// Configuration could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),
}

/// Shorthand `Result` type used throughout forward-greeks.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if the condition is false.
///
/// # Example
/// ```
/// use fg_core::{ensure, errors::Error};
/// fn positive(x: f64) -> fg_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Postcondition(...))` if the condition is false.
///
/// # Example
/// ```
/// use fg_core::{ensure_post, errors::Error};
/// fn compute(x: f64) -> fg_core::errors::Result<f64> {
///     let result = x * 2.0;
///     ensure_post!(result.is_finite(), "result must be finite, got {result}");
///     Ok(result)
/// }
/// assert!(compute(1.0).is_ok());
/// assert!(compute(f64::INFINITY).is_err());
/// ```
#[macro_export]
macro_rules! ensure_post {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Postcondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use fg_core::{fail, errors::Error};
/// fn always_err() -> fg_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked_ratio(num: f64, den: f64) -> Result<f64> {
        crate::ensure!(den != 0.0, "denominator must be non-zero");
        let q = num / den;
        crate::ensure_post!(q.is_finite(), "ratio {num}/{den} is not finite");
        Ok(q)
    }

    #[test]
    fn ensure_maps_to_precondition() {
        let err = checked_ratio(1.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            Error::Precondition("denominator must be non-zero".into())
        );
    }

    #[test]
    fn ensure_post_maps_to_postcondition() {
        let err = checked_ratio(f64::MAX, 1e-300).unwrap_err();
        assert!(matches!(err, Error::Postcondition(_)), "got {err:?}");
    }

    #[test]
    fn fail_maps_to_runtime() {
        fn boom() -> Result<()> {
            crate::fail!("solver diverged after {} steps", 3);
        }
        assert_eq!(boom().unwrap_err().to_string(), "solver diverged after 3 steps");
    }

    #[test]
    fn out_of_range_message_names_the_interval() {
        let err = Error::OutOfRangeQuery {
            spot: 650.0,
            lower: 6.0,
            upper: 594.0,
        };
        assert_eq!(
            err.to_string(),
            "spot 650 outside the differentiable range [6, 594]"
        );
    }
}
