//! Terminal payoffs.

use fg_core::Real;
use std::fmt;

/// A payoff as a function of the underlying price at maturity.
pub trait Payoff: fmt::Debug + Send + Sync {
    /// Payoff for terminal price `price`.
    fn value(&self, price: Real) -> Real;

    /// Human-readable name.
    fn name(&self) -> &str;
}

/// Long forward payoff `S_T − K`.
///
/// Linear and unfloored: the holder must buy at `K` whatever the terminal
/// price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardPayoff {
    /// Delivery price `K`.
    pub strike: Real,
}

impl Payoff for ForwardPayoff {
    #[inline]
    fn value(&self, price: Real) -> Real {
        price - self.strike
    }

    fn name(&self) -> &str {
        "Forward"
    }
}

impl fmt::Display for ForwardPayoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (K = {})", self.name(), self.strike)
    }
}
