//! Forward contract on a single non-dividend-paying asset.

use crate::payoff::{ForwardPayoff, Payoff};
use fg_core::{errors::Error, errors::Result, Real, Time};

/// Obligation to buy the underlying at `strike` at time `maturity`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardContract {
    payoff: ForwardPayoff,
    maturity: Time,
}

impl ForwardContract {
    /// Create a forward with a positive delivery price and maturity.
    pub fn new(strike: Real, maturity: Time) -> Result<Self> {
        if !(strike.is_finite() && strike > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "strike must be positive, got {strike}"
            )));
        }
        if !(maturity.is_finite() && maturity > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "maturity must be positive, got {maturity}"
            )));
        }
        Ok(Self {
            payoff: ForwardPayoff { strike },
            maturity,
        })
    }

    /// Delivery price `K`.
    pub fn strike(&self) -> Real {
        self.payoff.strike
    }

    /// Time to maturity `T` in years.
    pub fn maturity(&self) -> Time {
        self.maturity
    }

    /// The terminal payoff.
    pub fn payoff(&self) -> &ForwardPayoff {
        &self.payoff
    }

    /// Payoff at maturity for terminal price `s`.
    pub fn payoff_at(&self, s: Real) -> Real {
        self.payoff.value(s)
    }

    /// The same contract with a different maturity. The Monte Carlo engine
    /// reprices the shortened contract for Theta.
    pub fn with_maturity(&self, maturity: Time) -> Result<Self> {
        Self::new(self.strike(), maturity)
    }
}
