//! Flat market inputs.

use fg_core::{errors::Error, errors::Result, Rate, Real, Volatility};
use serde::Serialize;

/// Spot, continuously-compounded risk-free rate and lognormal volatility,
/// all constant over the life of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketData {
    spot: Real,
    rate: Rate,
    volatility: Volatility,
}

impl MarketData {
    /// Validate and bundle market inputs.
    ///
    /// `spot` and `volatility` must be positive and `rate` finite.
    pub fn new(spot: Real, rate: Rate, volatility: Volatility) -> Result<Self> {
        if !(spot.is_finite() && spot > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "spot must be positive, got {spot}"
            )));
        }
        if !rate.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "rate must be finite, got {rate}"
            )));
        }
        if !(volatility.is_finite() && volatility > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "volatility must be positive, got {volatility}"
            )));
        }
        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Spot price `S0`.
    pub fn spot(&self) -> Real {
        self.spot
    }

    /// Risk-free rate `r`.
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// Volatility `σ`.
    pub fn volatility(&self) -> Volatility {
        self.volatility
    }
}
