//! Risk-neutral Black-Scholes process.
//!
//! ```text
//! dS = r·S dt + σ·S dW
//! ```
//!
//! Geometric Brownian motion with the risk-free rate as drift. The log-price
//! is Gaussian, so a whole horizon can be sampled in one exact step:
//! `S(t+Δt) = S(t)·exp((r − σ²/2)Δt + σ√Δt·Z)`.

use crate::stochastic_process::StochasticProcess1D;
use fg_core::{ensure, errors::Result, Rate, Real, Time, Volatility};

/// Geometric Brownian motion under the risk-neutral measure, with constant
/// rate and volatility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholesProcess {
    spot: Real,
    rate: Rate,
    volatility: Volatility,
}

impl BlackScholesProcess {
    /// Create a new process.
    ///
    /// # Arguments
    /// * `spot`: initial price (must be > 0)
    /// * `rate`: continuously-compounded risk-free rate (must be finite)
    /// * `volatility`: lognormal volatility (must be ≥ 0)
    pub fn new(spot: Real, rate: Rate, volatility: Volatility) -> Result<Self> {
        ensure!(spot.is_finite() && spot > 0.0, "spot must be positive, got {spot}");
        ensure!(rate.is_finite(), "rate must be finite, got {rate}");
        ensure!(
            volatility.is_finite() && volatility >= 0.0,
            "volatility must be non-negative, got {volatility}"
        );
        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// The initial price.
    pub fn spot(&self) -> Real {
        self.spot
    }

    /// The risk-free rate.
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// The volatility.
    pub fn volatility(&self) -> Volatility {
        self.volatility
    }

    /// The same process started from a different spot, for bump-and-revalue
    /// sensitivities.
    pub fn with_spot(&self, spot: Real) -> Result<Self> {
        Self::new(spot, self.rate, self.volatility)
    }

    /// Discount factor `e^{−r·t}`.
    pub fn discount(&self, t: Time) -> Real {
        (-self.rate * t).exp()
    }

    /// Price at `maturity` for the standard-normal draw `z`, sampled exactly
    /// from the initial spot.
    #[inline]
    pub fn terminal_value(&self, maturity: Time, z: Real) -> Real {
        self.evolve_1d(0.0, self.spot, maturity, z)
    }
}

impl StochasticProcess1D for BlackScholesProcess {
    fn x0(&self) -> Real {
        self.spot
    }

    /// Exact log-normal step.
    fn evolve_1d(&self, _t: Time, x: Real, dt: Time, dw: Real) -> Real {
        let sigma = self.volatility;
        let log_drift = (self.rate - 0.5 * sigma * sigma) * dt;
        x * (log_drift + sigma * dt.sqrt() * dw).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn process() -> BlackScholesProcess {
        BlackScholesProcess::new(100.0, 0.05, 0.2).unwrap()
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(BlackScholesProcess::new(0.0, 0.05, 0.2).is_err());
        assert!(BlackScholesProcess::new(100.0, f64::NAN, 0.2).is_err());
        assert!(BlackScholesProcess::new(100.0, 0.05, -0.1).is_err());
        assert!(BlackScholesProcess::new(100.0, -0.01, 0.0).is_ok());
    }

    #[test]
    fn median_terminal_value() {
        // z = 0 gives the median: S·exp((r − σ²/2)T).
        let p = process();
        let expected = 100.0 * ((0.05 - 0.02) * 1.0_f64).exp();
        assert_abs_diff_eq!(p.terminal_value(1.0, 0.0), expected, epsilon = 1e-12);
    }

    #[test]
    fn zero_vol_grows_at_the_rate() {
        let p = BlackScholesProcess::new(100.0, 0.05, 0.0).unwrap();
        assert_abs_diff_eq!(p.terminal_value(2.0, 3.0), 100.0 * 0.1_f64.exp(), epsilon = 1e-12);
    }

    #[test]
    fn bumped_spot_scales_terminal_values() {
        let p = process();
        let up = p.with_spot(101.0).unwrap();
        for z in [-2.0, -0.5, 0.0, 1.3] {
            let ratio = up.terminal_value(1.0, z) / p.terminal_value(1.0, z);
            assert_abs_diff_eq!(ratio, 1.01, epsilon = 1e-12);
        }
    }

    #[test]
    fn discount_factor() {
        assert_abs_diff_eq!(process().discount(1.0), (-0.05_f64).exp(), epsilon = 1e-15);
    }
}
