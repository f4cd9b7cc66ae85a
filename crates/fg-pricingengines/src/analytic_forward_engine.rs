//! Closed-form forward engine.
//!
//! Values the forward by compounding the spot to maturity:
//!
//! $$V = S_0 e^{rT} - K,\quad \Delta = e^{rT},\quad \Gamma = 0,\quad \Theta = -K r e^{-rT}$$
//!
//! This is the undiscounted forward value. The grid and simulation engines
//! converge to the present value [`forward_present_value`] instead; the
//! comparison report shows both.

use fg_core::{errors::Result, Rate, Real, Time};
use fg_instruments::{ForwardContract, Greeks, MarketData, PricingEngine, PricingResults};

/// Present value of a long forward, `S0 − K·e^{−rT}`.
pub fn forward_present_value(spot: Real, strike: Real, rate: Rate, maturity: Time) -> Real {
    spot - strike * (-rate * maturity).exp()
}

/// Closed-form forward value and Greeks.
pub fn analytic_forward_greeks(spot: Real, strike: Real, rate: Rate, maturity: Time) -> Greeks {
    let growth = (rate * maturity).exp();
    Greeks {
        price: spot * growth - strike,
        delta: growth,
        gamma: 0.0,
        theta: -strike * rate * (-rate * maturity).exp(),
    }
}

/// Analytic pricing engine for forward contracts.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticForwardEngine;

impl AnalyticForwardEngine {
    /// Create the engine.
    pub fn new() -> Self {
        Self
    }
}

impl PricingEngine<ForwardContract> for AnalyticForwardEngine {
    fn name(&self) -> &str {
        "Analytical"
    }

    fn calculate(&self, contract: &ForwardContract, market: &MarketData) -> Result<PricingResults> {
        let (spot, strike, rate, t) = (
            market.spot(),
            contract.strike(),
            market.rate(),
            contract.maturity(),
        );
        Ok(
            PricingResults::from_greeks(analytic_forward_greeks(spot, strike, rate, t))
                .with_result("present_value", forward_present_value(spot, strike, rate, t)),
        )
    }
}
