//! Pricing results and the engine trait.

use crate::market::MarketData;
use fg_core::{errors::Result, Real};
use serde::Serialize;
use std::collections::BTreeMap;

/// Price and first-/second-order sensitivities at inception.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Greeks {
    /// Value at inception.
    pub price: Real,
    /// `∂V/∂S`.
    pub delta: Real,
    /// `∂²V/∂S²`.
    pub gamma: Real,
    /// `∂V/∂t`, per year of calendar time.
    pub theta: Real,
}

/// Output of a pricing engine: the Greeks plus engine-specific extras.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PricingResults {
    /// Price and Greeks.
    pub greeks: Greeks,
    /// Standard error of the price (Monte Carlo only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_estimate: Option<Real>,
    /// Additional named results, e.g. a grid level or a confidence bound.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub additional_results: BTreeMap<String, Real>,
}

impl PricingResults {
    /// Results carrying only Greeks.
    pub fn from_greeks(greeks: Greeks) -> Self {
        Self {
            greeks,
            ..Self::default()
        }
    }

    /// Attach a standard error.
    pub fn with_error_estimate(mut self, error: Real) -> Self {
        self.error_estimate = Some(error);
        self
    }

    /// Add a named result.
    pub fn with_result(mut self, key: impl Into<String>, value: Real) -> Self {
        self.additional_results.insert(key.into(), value);
        self
    }
}

/// Prices instruments of type `I` against flat market data.
pub trait PricingEngine<I>: std::fmt::Debug + Send + Sync {
    /// Short label for reports.
    fn name(&self) -> &str;

    /// Price `instrument` and its Greeks.
    fn calculate(&self, instrument: &I, market: &MarketData) -> Result<PricingResults>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pricing_results_builder() {
        let r = PricingResults::from_greeks(Greeks {
            price: 4.88,
            delta: 1.0,
            gamma: 0.0,
            theta: -4.76,
        })
        .with_error_estimate(0.07)
        .with_result("ci_lower", 4.74);
        assert_eq!(r.greeks.price, 4.88);
        assert_eq!(r.error_estimate, Some(0.07));
        assert_eq!(r.additional_results["ci_lower"], 4.74);
    }

    #[test]
    fn serializes_without_empty_extras() {
        let r = PricingResults::from_greeks(Greeks::default());
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(
            json,
            r#"{"greeks":{"price":0.0,"delta":0.0,"gamma":0.0,"theta":0.0}}"#
        );
    }
}
