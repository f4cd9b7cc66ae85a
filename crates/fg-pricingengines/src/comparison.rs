//! Side-by-side comparison of pricing methods on one contract.

use crate::analytic_forward_engine::forward_present_value;
use fg_core::{errors::Error, errors::Result, Real};
use fg_instruments::{ForwardContract, Greeks, MarketData, PricingEngine};
use serde::Serialize;
use std::fmt;

/// One method's output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    /// Engine label.
    pub method: String,
    /// Price and Greeks.
    pub greeks: Greeks,
    /// Standard error of the price, when the method has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_estimate: Option<Real>,
}

/// Results of several engines on the same contract and market.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodComparison {
    /// The market inputs.
    pub market: MarketData,
    /// Delivery price.
    pub strike: Real,
    /// Time to maturity.
    pub maturity: Real,
    /// `S0 − K·e^{−rT}`.
    pub present_value: Real,
    /// One row per engine, in the order given.
    pub rows: Vec<ComparisonRow>,
}

impl MethodComparison {
    /// Run every engine on `contract` and `market`.
    ///
    /// Stops at the first engine that fails.
    pub fn run(
        contract: &ForwardContract,
        market: &MarketData,
        engines: &[&dyn PricingEngine<ForwardContract>],
    ) -> Result<Self> {
        let rows = engines
            .iter()
            .map(|engine| -> Result<ComparisonRow> {
                let span = tracing::info_span!("engine", method = engine.name());
                let _guard = span.enter();
                let results = engine.calculate(contract, market)?;
                tracing::info!(price = results.greeks.price, "priced");
                Ok(ComparisonRow {
                    method: engine.name().to_string(),
                    greeks: results.greeks,
                    error_estimate: results.error_estimate,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            market: *market,
            strike: contract.strike(),
            maturity: contract.maturity(),
            present_value: forward_present_value(
                market.spot(),
                contract.strike(),
                market.rate(),
                contract.maturity(),
            ),
            rows,
        })
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Runtime(e.to_string()))
    }
}

impl fmt::Display for MethodComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Forward K = {}, T = {}, S0 = {}, r = {}, sigma = {}",
            self.strike,
            self.maturity,
            self.market.spot(),
            self.market.rate(),
            self.market.volatility()
        )?;
        writeln!(f, "Present value S0 - K*exp(-rT) = {:.6}", self.present_value)?;
        writeln!(
            f,
            "{:<16} {:>14} {:>14} {:>14} {:>14} {:>12}",
            "Method", "Price", "Delta", "Gamma", "Theta", "Std. error"
        )?;
        writeln!(f, "{}", "-".repeat(89))?;
        for row in &self.rows {
            let g = &row.greeks;
            let err = row
                .error_estimate
                .map_or_else(|| "-".to_string(), |e| format!("{e:.6}"));
            writeln!(
                f,
                "{:<16} {:>14.6} {:>14.8} {:>14.3e} {:>14.6} {:>12}",
                row.method, g.price, g.delta, g.gamma, g.theta, err
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnalyticForwardEngine, FdForwardEngine, FdSettings, McForwardEngine, McSettings};

    fn run() -> MethodComparison {
        let contract = ForwardContract::new(100.0, 1.0).unwrap();
        let market = MarketData::new(100.0, 0.05, 0.2).unwrap();
        let fd = FdForwardEngine::new(FdSettings::default().with_price_steps(300).with_time_steps(20));
        let mc = McForwardEngine::new(McSettings::default().with_paths(2_000));
        MethodComparison::run(&contract, &market, &[&fd, &mc, &AnalyticForwardEngine]).unwrap()
    }

    #[test]
    fn rows_follow_engine_order() {
        let c = run();
        let methods: Vec<&str> = c.rows.iter().map(|r| r.method.as_str()).collect();
        assert_eq!(methods, ["Crank-Nicolson", "Monte Carlo", "Analytical"]);
        assert!(c.rows[0].error_estimate.is_none());
        assert!(c.rows[1].error_estimate.is_some());
        assert!((c.present_value - 4.877_057_55).abs() < 1e-8);
    }

    #[test]
    fn table_has_one_line_per_method() {
        let text = run().to_string();
        assert_eq!(text.lines().count(), 4 + 3);
        assert!(text.lines().any(|l| l.starts_with("Crank-Nicolson")));
    }

    #[test]
    fn json_round_trips_through_serde_value() {
        let json = run().to_json().unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["rows"].as_array().unwrap().len(), 3);
        assert_eq!(v["rows"][2]["method"], "Analytical");
        assert_eq!(v["market"]["spot"], 100.0);
        assert!(v["rows"][2].get("error_estimate").is_none());
    }

    #[test]
    fn failing_engine_aborts_the_run() {
        let contract = ForwardContract::new(100.0, 1.0).unwrap();
        let market = MarketData::new(100.0, 0.05, 0.2).unwrap();
        let fd = FdForwardEngine::new(FdSettings::default().with_price_steps(3).with_time_steps(1));
        let err = MethodComparison::run(&contract, &market, &[&AnalyticForwardEngine, &fd]).unwrap_err();
        assert!(matches!(err, Error::OutOfRangeQuery { .. }));
    }
}
