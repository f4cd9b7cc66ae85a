//! Crank-Nicolson forward engine.
//!
//! Solves the Black-Scholes PDE for `V(S, t)` on `[0, S_max] × [0, T]`
//! backward from the payoff `S − K`, then reads the price and Greeks off the
//! inception column at the first grid level at or above the spot.

use fg_core::{errors::Result, Rate, Real, Time};
use fg_instruments::{ForwardContract, Greeks, MarketData, PricingEngine, PricingResults};
use fg_methods::finite_differences::{
    BoundaryProblem, CrankNicolsonSolver, FdGridSpec, FdSolution, GridGreeks,
    DEFAULT_MESH_RATIO_LIMIT,
};

/// Grid settings for [`FdForwardEngine`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FdSettings {
    /// Upper price bound `S_max`.
    pub s_max: Real,
    /// Price intervals `N`.
    pub price_steps: usize,
    /// Time intervals `M`.
    pub time_steps: usize,
    /// Mesh ratio above which results are flagged unreliable.
    pub mesh_ratio_limit: Real,
}

impl Default for FdSettings {
    fn default() -> Self {
        Self {
            s_max: 600.0,
            price_steps: 100_000,
            time_steps: 500,
            mesh_ratio_limit: DEFAULT_MESH_RATIO_LIMIT,
        }
    }
}

impl FdSettings {
    /// Set `S_max`.
    pub fn with_s_max(mut self, s_max: Real) -> Self {
        self.s_max = s_max;
        self
    }

    /// Set the number of price intervals.
    pub fn with_price_steps(mut self, n: usize) -> Self {
        self.price_steps = n;
        self
    }

    /// Set the number of time intervals.
    pub fn with_time_steps(mut self, m: usize) -> Self {
        self.time_steps = m;
        self
    }

    /// Set the stability flag threshold.
    pub fn with_mesh_ratio_limit(mut self, limit: Real) -> Self {
        self.mesh_ratio_limit = limit;
        self
    }
}

/// Terminal and boundary conditions of a long forward.
///
/// The lower boundary is held at zero rather than the exact
/// `−K·e^{−rτ}`; the upper boundary is the exact present value at `S_max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardPdeProblem {
    contract: ForwardContract,
    rate: Rate,
}

impl ForwardPdeProblem {
    /// Problem for `contract` discounted at `rate`.
    pub fn new(contract: ForwardContract, rate: Rate) -> Self {
        Self { contract, rate }
    }
}

impl BoundaryProblem for ForwardPdeProblem {
    fn terminal_value(&self, s: Real) -> Real {
        self.contract.payoff_at(s)
    }

    fn lower_boundary(&self, _tau: Time) -> Real {
        0.0
    }

    fn upper_boundary(&self, s_max: Real, tau: Time) -> Real {
        s_max - self.contract.strike() * (-self.rate * tau).exp()
    }
}

/// Finite-difference pricing engine for forward contracts.
#[derive(Debug, Clone, Copy, Default)]
pub struct FdForwardEngine {
    settings: FdSettings,
}

impl FdForwardEngine {
    /// Create an engine with the given grid settings.
    pub fn new(settings: FdSettings) -> Self {
        Self { settings }
    }

    /// Grid settings.
    pub fn settings(&self) -> &FdSettings {
        &self.settings
    }

    /// Solve the full value grid without reading any Greeks.
    pub fn solve_grid(&self, contract: &ForwardContract, market: &MarketData) -> Result<FdSolution> {
        let s = &self.settings;
        let spec = FdGridSpec::new(s.s_max, s.price_steps, s.time_steps, contract.maturity())?;
        CrankNicolsonSolver::new(spec, market.rate(), market.volatility())?
            .with_mesh_ratio_limit(s.mesh_ratio_limit)
            .solve(&ForwardPdeProblem::new(*contract, market.rate()))
    }
}

impl PricingEngine<ForwardContract> for FdForwardEngine {
    fn name(&self) -> &str {
        "Crank-Nicolson"
    }

    fn calculate(&self, contract: &ForwardContract, market: &MarketData) -> Result<PricingResults> {
        let solution = self.solve_grid(contract, market)?;
        let g = GridGreeks::at_spot(&solution.grid, market.spot())?;

        let mut results = PricingResults::from_greeks(Greeks {
            price: g.price,
            delta: g.delta,
            gamma: g.gamma,
            theta: g.theta,
        })
        .with_result("grid_level", g.level)
        .with_result("grid_row", g.row as Real);
        if let Some(diag) = solution.stability {
            results = results
                .with_result("mesh_ratio", diag.mesh_ratio)
                .with_result("mesh_ratio_limit", diag.limit);
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use fg_core::Error;

    fn contract() -> ForwardContract {
        ForwardContract::new(100.0, 1.0).unwrap()
    }

    fn market(spot: Real) -> MarketData {
        MarketData::new(spot, 0.05, 0.2).unwrap()
    }

    #[test]
    fn defaults_reproduce_reference_grid() {
        let s = FdSettings::default();
        assert_eq!((s.s_max, s.price_steps, s.time_steps), (600.0, 100_000, 500));
        let s = s.with_price_steps(600).with_time_steps(40).with_s_max(300.0);
        assert_eq!((s.s_max, s.price_steps, s.time_steps), (300.0, 600, 40));
    }

    #[test]
    fn problem_boundaries() {
        let p = ForwardPdeProblem::new(contract(), 0.05);
        assert_eq!(p.terminal_value(130.0), 30.0);
        assert_eq!(p.lower_boundary(0.7), 0.0);
        assert_abs_diff_eq!(
            p.upper_boundary(600.0, 1.0),
            600.0 - 100.0 * (-0.05_f64).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn moderate_grid_prices_the_forward() {
        let engine = FdForwardEngine::new(FdSettings::default().with_price_steps(600).with_time_steps(40));
        let r = engine.calculate(&contract(), &market(100.0)).unwrap();
        assert_abs_diff_eq!(r.greeks.price, 4.877_058_169_2, epsilon = 1e-8);
        assert_abs_diff_eq!(r.greeks.delta, 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(r.greeks.gamma, 0.0, epsilon = 1e-10);
        assert_abs_diff_eq!(r.greeks.theta, -4.759_122, epsilon = 1e-5);
        assert_eq!(r.additional_results["grid_row"], 100.0);
        assert!(!r.additional_results.contains_key("mesh_ratio"));
    }

    #[test]
    fn flagged_grid_still_prices() {
        let engine = FdForwardEngine::new(
            FdSettings::default()
                .with_price_steps(600)
                .with_time_steps(40)
                .with_mesh_ratio_limit(10.0),
        );
        let r = engine.calculate(&contract(), &market(100.0)).unwrap();
        // 0.025 · 0.04 · 360000 = 360
        assert_abs_diff_eq!(r.additional_results["mesh_ratio"], 360.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r.greeks.price, 4.877_058_169_2, epsilon = 1e-8);
    }

    #[test]
    fn spot_near_grid_edge_is_rejected() {
        let engine = FdForwardEngine::new(FdSettings::default().with_price_steps(3).with_time_steps(1));
        let err = engine.calculate(&contract(), &market(100.0)).unwrap_err();
        assert!(matches!(err, Error::OutOfRangeQuery { .. }));
    }
}
