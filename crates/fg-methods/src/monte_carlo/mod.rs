//! Monte Carlo simulation of terminal prices.
//!
//! Contracts priced here depend only on the price at maturity, so each
//! sample is a single exact step of the process from inception to the
//! horizon.
//!
//! # Overview
//!
//! * [`NormalDraws`]: one fixed set of standard-normal deviates, optionally
//!   paired antithetically, shared by every scenario of a sensitivity run
//! * [`TerminalPricer`]: maps a terminal price to a discounted payoff
//! * [`EuropeanPathPricer`]: `payoff(S_T) · discount`
//! * [`MonteCarloModel`]: runs a process over a set of draws and gathers
//!   [`Statistics`]

use fg_core::{ensure, errors::Result, DiscountFactor, Real, Time};
use fg_math::{InverseCumulativeNormalRng, Statistics};
use fg_processes::StochasticProcess1D;

// ─── Normal draws ─────────────────────────────────────────────────────────────

/// A reusable set of standard-normal deviates.
///
/// Bump-and-revalue Greeks need every scenario to see the same randomness,
/// otherwise the sampling noise swamps the finite difference. Draw once,
/// then hand the same `NormalDraws` to each simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalDraws {
    base: Vec<Real>,
    antithetic: bool,
}

impl NormalDraws {
    /// Draw deviates for `paths` samples from a Mersenne Twister seeded with
    /// `seed`.
    ///
    /// With `antithetic` set, `⌈paths/2⌉` deviates are drawn and each is used
    /// together with its negation.
    pub fn generate(paths: usize, seed: u64, antithetic: bool) -> Result<Self> {
        ensure!(paths > 0, "need at least one path");
        let count = if antithetic { paths.div_ceil(2) } else { paths };
        let mut rng = InverseCumulativeNormalRng::new(seed);
        Ok(Self {
            base: rng.next_sequence(count),
            antithetic,
        })
    }

    /// Wrap existing deviates.
    pub fn from_vec(base: Vec<Real>, antithetic: bool) -> Self {
        Self { base, antithetic }
    }

    /// The independently drawn deviates.
    pub fn base(&self) -> &[Real] {
        &self.base
    }

    /// Whether each deviate is paired with its negation.
    pub fn is_antithetic(&self) -> bool {
        self.antithetic
    }

    /// Number of simulated terminal prices.
    pub fn paths(&self) -> usize {
        if self.antithetic {
            2 * self.base.len()
        } else {
            self.base.len()
        }
    }
}

// ─── Pricers ──────────────────────────────────────────────────────────────────

/// Discounted payoff of a terminal price.
pub trait TerminalPricer {
    /// Discounted value for a simulated terminal price `s_t`.
    fn value(&self, s_t: Real) -> Real;
}

/// European payoff evaluated at maturity and discounted to inception.
pub struct EuropeanPathPricer<F> {
    payoff: F,
    discount: DiscountFactor,
}

impl<F: Fn(Real) -> Real> EuropeanPathPricer<F> {
    /// Pricer for `payoff` with discount factor `discount`.
    pub fn new(payoff: F, discount: DiscountFactor) -> Self {
        Self { payoff, discount }
    }
}

impl<F: Fn(Real) -> Real> TerminalPricer for EuropeanPathPricer<F> {
    fn value(&self, s_t: Real) -> Real {
        (self.payoff)(s_t) * self.discount
    }
}

// ─── Model ────────────────────────────────────────────────────────────────────

/// Simulates a process to a fixed horizon and collects pricer values.
pub struct MonteCarloModel<'a> {
    process: &'a dyn StochasticProcess1D,
    horizon: Time,
}

impl<'a> MonteCarloModel<'a> {
    /// Model for `process` up to `horizon`.
    pub fn new(process: &'a dyn StochasticProcess1D, horizon: Time) -> Self {
        Self { process, horizon }
    }

    /// Terminal price for one standard-normal deviate.
    #[inline]
    pub fn terminal(&self, z: Real) -> Real {
        self.process
            .evolve_1d(0.0, self.process.x0(), self.horizon, z)
    }

    /// Price every draw.
    ///
    /// Antithetic pairs enter the statistics as one averaged sample, so the
    /// error estimate reflects the pair's reduced variance.
    pub fn simulate(&self, draws: &NormalDraws, pricer: &dyn TerminalPricer) -> Statistics {
        let mut stats = Statistics::new();
        if draws.is_antithetic() {
            stats.extend(draws.base().iter().map(|&z| {
                0.5 * (pricer.value(self.terminal(z)) + pricer.value(self.terminal(-z)))
            }));
        } else {
            stats.extend(draws.base().iter().map(|&z| pricer.value(self.terminal(z))));
        }
        stats
    }
}
