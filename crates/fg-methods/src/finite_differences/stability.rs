//! Advisory stability check for the Crank-Nicolson grid.

use super::grid::FdGridSpec;
use fg_core::{Real, Volatility};
use std::fmt;

/// Mesh ratios above this are flagged by default.
///
/// Three orders of magnitude above 1. Grids that resolve the price axis much
/// finer than the time axis trip it, the default `N = 100 000`, `M = 500`
/// grid (ratio `8e5`) included.
pub const DEFAULT_MESH_RATIO_LIMIT: Real = 1.0e3;

/// Mesh ratio `Δt·σ²·N²` of a grid.
///
/// Crank-Nicolson is unconditionally stable, but with a large ratio the
/// scheme damps high-frequency error poorly and the terminal kink (or any
/// rounding noise) leaks into the Greeks.
pub fn mesh_ratio(spec: &FdGridSpec, volatility: Volatility) -> Real {
    let n = spec.price_steps() as Real;
    spec.dt() * volatility * volatility * n * n
}

/// Non-fatal flag that a grid's mesh ratio exceeded the configured limit.
///
/// The solve still runs and its result is returned; this only marks it as
/// unreliable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityDiagnostic {
    /// The observed `Δt·σ²·N²`.
    pub mesh_ratio: Real,
    /// The limit it was compared against.
    pub limit: Real,
}

impl StabilityDiagnostic {
    /// `Some` when the mesh ratio of `spec` exceeds `limit`. Logs at `warn`
    /// level when it trips.
    pub fn check(spec: &FdGridSpec, volatility: Volatility, limit: Real) -> Option<Self> {
        let ratio = mesh_ratio(spec, volatility);
        if ratio > limit {
            tracing::warn!(
                mesh_ratio = ratio,
                limit,
                price_steps = spec.price_steps(),
                time_steps = spec.time_steps(),
                "grid resolution inadequate, results may be unreliable"
            );
            Some(Self {
                mesh_ratio: ratio,
                limit,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for StabilityDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mesh ratio {:.3e} exceeds limit {:.3e}",
            self.mesh_ratio, self.limit
        )
    }
}
