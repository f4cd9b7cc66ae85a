//! Backward Crank-Nicolson solve on a uniform price grid.

use super::crank_nicolson::CrankNicolsonCoefficients;
use super::grid::{FdGridSpec, ValueGrid};
use super::stability::{StabilityDiagnostic, DEFAULT_MESH_RATIO_LIMIT};
use fg_core::{errors::Error, errors::Result, Rate, Real, Time, Volatility};

/// Terminal and boundary data of a backward pricing problem.
///
/// `tau` is the remaining life `T − t` at the time slice being filled.
pub trait BoundaryProblem {
    /// Payoff at maturity for price level `s`.
    fn terminal_value(&self, s: Real) -> Real;

    /// Value assigned at `S = 0`.
    fn lower_boundary(&self, tau: Time) -> Real;

    /// Value assigned at `S = s_max`.
    fn upper_boundary(&self, s_max: Real, tau: Time) -> Real;
}

/// A solved value grid together with its stability flag.
#[derive(Debug, Clone)]
pub struct FdSolution {
    /// Values on every price level and time index.
    pub grid: ValueGrid,
    /// Set when the mesh ratio exceeded the solver's limit.
    pub stability: Option<StabilityDiagnostic>,
}

/// Crank-Nicolson solver for the Black-Scholes PDE with constant rate and
/// volatility.
#[derive(Debug, Clone, Copy)]
pub struct CrankNicolsonSolver {
    spec: FdGridSpec,
    rate: Rate,
    volatility: Volatility,
    mesh_ratio_limit: Real,
}

impl CrankNicolsonSolver {
    /// Create a solver over `spec`.
    ///
    /// `rate` must be finite and `volatility` positive; both are reported as
    /// [`Error::InvalidArgument`].
    pub fn new(spec: FdGridSpec, rate: Rate, volatility: Volatility) -> Result<Self> {
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
            spec,
            rate,
            volatility,
            mesh_ratio_limit: DEFAULT_MESH_RATIO_LIMIT,
        })
    }

    /// Override the mesh ratio above which a [`StabilityDiagnostic`] is
    /// raised.
    pub fn with_mesh_ratio_limit(mut self, limit: Real) -> Self {
        self.mesh_ratio_limit = limit;
        self
    }

    /// Grid dimensions.
    pub fn spec(&self) -> &FdGridSpec {
        &self.spec
    }

    /// Fill the value grid backward from maturity.
    ///
    /// Column `M` takes the terminal payoff. Each earlier column solves the
    /// implicit system on the interior levels against the explicit half of
    /// the column after it, then assigns both boundary rows.
    pub fn solve<P: BoundaryProblem + ?Sized>(&self, problem: &P) -> Result<FdSolution> {
        let spec = self.spec;
        let n = spec.price_steps();
        let m = spec.time_steps();
        let dt = spec.dt();
        let s_max = spec.s_max();

        tracing::debug!(
            price_steps = n,
            time_steps = m,
            ds = spec.ds(),
            dt,
            "starting Crank-Nicolson solve"
        );

        let stability = StabilityDiagnostic::check(&spec, self.volatility, self.mesh_ratio_limit);

        let coefficients = CrankNicolsonCoefficients::new(n, dt, self.rate, self.volatility);
        let operator = coefficients.implicit_operator()?;

        let mut grid = ValueGrid::zeros(spec);
        let levels = grid.price_axis().levels().to_vec();
        let values = grid.values_mut();
        for (v, &s) in values.column_mut(m).iter_mut().zip(&levels) {
            *v = problem.terminal_value(s);
        }

        let mut rhs = vec![0.0; n - 1];
        let mut interior = vec![0.0; n - 1];
        let mut scratch = vec![0.0; n - 1];
        for j in (0..m).rev() {
            let tau = spec.time_to_maturity(j);
            let (current, next) = values.column_pair_mut(j, j + 1);
            coefficients.explicit_rhs(next, &mut rhs);
            operator.solve_into(&rhs, &mut interior, &mut scratch)?;
            current[1..n].copy_from_slice(&interior);
            current[0] = problem.lower_boundary(tau);
            current[n] = problem.upper_boundary(s_max, tau);
        }

        if let Some(i) = values.column(0).iter().position(|v| !v.is_finite()) {
            return Err(Error::Numerical(format!(
                "non-finite value at price level {i} of the inception column"
            )));
        }

        Ok(FdSolution { grid, stability })
    }
}
