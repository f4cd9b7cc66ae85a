//! Finite-difference grid: dimensions, the uniform price axis, and the
//! `(N+1) × (M+1)` value grid produced by the backward solver.

use fg_core::{errors::Error, errors::Result, Real, Time};
use fg_math::Matrix;

// ─── Grid specification ───────────────────────────────────────────────────────

/// Dimensions of a price × time grid.
///
/// `price_steps` (`N`) intervals split `[0, s_max]`; `time_steps` (`M`)
/// intervals split `[0, maturity]`. Time index `j = 0` is inception and
/// `j = M` is maturity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FdGridSpec {
    s_max: Real,
    price_steps: usize,
    time_steps: usize,
    maturity: Time,
}

impl FdGridSpec {
    /// Smallest number of price steps for which an interior level has a
    /// neighbour on each side away from both boundaries.
    pub const MIN_PRICE_STEPS: usize = 3;

    /// Smallest number of time steps.
    pub const MIN_TIME_STEPS: usize = 1;

    /// Validate and build a grid specification.
    ///
    /// Fails with [`Error::InvalidGrid`] for `N < 3`, `M < 1` or
    /// `s_max ≤ 0`, and with [`Error::InvalidArgument`] for a non-positive
    /// maturity. Nothing is allocated here.
    pub fn new(s_max: Real, price_steps: usize, time_steps: usize, maturity: Time) -> Result<Self> {
        if price_steps < Self::MIN_PRICE_STEPS {
            return Err(Error::InvalidGrid(format!(
                "need at least {} price steps, got {price_steps}",
                Self::MIN_PRICE_STEPS
            )));
        }
        if time_steps < Self::MIN_TIME_STEPS {
            return Err(Error::InvalidGrid(format!(
                "need at least {} time step, got {time_steps}",
                Self::MIN_TIME_STEPS
            )));
        }
        if !(s_max.is_finite() && s_max > 0.0) {
            return Err(Error::InvalidGrid(format!(
                "upper price bound must be positive, got {s_max}"
            )));
        }
        if !(maturity.is_finite() && maturity > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "maturity must be positive, got {maturity}"
            )));
        }
        Ok(Self {
            s_max,
            price_steps,
            time_steps,
            maturity,
        })
    }

    /// Upper price bound `S_max`.
    pub fn s_max(&self) -> Real {
        self.s_max
    }

    /// Number of price intervals `N`.
    pub fn price_steps(&self) -> usize {
        self.price_steps
    }

    /// Number of time intervals `M`.
    pub fn time_steps(&self) -> usize {
        self.time_steps
    }

    /// Maturity `T`.
    pub fn maturity(&self) -> Time {
        self.maturity
    }

    /// Price spacing `ΔS = S_max / N`.
    pub fn ds(&self) -> Real {
        self.s_max / self.price_steps as Real
    }

    /// Time spacing `Δt = T / M`.
    pub fn dt(&self) -> Time {
        self.maturity / self.time_steps as Real
    }

    /// Remaining life `T − j·Δt` at time index `j`.
    pub fn time_to_maturity(&self, j: usize) -> Time {
        self.maturity - j as Real * self.dt()
    }

    /// The `N+1` price levels.
    pub fn price_axis(&self) -> PriceAxis {
        PriceAxis::new(self.s_max, self.price_steps)
    }
}

// ─── Price axis ───────────────────────────────────────────────────────────────

/// `N+1` evenly spaced price levels on `[0, S_max]`.
///
/// The top level is pinned to `S_max` exactly rather than `N·ΔS`.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceAxis {
    levels: Vec<Real>,
    ds: Real,
}

impl PriceAxis {
    fn new(s_max: Real, steps: usize) -> Self {
        let ds = s_max / steps as Real;
        let mut levels: Vec<Real> = (0..=steps).map(|i| i as Real * ds).collect();
        levels[steps] = s_max;
        Self { levels, ds }
    }

    /// Price spacing `ΔS`.
    pub fn ds(&self) -> Real {
        self.ds
    }

    /// Number of intervals `N`.
    pub fn steps(&self) -> usize {
        self.levels.len() - 1
    }

    /// All levels, ascending.
    pub fn levels(&self) -> &[Real] {
        &self.levels
    }

    /// Level `i`.
    pub fn level(&self, i: usize) -> Real {
        self.levels[i]
    }

    /// Upper bound `S_max`.
    pub fn s_max(&self) -> Real {
        self.levels[self.steps()]
    }

    /// Insertion point of `spot`: the first index whose level is `≥ spot`,
    /// found by binary search. Returns `N+1` when `spot` exceeds `S_max`.
    pub fn locate(&self, spot: Real) -> usize {
        self.levels.partition_point(|&s| s < spot)
    }

    /// Index of the level nearest to `spot`, `round(spot / ΔS)` clamped to
    /// the axis. Equivalent to [`locate`](Self::locate) except on the lower
    /// half of each cell.
    pub fn nearest_index(&self, spot: Real) -> usize {
        let i = (spot / self.ds).round();
        if i <= 0.0 {
            0
        } else {
            (i as usize).min(self.steps())
        }
    }

    /// Row at which central differences around `spot` are defined.
    ///
    /// `spot` must lie between levels `1` and `N−1` inclusive; the returned
    /// row then has a neighbour on each side. Anything closer to a boundary
    /// (or outside the grid, or NaN) is an [`Error::OutOfRangeQuery`].
    ///
    /// Both bounds are read off the stored levels, so a spot equal to any
    /// interior level is always accepted.
    pub fn differentiable_row(&self, spot: Real) -> Result<usize> {
        let lower = self.levels[1];
        let upper = self.levels[self.steps() - 1];
        let out_of_range = || Error::OutOfRangeQuery { spot, lower, upper };
        if !(spot >= lower && spot <= upper) {
            return Err(out_of_range());
        }
        let row = self.locate(spot);
        if row == 0 || row >= self.steps() {
            return Err(out_of_range());
        }
        Ok(row)
    }
}

// ─── Value grid ───────────────────────────────────────────────────────────────

/// Contract values `V[i, j]` on price level `i` and time index `j`.
///
/// Column `M` holds the terminal condition; columns `M−1 … 0` are written
/// once each by the backward solver and are read-only afterwards.
#[derive(Debug, Clone)]
pub struct ValueGrid {
    spec: FdGridSpec,
    axis: PriceAxis,
    values: Matrix,
}

impl ValueGrid {
    /// A zero grid for `spec`, allocated in one block.
    pub(crate) fn zeros(spec: FdGridSpec) -> Self {
        let axis = spec.price_axis();
        let values = Matrix::zeros(spec.price_steps() + 1, spec.time_steps() + 1);
        Self { spec, axis, values }
    }

    pub(crate) fn values_mut(&mut self) -> &mut Matrix {
        &mut self.values
    }

    /// Grid dimensions.
    pub fn spec(&self) -> &FdGridSpec {
        &self.spec
    }

    /// The price axis.
    pub fn price_axis(&self) -> &PriceAxis {
        &self.axis
    }

    /// `V[i, j]`.
    pub fn value(&self, i: usize, j: usize) -> Real {
        self.values[(i, j)]
    }

    /// Time slice `V[:, j]` across all price levels.
    pub fn column(&self, j: usize) -> &[Real] {
        self.values.column(j)
    }

    /// History `V[i, :]` of one price level, inception first.
    pub fn row(&self, i: usize) -> Vec<Real> {
        self.values.row(i)
    }

    /// The underlying matrix.
    pub fn values(&self) -> &Matrix {
        &self.values
    }
}
