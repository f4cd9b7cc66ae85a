//! Tridiagonal operator with an O(n) Thomas-algorithm solve.

use fg_core::{errors::Error, errors::Result, Real};

/// Pivots smaller than this in magnitude are treated as singular.
const PIVOT_EPSILON: Real = 1.0e-300;

/// A tridiagonal matrix stored as three bands.
///
/// Row `i` reads `lower[i]·x[i−1] + diag[i]·x[i] + upper[i]·x[i+1]`, so
/// `lower[0]` and `upper[n−1]` are never touched.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalOperator {
    /// Sub-diagonal (index 0 unused).
    pub lower: Vec<Real>,
    /// Main diagonal.
    pub diag: Vec<Real>,
    /// Super-diagonal (last index unused).
    pub upper: Vec<Real>,
}

impl TridiagonalOperator {
    /// Build from three equal-length bands.
    pub fn from_bands(lower: Vec<Real>, diag: Vec<Real>, upper: Vec<Real>) -> Result<Self> {
        fg_core::ensure!(
            lower.len() == diag.len() && upper.len() == diag.len(),
            "band lengths differ: lower {}, diag {}, upper {}",
            lower.len(),
            diag.len(),
            upper.len()
        );
        Ok(Self { lower, diag, upper })
    }

    /// Size (number of rows/columns).
    pub fn size(&self) -> usize {
        self.diag.len()
    }

    /// Solve `A · x = rhs` into `x` without allocating.
    ///
    /// `scratch` holds the modified super-diagonal of the forward sweep and
    /// must have the operator's size; `rhs`, `x` and `scratch` are reused
    /// across time steps by the backward solver.
    pub fn solve_into(&self, rhs: &[Real], x: &mut [Real], scratch: &mut [Real]) -> Result<()> {
        let n = self.size();
        fg_core::ensure!(
            rhs.len() == n && x.len() == n && scratch.len() == n,
            "solve buffers must all have length {n} (rhs {}, x {}, scratch {})",
            rhs.len(),
            x.len(),
            scratch.len()
        );
        if n == 0 {
            return Ok(());
        }

        // Forward sweep; the modified rhs is built in place in `x`.
        let mut pivot = self.diag[0];
        if pivot.abs() < PIVOT_EPSILON {
            return Err(Error::Numerical("zero pivot in row 0".into()));
        }
        scratch[0] = self.upper[0] / pivot;
        x[0] = rhs[0] / pivot;
        for i in 1..n {
            pivot = self.diag[i] - self.lower[i] * scratch[i - 1];
            if pivot.abs() < PIVOT_EPSILON {
                return Err(Error::Numerical(format!("zero pivot in row {i}")));
            }
            scratch[i] = if i + 1 < n { self.upper[i] / pivot } else { 0.0 };
            x[i] = (rhs[i] - self.lower[i] * x[i - 1]) / pivot;
        }

        // Back substitution
        for i in (0..n - 1).rev() {
            x[i] -= scratch[i] * x[i + 1];
        }
        Ok(())
    }
}
