//! Crank-Nicolson discretisation of the Black-Scholes operator on a uniform
//! price grid.
//!
//! With `S_i = i·ΔS` the backward PDE
//! `∂V/∂t + ½σ²S²·∂²V/∂S² + rS·∂V/∂S − rV = 0`
//! becomes, per interior level `i` and averaging the explicit and implicit
//! halves,
//!
//! ```text
//! a_i·V[i−1, j] + b_i·V[i, j] + c_i·V[i+1, j]
//!     = −a_i·V[i−1, j+1] + (2 − b_i)·V[i, j+1] − c_i·V[i+1, j+1]
//!
//! a_i = −¼Δt(σ²i² − r·i)    b_i = 1 + ½Δt(σ²i² + r)    c_i = −¼Δt(σ²i² + r·i)
//! ```
//!
//! The coefficients do not depend on `j`, so they are built once per solve.

use super::tridiagonal_operator::TridiagonalOperator;
use fg_core::{errors::Result, Rate, Real, Time, Volatility};

/// Implicit and explicit Crank-Nicolson coefficients for every price level.
///
/// Vectors have length `N+1` and are indexed by price level; entries `0` and
/// `N` belong to the boundaries and stay zero.
#[derive(Debug, Clone)]
pub struct CrankNicolsonCoefficients {
    /// Implicit sub-diagonal `a_i`.
    pub a: Vec<Real>,
    /// Implicit diagonal `b_i`.
    pub b: Vec<Real>,
    /// Implicit super-diagonal `c_i`.
    pub c: Vec<Real>,
    // Explicit half: ¼Δt(σ²i² − ri), 1 − ½Δt(σ²i² + r), ¼Δt(σ²i² + ri).
    explicit_lower: Vec<Real>,
    explicit_diag: Vec<Real>,
    explicit_upper: Vec<Real>,
}

impl CrankNicolsonCoefficients {
    /// Coefficients for `price_steps` intervals and time step `dt`.
    pub fn new(price_steps: usize, dt: Time, rate: Rate, volatility: Volatility) -> Self {
        let n = price_steps;
        let sigma2 = volatility * volatility;
        let mut a = vec![0.0; n + 1];
        let mut b = vec![0.0; n + 1];
        let mut c = vec![0.0; n + 1];
        let mut explicit_lower = vec![0.0; n + 1];
        let mut explicit_diag = vec![0.0; n + 1];
        let mut explicit_upper = vec![0.0; n + 1];

        for i in 1..n {
            let fi = i as Real;
            let diffusion = sigma2 * fi * fi;
            let drift = rate * fi;
            a[i] = -0.25 * dt * (diffusion - drift);
            b[i] = 1.0 + 0.5 * dt * (diffusion + rate);
            c[i] = -0.25 * dt * (diffusion + drift);
            explicit_lower[i] = 0.25 * dt * (diffusion - drift);
            explicit_diag[i] = 1.0 - 0.5 * dt * (diffusion + rate);
            explicit_upper[i] = 0.25 * dt * (diffusion + drift);
        }

        Self {
            a,
            b,
            c,
            explicit_lower,
            explicit_diag,
            explicit_upper,
        }
    }

    /// Number of price intervals `N`.
    pub fn price_steps(&self) -> usize {
        self.b.len() - 1
    }

    /// The `(N−1) × (N−1)` implicit system over interior levels `1..N−1`.
    ///
    /// Row `k` is price level `i = k+1` and carries `a_i`, `b_i`, `c_i` on
    /// its sub-diagonal, diagonal and super-diagonal.
    pub fn implicit_operator(&self) -> Result<TridiagonalOperator> {
        let n = self.price_steps();
        let mut lower = self.a[1..n].to_vec();
        let diag = self.b[1..n].to_vec();
        let mut upper = self.c[1..n].to_vec();
        // a_1 and c_{N−1} couple to the boundaries, which are folded into the
        // right-hand side instead.
        lower[0] = 0.0;
        upper[n - 2] = 0.0;
        TridiagonalOperator::from_bands(lower, diag, upper)
    }

    /// Right-hand side of the implicit system from the known column
    /// `next` (`V[:, j+1]`, length `N+1`), written into `rhs` (length `N−1`).
    ///
    /// Applies the explicit half at every interior level, then folds the
    /// boundary values of `next` into the first and last entries:
    /// `rhs[0] −= a_1·V[0, j+1]` and `rhs[N−2] −= c_{N−1}·V[N, j+1]`.
    pub fn explicit_rhs(&self, next: &[Real], rhs: &mut [Real]) {
        let n = self.price_steps();
        debug_assert_eq!(next.len(), n + 1);
        debug_assert_eq!(rhs.len(), n - 1);

        for (k, out) in rhs.iter_mut().enumerate() {
            let i = k + 1;
            *out = self.explicit_lower[i] * next[i - 1]
                + self.explicit_diag[i] * next[i]
                + self.explicit_upper[i] * next[i + 1];
        }
        rhs[0] -= self.a[1] * next[0];
        rhs[n - 2] -= self.c[n - 1] * next[n];
    }
}
