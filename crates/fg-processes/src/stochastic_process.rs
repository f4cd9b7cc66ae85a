//! Base trait for scalar diffusions.
//!
//! A process `dX = μ(t,X) dt + σ(t,X) dW` is stepped forward by
//! `evolve_1d` given a standard-normal draw. The Monte Carlo model only ever
//! asks for the initial value and one step to the horizon.

use fg_core::{Real, Time};

/// A 1-dimensional stochastic process `dX = μ(t,X) dt + σ(t,X) dW`.
pub trait StochasticProcess1D: std::fmt::Debug + Send + Sync {
    /// Initial value of the process.
    fn x0(&self) -> Real;

    /// Advance from `x` at `t` over `dt` with standard-normal draw `dw`.
    fn evolve_1d(&self, t: Time, x: Real, dt: Time, dw: Real) -> Real;
}
