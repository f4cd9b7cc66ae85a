//! # fg-methods
//!
//! Numerical methods for forward-greeks: a Crank-Nicolson finite-difference
//! solver on a uniform price grid, and terminal-value Monte Carlo.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Finite-difference methods (Crank-Nicolson on the Black-Scholes PDE).
pub mod finite_differences;

/// Monte Carlo simulation.
pub mod monte_carlo;

pub use finite_differences::{
    BoundaryProblem, CrankNicolsonSolver, FdGridSpec, FdSolution, GridGreeks, PriceAxis,
    StabilityDiagnostic, ValueGrid,
};
pub use monte_carlo::{EuropeanPathPricer, MonteCarloModel, NormalDraws, TerminalPricer};
