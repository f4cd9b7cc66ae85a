//! Finite-difference pricing of one-factor contracts on a uniform price grid.
//!
//! # Overview
//!
//! * [`FdGridSpec`], [`PriceAxis`], [`ValueGrid`]: grid dimensions, price
//!   levels and the solved values
//! * [`CrankNicolsonCoefficients`]: the discretised Black-Scholes operator
//! * [`TridiagonalOperator`]: banded storage with an O(n) Thomas solve
//! * [`CrankNicolsonSolver`]: backward time stepping against a
//!   [`BoundaryProblem`]
//! * [`GridGreeks`]: price, Delta, Gamma and Theta read off the grid
//! * [`StabilityDiagnostic`]: advisory mesh-ratio flag

mod crank_nicolson;
mod greeks;
mod grid;
mod solver;
mod stability;
mod tridiagonal_operator;

pub use crank_nicolson::CrankNicolsonCoefficients;
pub use greeks::GridGreeks;
pub use grid::{FdGridSpec, PriceAxis, ValueGrid};
pub use solver::{BoundaryProblem, CrankNicolsonSolver, FdSolution};
pub use stability::{mesh_ratio, StabilityDiagnostic, DEFAULT_MESH_RATIO_LIMIT};
pub use tridiagonal_operator::TridiagonalOperator;
