//! # fg-pricingengines
//!
//! Pricing engines for forward contracts.
//!
//! ## Engines
//!
//! - [`AnalyticForwardEngine`]: closed form
//! - [`FdForwardEngine`]: Crank-Nicolson on a uniform price grid
//! - [`McForwardEngine`]: terminal-value Monte Carlo with bump-and-revalue
//!   Greeks
//!
//! [`MethodComparison`] runs several engines on one contract and renders the
//! results side by side.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analytic_forward_engine;
pub mod comparison;
pub mod fd_forward_engine;
pub mod mc_forward_engine;

pub use analytic_forward_engine::{analytic_forward_greeks, forward_present_value, AnalyticForwardEngine};
pub use comparison::{ComparisonRow, MethodComparison};
pub use fd_forward_engine::{FdForwardEngine, FdSettings, ForwardPdeProblem};
pub use mc_forward_engine::{McForwardEngine, McSettings};
