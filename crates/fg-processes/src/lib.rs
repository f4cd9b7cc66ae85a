//! # fg-processes
//!
//! Stochastic processes for the underlying: the one-dimensional process
//! trait and the risk-neutral Black-Scholes (geometric Brownian motion)
//! process sampled by the Monte Carlo engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod black_scholes_process;
pub mod stochastic_process;

pub use black_scholes_process::BlackScholesProcess;
pub use stochastic_process::StochasticProcess1D;
