//! # forward-greeks
//!
//! Price and Greeks (Delta, Gamma, Theta) of a forward contract by three
//! independent methods: a Crank-Nicolson finite-difference solve of the
//! Black-Scholes PDE, a Monte Carlo simulation under the risk-neutral
//! measure, and the closed-form formula.
//!
//! This crate is a façade that re-exports the workspace crates.
//!
//! ```rust
//! use forward_greeks::instruments::{ForwardContract, MarketData, PricingEngine};
//! use forward_greeks::pricingengines::{FdForwardEngine, FdSettings};
//!
//! let contract = ForwardContract::new(100.0, 1.0).unwrap();
//! let market = MarketData::new(100.0, 0.05, 0.2).unwrap();
//! let engine = FdForwardEngine::new(
//!     FdSettings::default().with_price_steps(600).with_time_steps(40),
//! );
//! let results = engine.calculate(&contract, &market).unwrap();
//! assert!((results.greeks.price - 4.877).abs() < 1e-3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use fg_core as core;

/// Matrix storage, distributions, RNG, and statistics.
pub use fg_math as math;

/// Stochastic process definitions.
pub use fg_processes as processes;

/// Numerical methods (Crank-Nicolson, Monte Carlo).
pub use fg_methods as methods;

/// Forward contract, market data, and the engine interface.
pub use fg_instruments as instruments;

/// Analytic, finite-difference, and Monte Carlo engines.
pub use fg_pricingengines as pricingengines;

/// Environment-driven run configuration for the `forward_greeks` binary.
pub mod config;

pub use config::{OutputFormat, RunConfig};
