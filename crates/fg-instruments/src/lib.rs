//! # fg-instruments
//!
//! The forward contract, the market inputs it is priced against, the
//! pricing-result container and the [`PricingEngine`] interface.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod forward;
pub mod instrument;
pub mod market;
pub mod payoff;

pub use forward::ForwardContract;
pub use instrument::{Greeks, PricingEngine, PricingResults};
pub use market::MarketData;
pub use payoff::{ForwardPayoff, Payoff};
