//! # hedge-mc: Monte Carlo for Discrete Delta-Hedging Error
//!
//! A Rust library for estimating, by Monte Carlo simulation, the residual
//! cash-flow risk of a discretely rebalanced delta-hedged European call when
//! the realized volatility of the underlying differs from the implied
//! volatility used to price and hedge it.
//!
//! ## Key Features
//!
//! - **Closed-Form Analytics**: Black-Scholes d1/d2, price, and delta for the
//!   European call used to size the hedge
//! - **Reproducible Noise**: Seeded, row-major standard-normal noise matrix,
//!   bit-identical across runs and thread counts
//! - **Parallel Paths**: One Rayon task per path, each owning disjoint rows
//!   of the noise and price-path matrices - no locks anywhere
//! - **Hedging Ledger**: Per-path cash-flow accounting of every rebalance
//!   trade plus terminal settlement of both legs
//!
//! ## Quick Start
//!
//! ```rust
//! use hedge_mc::analytics::call_option::CallOption;
//! use hedge_mc::hedging::engine::{run, SimulationConfig};
//!
//! let cfg = SimulationConfig {
//!     num_periods: 250,
//!     num_paths: 10_000,
//!     maturity: 1.0,      // Years to expiry
//!     initial_spot: 100.0,
//!     realized_vol: 0.25, // Ground-truth path volatility
//!     seed: 42,
//! };
//!
//! // At-the-money call hedged at 20% implied vol, zero rate
//! let option = CallOption::new(100.0, 0.0, 0.2, 1.0).expect("valid option");
//! let output = run(&option, &cfg).expect("valid configuration");
//! println!("Mean hedging P&L: {:.4}", output.mean_cash_flow());
//! ```
//!
//! ## Mathematical Foundation
//!
//! Paths follow an Euler discretization of geometric Brownian motion with
//! zero drift; the hedger holds one call long and `delta` shares short,
//! rebalancing the short leg at each period. Across many paths the mean
//! terminal cash flow measures the replication error induced by hedging at
//! an implied volatility that differs from the realized one.

// Module declarations
pub mod error;
pub mod rng;
pub mod math_utils;
pub mod analytics;
pub mod hedging;
pub mod output;

// Re-export commonly used types for convenience
pub use error::{HedgeError, HedgeResult};
