// src/hedging/engine.rs
//! Dynamic Delta-Hedging Simulation Engine
//!
//! # Mathematical Framework
//!
//! With the risk-free rate fixed at zero, each underlying path follows the
//! Euler discretization of driftless geometric Brownian motion at the
//! *realized* volatility σ_r:
//! ```text
//! S_j = S_{j-1} * (1 + σ_r * √dt * Z_{j-1}),   dt = T / N
//! ```
//! Large draws can push `S_j` negative; this is a known artifact of the
//! discretization and is left unclamped because correcting it would change
//! the output distribution.
//!
//! The hedger is long one call and short `delta` shares, rebalancing the
//! short leg each period at the option's *implied* volatility. Per path the
//! worker runs three phases:
//! 1. **Evolve** the full price path from its noise row
//! 2. **Rebalance** at each interior step: trade `(Δ_new - Δ_old)` shares at
//!    the current spot and accrue the cost
//! 3. **Settle** at expiry: collect the call payoff and unwind the last-held
//!    short position (no delta evaluation at `t = T`, where the analytics
//!    are undefined)
//!
//! Positive cash flow is profit to the hedger. Across many paths the mean
//! terminal cash flow measures the replication error caused by hedging at an
//! implied volatility that differs from the realized one.
//!
//! # Concurrency Model
//!
//! One Rayon task per path. Each task exclusively owns one mutable row of
//! the price-path matrix and reads one row of the pre-generated noise
//! matrix; the per-path cash flows are produced by the parallel map itself.
//! Disjoint row partitioning is the sole safety mechanism: no locks,
//! mutexes, or atomics anywhere. `run_serial` executes the identical
//! per-path function sequentially and must produce bit-identical results.

use crate::analytics::call_option::CallOption;
use crate::error::{validation::*, HedgeResult};
use crate::rng;
use ndarray::{Array1, Array2, ArrayView1, ArrayViewMut1};
use rayon::prelude::*;

/// Simulation parameters, constructed once before any parallel work
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    /// Number of rebalancing periods N (path has N+1 points)
    pub num_periods: usize,
    /// Number of independent Monte Carlo paths
    pub num_paths: usize,
    /// Time to expiry in years
    pub maturity: f64,
    /// Spot price at t = 0
    pub initial_spot: f64,
    /// Volatility used to evolve the paths (ground truth)
    pub realized_vol: f64,
    /// Seed for the noise matrix
    pub seed: u64,
}

impl SimulationConfig {
    /// Validate the simulation configuration
    pub fn validate(&self) -> HedgeResult<()> {
        validate_periods(self.num_periods)?;
        validate_paths(self.num_paths)?;
        validate_positive("maturity", self.maturity)?;
        validate_positive("initial_spot", self.initial_spot)?;
        validate_non_negative("realized_vol", self.realized_vol)?;
        Ok(())
    }
}

/// Result of a full simulation run
///
/// `paths` keeps every simulated price path (row `i` is path `i`, column 0
/// the initial spot) for downstream persistence; `cash_flows` holds one
/// terminal hedging P&L per path.
#[derive(Debug, Clone)]
pub struct SimulationOutput {
    pub paths: Array2<f64>,
    pub cash_flows: Array1<f64>,
}

impl SimulationOutput {
    /// Arithmetic mean of the per-path terminal cash flows
    ///
    /// The primary reported statistic. Pure reduction, no error paths.
    pub fn mean_cash_flow(&self) -> f64 {
        self.cash_flows.sum() / self.cash_flows.len() as f64
    }
}

/// Initial hedge position, shared read-only by every worker
///
/// Establishing the portfolio at t = 0 costs the option premium and returns
/// the proceeds of the initial short sale:
/// ```text
/// cash_0 = -C(S_0, 0) + Δ(S_0, 0) * S_0
/// ```
#[derive(Debug, Clone, Copy)]
struct InitialPosition {
    hedge_ratio: f64,
    cash_flow: f64,
}

impl InitialPosition {
    fn establish(option: &CallOption, initial_spot: f64) -> HedgeResult<Self> {
        let price = option.price(initial_spot, 0.0)?;
        let hedge_ratio = option.delta(initial_spot, 0.0)?;
        Ok(InitialPosition {
            hedge_ratio,
            cash_flow: -price + hedge_ratio * initial_spot,
        })
    }
}

/// Simulate and hedge one path: the fused per-path worker
///
/// Writes the price evolution into `path` (whose element 0 must already hold
/// the initial spot) and returns the terminal cash flow. Interior rebalances
/// evaluate delta strictly before expiry (`j*dt < T` for `j < N` by
/// construction), so the expiry guard in the analytics cannot trip here; the
/// `?` remains because delta can legitimately fail for other callers.
fn hedge_path(
    option: &CallOption,
    cfg: &SimulationConfig,
    init: InitialPosition,
    noise_row: ArrayView1<f64>,
    mut path: ArrayViewMut1<f64>,
) -> HedgeResult<f64> {
    let n = cfg.num_periods;
    let dt = cfg.maturity / n as f64;
    let sqrt_dt = dt.sqrt();

    // Phase 1: evolve the underlying
    for j in 1..=n {
        path[j] = path[j - 1] * (1.0 + cfg.realized_vol * sqrt_dt * noise_row[j - 1]);
    }

    // Phase 2: rebalance the short leg at each interior step
    let mut cash_flow = init.cash_flow;
    let mut hedge_ratio = init.hedge_ratio;
    for j in 1..n {
        let new_ratio = option.delta(path[j], j as f64 * dt)?;
        // Cost of trading to the new delta at the current spot
        cash_flow += (new_ratio - hedge_ratio) * path[j];
        hedge_ratio = new_ratio;
    }

    // Phase 3: settle at expiry
    let terminal_spot = path[n];
    let payoff = (terminal_spot - option.strike()).max(0.0);
    cash_flow += payoff; // close the long call leg
    cash_flow -= hedge_ratio * terminal_spot; // close the short underlying leg

    Ok(cash_flow)
}

/// Run the full simulation with one Rayon task per path
///
/// # Algorithm
///
/// 1. Validate the configuration and establish the initial position
/// 2. Generate the noise matrix (single-threaded, seed-deterministic)
/// 3. Fan out: parallel zip of mutable path rows with shared noise rows,
///    each task running [`hedge_path`] to completion on its own slices
/// 4. Fan in: collect per-path cash flows (the collect is the join barrier);
///    the first per-path error, if any, aborts the run
pub fn run(option: &CallOption, cfg: &SimulationConfig) -> HedgeResult<SimulationOutput> {
    cfg.validate()?;
    let init = InitialPosition::establish(option, cfg.initial_spot)?;

    let noise = rng::generate_noise_matrix(cfg.num_paths, cfg.num_periods, cfg.seed);
    let mut paths = Array2::from_elem((cfg.num_paths, cfg.num_periods + 1), cfg.initial_spot);

    let cash_flows: Vec<f64> = paths
        .outer_iter_mut()
        .into_par_iter()
        .zip(noise.outer_iter().into_par_iter())
        .map(|(path_row, noise_row)| hedge_path(option, cfg, init, noise_row, path_row))
        .collect::<HedgeResult<Vec<f64>>>()?;

    Ok(SimulationOutput {
        paths,
        cash_flows: Array1::from(cash_flows),
    })
}

/// Run the full simulation on the calling thread only
///
/// Executes exactly the same per-path procedure as [`run`] over plain
/// iterators. Because the noise matrix is generated identically and each
/// path's arithmetic is self-contained, the per-path cash flows match the
/// parallel run bit for bit whatever the worker count.
pub fn run_serial(option: &CallOption, cfg: &SimulationConfig) -> HedgeResult<SimulationOutput> {
    cfg.validate()?;
    let init = InitialPosition::establish(option, cfg.initial_spot)?;

    let noise = rng::generate_noise_matrix(cfg.num_paths, cfg.num_periods, cfg.seed);
    let mut paths = Array2::from_elem((cfg.num_paths, cfg.num_periods + 1), cfg.initial_spot);

    let cash_flows: Vec<f64> = paths
        .outer_iter_mut()
        .zip(noise.outer_iter())
        .map(|(path_row, noise_row)| hedge_path(option, cfg, init, noise_row, path_row))
        .collect::<HedgeResult<Vec<f64>>>()?;

    Ok(SimulationOutput {
        paths,
        cash_flows: Array1::from(cash_flows),
    })
}
