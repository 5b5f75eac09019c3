// src/rng.rs
//! Random Number Generation for Monte Carlo Simulations
//!
//! # Design Philosophy
//!
//! The hedging simulation pre-generates every standard-normal draw it will
//! ever need into a single `num_paths x num_periods` matrix before any
//! parallel work starts:
//! 1. **Reproducibility**: Same seed → bit-identical matrix (critical for
//!    debugging/validation)
//! 2. **Parallelism independence**: Draw order is fixed row-major (path 0's
//!    periods first, then path 1, ...), so results cannot depend on how many
//!    worker threads later consume the rows
//! 3. **Ownership**: After generation the matrix is read-only; each worker
//!    borrows exactly one row
//!
//! Generation itself runs single-threaded to guarantee the draw order.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Seed a standard RNG from a u64 seed
pub fn seed_rng_from_u64(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draw one standard-normal sample
pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}

/// Generate the full noise matrix for a simulation run
///
/// Produces a `num_paths x num_periods` matrix of i.i.d. N(0,1) draws filled
/// in row-major order from a single seeded stream. Row `i` holds the
/// per-period increments for path `i`.
pub fn generate_noise_matrix(num_paths: usize, num_periods: usize, seed: u64) -> Array2<f64> {
    let mut rng = seed_rng_from_u64(seed);
    let mut noise = Array2::zeros((num_paths, num_periods));
    for mut row in noise.outer_iter_mut() {
        for z in row.iter_mut() {
            *z = get_normal_draw(&mut rng);
        }
    }
    noise
}
