// src/math_utils.rs
use statrs::function::erf;
use std::f64::consts::SQRT_2;

/// Standard normal cumulative distribution function
///
/// Uses the complementary error function identity:
/// ```text
/// Φ(x) = 0.5 * erfc(-x / √2)
/// ```
///
/// The erfc form keeps full precision deep in the tails, where the naive
/// `0.5 * (1 + erf(x/√2))` loses digits to cancellation. The hedging-error
/// statistics need the CDF accurate to at least 1e-9.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erf::erfc(-x / SQRT_2)
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Timer::new()
    }
}
