// src/analytics/call_option.rs
//! Analytical Black-Scholes formulas for the hedged European call
//!
//! # Mathematical Foundation
//!
//! The option is priced and hedged at a fixed *implied* volatility σ under
//! the Black-Scholes model:
//! ```text
//! C(S,t) = S*Φ(d₁) - K*e^(-r(T-t))*Φ(d₂)
//!
//! d₁ = [ln(S/K) + (r + σ²/2)(T-t)] / (σ√(T-t))
//! d₂ = d₁ - σ√(T-t)
//! ```
//!
//! All formulas divide by `√(T-t)`, so evaluation requires `t < T` strictly.
//! Calls at or past expiry return [`HedgeError::EvaluationAtExpiry`] instead
//! of NaN; the hedging loop settles the terminal step by intrinsic value and
//! never hits this boundary.
//!
//! Spot is deliberately *not* validated: the Euler path discretization can
//! produce non-positive prices, and those propagate through `ln` unclamped
//! as a documented modeling limitation rather than an error.

use crate::error::{validation::validate_positive, HedgeError, HedgeResult};
use crate::math_utils::norm_cdf;

/// A European call option, immutable for the lifetime of a run
///
/// Holds the contract terms and the implied volatility used for pricing and
/// hedge sizing. Safely shared by reference across worker threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallOption {
    strike: f64,
    rate: f64,
    implied_vol: f64,
    maturity: f64,
}

impl CallOption {
    /// Create a call option, validating `maturity > 0` and `implied_vol > 0`
    pub fn new(strike: f64, rate: f64, implied_vol: f64, maturity: f64) -> HedgeResult<Self> {
        validate_positive("strike", strike)?;
        validate_positive("implied_vol", implied_vol)?;
        validate_positive("maturity", maturity)?;
        Ok(CallOption {
            strike,
            rate,
            implied_vol,
            maturity,
        })
    }

    pub fn strike(&self) -> f64 {
        self.strike
    }

    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Time remaining to expiry at evaluation time `t`
    ///
    /// Errors when `t >= maturity`: the analytics below are undefined there.
    fn time_to_expiry(&self, t: f64) -> HedgeResult<f64> {
        if t >= self.maturity {
            return Err(HedgeError::EvaluationAtExpiry {
                t,
                maturity: self.maturity,
            });
        }
        Ok(self.maturity - t)
    }

    /// Black-Scholes d₁ at spot `spot` and elapsed time `t`
    pub fn d1(&self, spot: f64, t: f64) -> HedgeResult<f64> {
        let tau = self.time_to_expiry(t)?;
        let vol = self.implied_vol;
        Ok(((spot / self.strike).ln() + (self.rate + 0.5 * vol * vol) * tau) / (vol * tau.sqrt()))
    }

    /// Black-Scholes d₂ = d₁ - σ√(T-t)
    pub fn d2(&self, spot: f64, t: f64) -> HedgeResult<f64> {
        let tau = self.time_to_expiry(t)?;
        Ok(self.d1(spot, t)? - self.implied_vol * tau.sqrt())
    }

    /// Black-Scholes call price
    ///
    /// ```text
    /// C = S*Φ(d₁) - K*e^(-r(T-t))*Φ(d₂)
    /// ```
    pub fn price(&self, spot: f64, t: f64) -> HedgeResult<f64> {
        let tau = self.time_to_expiry(t)?;
        let d1 = self.d1(spot, t)?;
        let d2 = self.d2(spot, t)?;
        Ok(spot * norm_cdf(d1) - self.strike * (-self.rate * tau).exp() * norm_cdf(d2))
    }

    /// Black-Scholes call delta: Φ(d₁)
    ///
    /// The hedge ratio: number of underlying shares held short against one
    /// long call. Strictly inside (0, 1) mathematically; in floating point
    /// it saturates to exactly 0.0 or 1.0 for extreme moneyness close to
    /// expiry, where Φ(d₁) underflows or lands within one ulp of 1.
    pub fn delta(&self, spot: f64, t: f64) -> HedgeResult<f64> {
        Ok(norm_cdf(self.d1(spot, t)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atm_option() -> CallOption {
        // S0 = K = 100, r = 0, σ = 20%, T = 1y
        CallOption::new(100.0, 0.0, 0.2, 1.0).unwrap()
    }

    #[test]
    fn test_construction_rejects_bad_parameters() {
        assert!(CallOption::new(100.0, 0.0, 0.2, 0.0).is_err());
        assert!(CallOption::new(100.0, 0.0, 0.2, -1.0).is_err());
        assert!(CallOption::new(100.0, 0.0, 0.0, 1.0).is_err());
        assert!(CallOption::new(100.0, 0.0, -0.2, 1.0).is_err());
        assert!(CallOption::new(0.0, 0.0, 0.2, 1.0).is_err());
    }

    #[test]
    fn test_atm_zero_rate_reference_values() {
        // With S = K and r = 0: d1 = σ√T/2 = 0.1, d2 = -0.1
        let option = atm_option();

        let d1 = option.d1(100.0, 0.0).unwrap();
        let d2 = option.d2(100.0, 0.0).unwrap();
        assert!((d1 - 0.1).abs() < 1e-12, "d1 should be 0.1, got {}", d1);
        assert!((d2 + 0.1).abs() < 1e-12, "d2 should be -0.1, got {}", d2);

        // C = 100*(Φ(0.1) - Φ(-0.1)), hand-computed
        let price = option.price(100.0, 0.0).unwrap();
        assert!(
            (price - 7.965567455405804).abs() < 1e-9,
            "ATM price should be ~7.9656, got {}",
            price
        );

        let delta = option.delta(100.0, 0.0).unwrap();
        assert!(
            (delta - 0.539827837277029).abs() < 1e-9,
            "ATM delta should be Φ(0.1) ~ 0.5398, got {}",
            delta
        );
    }

    #[test]
    fn test_delta_bounded_in_unit_interval() {
        // Φ(d₁) saturates to exactly 0.0 or 1.0 once |d₁| grows large, so
        // the strict bound is only checkable where the CDF is representable;
        // this grid keeps |d₁| below ~8.
        let option = atm_option();
        for &spot in &[60.0, 80.0, 100.0, 125.0, 150.0] {
            for &t in &[0.0, 0.25, 0.5, 0.75, 0.9] {
                let delta = option.delta(spot, t).unwrap();
                assert!(
                    delta > 0.0 && delta < 1.0,
                    "delta must lie in (0,1), got {} at spot {} t {}",
                    delta,
                    spot,
                    t
                );
            }
        }
    }

    #[test]
    fn test_delta_saturates_for_extreme_moneyness_near_expiry() {
        // Deep out-of/in-the-money just before expiry |d₁| is in the
        // hundreds; Φ(d₁) is then representable only as 0 or 1.
        let option = atm_option();
        assert_eq!(option.delta(20.0, 0.999).unwrap(), 0.0);
        assert_eq!(option.delta(400.0, 0.999).unwrap(), 1.0);
    }

    #[test]
    fn test_delta_monotone_in_spot() {
        let option = atm_option();
        let mut last = 0.0;
        for &spot in &[50.0, 75.0, 100.0, 125.0, 150.0] {
            let delta = option.delta(spot, 0.5).unwrap();
            assert!(delta > last, "call delta must increase with spot");
            last = delta;
        }
    }

    #[test]
    fn test_price_no_arbitrage_lower_bound() {
        let option = atm_option();
        for &spot in &[50.0, 80.0, 100.0, 120.0, 200.0] {
            for &t in &[0.0, 0.5, 0.99] {
                let price = option.price(spot, t).unwrap();
                let intrinsic = (spot - option.strike()).max(0.0);
                assert!(
                    price >= intrinsic,
                    "price {} below intrinsic {} at spot {} t {}",
                    price,
                    intrinsic,
                    spot,
                    t
                );
            }
        }
    }

    #[test]
    fn test_evaluation_at_expiry_fails_fast() {
        let option = atm_option();
        assert!(matches!(
            option.d1(100.0, 1.0),
            Err(HedgeError::EvaluationAtExpiry { .. })
        ));
        assert!(option.d2(100.0, 1.0).is_err());
        assert!(option.price(100.0, 1.5).is_err());
        assert!(option.delta(100.0, 1.0).is_err());
    }

    #[test]
    fn test_negative_spot_propagates_nan() {
        // Discretization artifact: not guarded, flows through ln() as NaN
        let option = atm_option();
        assert!(option.delta(-5.0, 0.5).unwrap().is_nan());
    }
}
