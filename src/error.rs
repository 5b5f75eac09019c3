// src/error.rs
use std::fmt;

/// Custom error types for the hedge-mc library
#[derive(Debug, Clone)]
pub enum HedgeError {
    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Analytic evaluation requested at or past expiry
    ///
    /// The Black-Scholes formulas divide by `sqrt(maturity - t)`, so they are
    /// undefined once `t >= maturity`. The hedging loop settles the terminal
    /// step without calling the analytics, but any other caller hitting the
    /// boundary must fail fast rather than return NaN.
    EvaluationAtExpiry { t: f64, maturity: f64 },

    /// Invalid configuration
    InvalidConfiguration { field: String, reason: String },
}

impl fmt::Display for HedgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HedgeError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            HedgeError::EvaluationAtExpiry { t, maturity } => {
                write!(
                    f,
                    "Option analytics evaluated at t = {} with maturity {}: undefined at or past expiry",
                    t, maturity
                )
            }
            HedgeError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for HedgeError {}

/// Result type alias for hedge-mc operations
pub type HedgeResult<T> = Result<T, HedgeError>;

/// Validation utilities
pub mod validation {
    use super::{HedgeError, HedgeResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> HedgeResult<()> {
        if value <= 0.0 {
            Err(HedgeError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> HedgeResult<()> {
        if value < 0.0 {
            Err(HedgeError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> HedgeResult<()> {
        if !value.is_finite() {
            Err(HedgeError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate paths count
    pub fn validate_paths(paths: usize) -> HedgeResult<()> {
        if paths == 0 {
            Err(HedgeError::InvalidConfiguration {
                field: "num_paths".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate rebalancing periods count
    pub fn validate_periods(periods: usize) -> HedgeResult<()> {
        if periods == 0 {
            Err(HedgeError::InvalidConfiguration {
                field: "num_periods".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
