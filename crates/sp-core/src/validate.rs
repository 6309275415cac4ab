//! Range checks for real-valued inputs.
//!
//! Each helper returns the value unchanged on success so call sites can
//! validate and bind in one expression.

use crate::{SpError, SpResult};

/// `value` must be finite and strictly greater than zero.
pub fn positive(name: &'static str, value: f64) -> SpResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SpError::invalid(name, format!("must be finite and > 0, got {value}")))
    }
}

/// `value` must be finite and zero or greater.
pub fn non_negative(name: &'static str, value: f64) -> SpResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SpError::invalid(name, format!("must be finite and >= 0, got {value}")))
    }
}

/// A count of runs, bins, … that must be at least one.
pub fn at_least_one(name: &'static str, value: usize) -> SpResult<usize> {
    if value >= 1 {
        Ok(value)
    } else {
        Err(SpError::invalid(name, "must be at least 1"))
    }
}
