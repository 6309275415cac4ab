//! Closed-form mean of the first safe crossing time.

use sp_core::{SpResult, validate};

/// `E[T] = (e^{λS} - 1) / λ`: mean time until a gap of `S` has been seen,
/// counting the wait before the first vehicle.
pub fn expected_first_crossing(arrival_rate: f64, min_gap: f64) -> SpResult<f64> {
    let rate = validate::positive("arrival_rate", arrival_rate)?;
    let gap = validate::non_negative("min_gap", min_gap)?;
    Ok((rate * gap).exp_m1() / rate)
}
