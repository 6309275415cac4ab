//! Closed-form moments of the linear birth-death chain.
//!
//! With `s = λ + μ`, each of the `N` slots flips independently between
//! "empty" and "occupied" as a two-state chain, which gives
//!
//! ```text
//! E[X_t | X_0 = x] = x (λ + μ e^{-st}) / s  +  (N - x) λ (1 - e^{-st}) / s
//! ```

use sp_core::{BirthDeathParams, SpError, SpResult, validate};

/// Expected population at time `t` starting from `x`.
///
/// Uses the same rate convention as the simulator: birth `(N - n)λ`, death
/// `nμ`.  Fails when `N = 0`, `x > N`, `t < 0`, a rate is negative, or
/// `λ = μ = 0`.
pub fn expected_state(
    x:          u32,
    n:          u32,
    birth_rate: f64,
    death_rate: f64,
    t:          f64,
) -> SpResult<f64> {
    let s = total_rate(n, birth_rate, death_rate)?;
    if x > n {
        return Err(SpError::invalid("initial_state", format!("{x} is outside [0, {n}]")));
    }
    let t = validate::non_negative("t", t)?;

    let decay = (-s * t).exp();
    let x = f64::from(x);
    let n = f64::from(n);
    Ok(x * (birth_rate + death_rate * decay) / s + (n - x) * birth_rate * (1.0 - decay) / s)
}

/// [`expected_state`] evaluated at the horizon of `params`.
pub fn expected_final_state(params: &BirthDeathParams) -> SpResult<f64> {
    expected_state(
        params.initial_state,
        params.max_population,
        params.birth_rate,
        params.death_rate,
        params.horizon,
    )
}

/// Long-run mean `Nλ / (λ + μ)`, the `t → ∞` limit of [`expected_state`].
pub fn stationary_mean(n: u32, birth_rate: f64, death_rate: f64) -> SpResult<f64> {
    let s = total_rate(n, birth_rate, death_rate)?;
    Ok(f64::from(n) * birth_rate / s)
}

fn total_rate(n: u32, birth_rate: f64, death_rate: f64) -> SpResult<f64> {
    if n == 0 {
        return Err(SpError::invalid("max_population", "must be at least 1"));
    }
    let s = validate::non_negative("birth_rate", birth_rate)?
        + validate::non_negative("death_rate", death_rate)?;
    if s == 0.0 {
        return Err(SpError::invalid("birth_rate", "birth_rate + death_rate must be > 0"));
    }
    Ok(s)
}
