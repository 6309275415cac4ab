//! Exact (Gillespie) path sampling.

use sp_core::{BirthDeathParams, EventRng, SpResult};
use tracing::trace;

use crate::Trajectory;

/// Sample one path of the chain from `(0, initial_state)` up to the horizon.
///
/// `params` must already be valid (see [`BirthDeathParams::new`]).  The path
/// ends early, without error, when the chain enters a state with zero total
/// rate.
pub fn simulate(params: &BirthDeathParams, rng: &mut EventRng) -> Trajectory {
    let mut time = 0.0;
    let mut state = params.initial_state;
    let mut path = Trajectory::start(state);

    loop {
        let (birth, death) = params.rates_at(state);
        let total = birth + death;
        if total <= 0.0 {
            trace!(state, time, "absorbing state reached");
            break;
        }

        // total > 0 here, so Exp(total) = Exp(1) / total is well defined.
        let dt = rng.standard_exponential() / total;
        if time + dt > params.horizon {
            break;
        }
        time += dt;

        // u < 1 always, so a zero death rate forces a birth and vice versa.
        if rng.uniform01() < birth / total {
            state += 1;
        } else {
            state -= 1;
        }
        path.push(time, state);
    }

    path
}

/// Validate the raw parameters, then [`simulate`].
///
/// No random draw happens if validation fails.
pub fn simulate_birth_death(
    max_population: u32,
    birth_rate:     f64,
    death_rate:     f64,
    initial_state:  u32,
    horizon:        f64,
    rng:            &mut EventRng,
) -> SpResult<Trajectory> {
    let params = BirthDeathParams::new(max_population, birth_rate, death_rate, initial_state, horizon)?;
    Ok(simulate(&params, rng))
}
