//! Unit tests for sp-birth-death.

use sp_core::{BirthDeathParams, EventRng};

use crate::{Trajectory, simulate};

fn params(n: u32, lambda: f64, mu: f64, x0: u32, horizon: f64) -> BirthDeathParams {
    BirthDeathParams::new(n, lambda, mu, x0, horizon).unwrap()
}

/// Check the path invariants every sampled trajectory must satisfy.
fn assert_well_formed(path: &Trajectory, p: &BirthDeathParams) {
    let pts = path.points();
    assert!(!pts.is_empty());
    assert_eq!(pts[0].time, 0.0);
    assert_eq!(pts[0].state, p.initial_state);
    for w in pts.windows(2) {
        assert!(w[1].time > w[0].time, "times must increase: {w:?}");
        assert_eq!(w[0].state.abs_diff(w[1].state), 1, "jumps are ±1: {w:?}");
    }
    for pt in pts {
        assert!(pt.state <= p.max_population);
        assert!(pt.time <= p.horizon);
    }
}

// ── Simulation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod simulate_tests {
    use super::*;
    use crate::simulate_birth_death;

    #[test]
    fn invariants_hold_across_seeds() {
        let p = params(15, 2.0, 1.0, 5, 20.0);
        for seed in 0..200 {
            let path = simulate(&p, &mut EventRng::new(seed));
            assert_well_formed(&path, &p);
        }
    }

    #[test]
    fn invariants_hold_from_boundaries() {
        for x0 in [0, 6] {
            let p = params(6, 0.7, 1.3, x0, 15.0);
            for seed in 0..100 {
                assert_well_formed(&simulate(&p, &mut EventRng::new(seed)), &p);
            }
        }
    }

    #[test]
    fn pure_birth_single_slot_absorbs_at_one() {
        // N=1, λ=1, μ=0: one birth, then state 1 has zero total rate.
        // P(first event after t=100) = e^-100, so every run sees the birth.
        let p = params(1, 1.0, 0.0, 0, 100.0);
        for seed in 0..500 {
            let path = simulate(&p, &mut EventRng::new(seed));
            assert_eq!(path.point_count(), 2, "seed {seed}: {path:?}");
            assert_eq!(path.final_state(), 1);
        }
    }

    #[test]
    fn zero_rates_give_single_point() {
        let p = params(10, 0.0, 0.0, 4, 50.0);
        let path = simulate(&p, &mut EventRng::new(1));
        assert_eq!(path.point_count(), 1);
        assert_eq!(path.event_count(), 0);
        assert_eq!(path.final_state(), 4);
    }

    #[test]
    fn empty_population_without_births_is_absorbing() {
        let p = params(10, 0.0, 3.0, 0, 50.0);
        let path = simulate(&p, &mut EventRng::new(1));
        assert_eq!(path.point_count(), 1);
        assert_eq!(path.final_state(), 0);
    }

    #[test]
    fn pure_death_runs_down_to_zero() {
        // 8 deaths at rates 8μ, 7μ, …; with μ=5 and T=1000 all happen.
        let p = params(8, 0.0, 5.0, 8, 1000.0);
        let path = simulate(&p, &mut EventRng::new(9));
        let states: Vec<u32> = path.states().collect();
        assert_eq!(states, vec![8, 7, 6, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn short_horizon_usually_cuts_path() {
        // Total rate 10 at x0; horizon 1e-6 leaves essentially no room for a jump.
        let p = params(10, 1.0, 1.0, 5, 1e-6);
        let path = simulate(&p, &mut EventRng::new(4));
        assert_eq!(path.point_count(), 1);
    }

    #[test]
    fn fixed_seed_is_bit_identical() {
        let p = params(15, 2.0, 1.0, 5, 100.0);
        let a = simulate(&p, &mut EventRng::new(2024));
        let b = simulate(&p, &mut EventRng::new(2024));
        assert_eq!(a, b);
        let bits_a: Vec<u64> = a.times().map(f64::to_bits).collect();
        let bits_b: Vec<u64> = b.times().map(f64::to_bits).collect();
        assert_eq!(bits_a, bits_b);
    }

    #[test]
    fn raw_entry_point_validates_before_drawing() {
        let mut rng = EventRng::new(5);
        let before = rng.clone().uniform01();
        assert!(simulate_birth_death(3, 1.0, 1.0, 4, 10.0, &mut rng).is_err());
        assert_eq!(rng.uniform01(), before, "rejected input must not consume randomness");
    }

    #[test]
    fn raw_entry_point_matches_validated_path() {
        let p = params(15, 2.0, 1.0, 5, 30.0);
        let a = simulate(&p, &mut EventRng::new(77));
        let b = simulate_birth_death(15, 2.0, 1.0, 5, 30.0, &mut EventRng::new(77)).unwrap();
        assert_eq!(a, b);
    }
}

// ── Trajectory helpers ────────────────────────────────────────────────────────

#[cfg(test)]
mod trajectory_tests {
    use super::*;

    fn sample() -> Trajectory {
        let mut t = Trajectory::start(2);
        t.push(0.5, 3);
        t.push(1.25, 2);
        t.push(4.0, 1);
        t
    }

    #[test]
    fn state_at_is_right_continuous() {
        let t = sample();
        assert_eq!(t.state_at(-0.1), None);
        assert_eq!(t.state_at(0.0), Some(2));
        assert_eq!(t.state_at(0.49), Some(2));
        assert_eq!(t.state_at(0.5), Some(3));
        assert_eq!(t.state_at(3.99), Some(2));
        assert_eq!(t.state_at(100.0), Some(1));
    }

    #[test]
    fn summary_accessors() {
        let t = sample();
        assert_eq!(t.initial_state(), 2);
        assert_eq!(t.final_state(), 1);
        assert_eq!(t.event_count(), 3);
        assert_eq!(t.times().collect::<Vec<_>>(), vec![0.0, 0.5, 1.25, 4.0]);
        assert_eq!((&t).into_iter().count(), 4);
    }
}

// ── Closed forms ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod theory_tests {
    use approx::assert_relative_eq;
    use sp_core::SpError;

    use super::*;
    use crate::{expected_final_state, expected_state, stationary_mean};

    #[test]
    fn no_elapsed_time_returns_initial_state() {
        for &(lambda, mu) in &[(2.0, 1.0), (0.3, 7.0), (1.0, 0.0), (0.0, 4.0)] {
            assert_eq!(expected_state(15, 15, lambda, mu, 0.0).unwrap(), 15.0);
            assert_relative_eq!(expected_state(4, 15, lambda, mu, 0.0).unwrap(), 4.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn long_run_reaches_stationary_mean() {
        let limit = stationary_mean(15, 2.0, 1.0).unwrap();
        assert_relative_eq!(limit, 10.0, epsilon = 1e-12);
        assert_relative_eq!(expected_state(0, 15, 2.0, 1.0, 50.0).unwrap(), limit, epsilon = 1e-9);
        assert_relative_eq!(expected_state(15, 15, 2.0, 1.0, 50.0).unwrap(), limit, epsilon = 1e-9);
    }

    #[test]
    fn pure_death_decays_exponentially() {
        // λ=0: E[X_t] = x e^{-μt}
        let v = expected_state(10, 10, 0.0, 0.5, 2.0).unwrap();
        assert_relative_eq!(v, 10.0 * (-1.0f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn single_slot_matches_two_state_chain() {
        // N=1, x=0: P(occupied at t) = λ/(λ+μ) (1 - e^{-(λ+μ)t})
        let (l, m, t): (f64, f64, f64) = (1.5, 0.5, 0.8);
        let expected = l / (l + m) * (1.0 - (-(l + m) * t).exp());
        assert_relative_eq!(expected_state(0, 1, l, m, t).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn evaluates_at_params_horizon() {
        let p = params(15, 2.0, 1.0, 5, 0.3);
        assert_eq!(
            expected_final_state(&p).unwrap(),
            expected_state(5, 15, 2.0, 1.0, 0.3).unwrap(),
        );
    }

    #[test]
    fn rejects_degenerate_inputs() {
        assert!(expected_state(0, 0, 1.0, 1.0, 1.0).is_err());
        assert!(expected_state(0, 5, 0.0, 0.0, 1.0).is_err());
        assert!(expected_state(6, 5, 1.0, 1.0, 1.0).is_err());
        assert!(expected_state(2, 5, 1.0, 1.0, -1.0).is_err());
        assert!(expected_state(2, 5, -1.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn frozen_chain_simulates_but_has_no_closed_form() {
        // λ = μ = 0 is a valid chain that never moves; only the closed forms refuse it.
        let p = params(15, 0.0, 0.0, 5, 10.0);
        let path = simulate(&p, &mut EventRng::new(3));
        assert_eq!(path.final_state(), 5);
        assert_eq!(path.event_count(), 0);
        assert!(matches!(
            expected_final_state(&p),
            Err(SpError::InvalidParameter { name: "birth_rate", .. })
        ));
        assert!(stationary_mean(15, 0.0, 0.0).is_err());
    }

    #[test]
    fn sample_mean_tracks_theory() {
        let p = params(15, 2.0, 1.0, 5, 0.4);
        let runs = 4000;
        let total: u64 = (0..runs)
            .map(|i| u64::from(simulate(&p, &mut EventRng::for_run(31, i)).final_state()))
            .sum();
        let mean = total as f64 / runs as f64;
        let theory = expected_final_state(&p).unwrap();
        // Population std is below 2 here; 5 SE ≈ 0.16.
        assert!((mean - theory).abs() < 0.2, "mean {mean} vs theory {theory}");
    }
}
