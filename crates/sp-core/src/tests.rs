//! Unit tests for sp-core primitives.

#[cfg(test)]
mod rng {
    use crate::{EventRng, SpError};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = EventRng::new(12345);
        let mut r2 = EventRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.standard_exponential(), r2.standard_exponential());
            assert_eq!(r1.uniform01(), r2.uniform01());
        }
    }

    #[test]
    fn adjacent_runs_differ() {
        let mut r0 = EventRng::for_run(1, 0);
        let mut r1 = EventRng::for_run(1, 1);
        assert_ne!(r0.uniform01(), r1.uniform01(), "streams for adjacent runs should diverge");
    }

    #[test]
    fn for_run_is_reproducible() {
        let mut a = EventRng::for_run(99, 17);
        let mut b = EventRng::for_run(99, 17);
        let xs: Vec<f64> = (0..10).map(|_| a.standard_exponential()).collect();
        let ys: Vec<f64> = (0..10).map(|_| b.standard_exponential()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn uniform_in_unit_interval() {
        let mut rng = EventRng::new(0);
        for _ in 0..1000 {
            let u = rng.uniform01();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn exponential_rejects_bad_rates() {
        let mut rng = EventRng::new(0);
        for rate in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                rng.exponential(rate),
                Err(SpError::InvalidParameter { name: "rate", .. })
            ));
        }
    }

    #[test]
    fn exponential_is_positive() {
        let mut rng = EventRng::new(3);
        for _ in 0..1000 {
            assert!(rng.exponential(2.5).unwrap() >= 0.0);
        }
    }

    #[test]
    fn exponential_mean_close_to_inverse_rate() {
        let mut rng = EventRng::new(7);
        let n = 100_000;
        let mean = rng.exponentials(4.0).unwrap().take(n).sum::<f64>() / n as f64;
        // SE of the mean is 0.25 / sqrt(1e5) ≈ 0.0008
        assert!((mean - 0.25).abs() < 0.005, "got {mean}");
    }

    #[test]
    fn shuffle_is_a_seeded_permutation() {
        let mut a: Vec<u32> = (0..50).collect();
        let mut b = a.clone();
        EventRng::new(8).shuffle(&mut a);
        EventRng::new(8).shuffle(&mut b);
        assert_eq!(a, b);
        assert_ne!(a, (0..50).collect::<Vec<u32>>());
        a.sort_unstable();
        assert_eq!(a, (0..50).collect::<Vec<u32>>());
    }

    #[test]
    fn iterator_matches_single_draws() {
        let mut a = EventRng::new(11);
        let mut b = EventRng::new(11);
        let lazy: Vec<f64> = a.exponentials(3.0).unwrap().take(5).collect();
        let eager: Vec<f64> = (0..5).map(|_| b.exponential(3.0).unwrap()).collect();
        for (x, y) in lazy.iter().zip(&eager) {
            approx::assert_relative_eq!(*x, *y, max_relative = 1e-12);
        }
    }
}

#[cfg(test)]
mod params {
    use crate::{BirthDeathParams, CrossingParams, SpError};

    #[test]
    fn birth_death_accepts_boundaries() {
        assert!(BirthDeathParams::new(15, 2.0, 1.0, 0, 100.0).is_ok());
        assert!(BirthDeathParams::new(15, 2.0, 1.0, 15, 100.0).is_ok());
        assert!(BirthDeathParams::new(1, 0.0, 0.0, 0, 0.1).is_ok());
    }

    #[test]
    fn birth_death_rejects_out_of_range() {
        let err = BirthDeathParams::new(5, 1.0, 1.0, 6, 10.0).unwrap_err();
        assert!(matches!(err, SpError::InvalidParameter { name: "initial_state", .. }));

        let err = BirthDeathParams::new(0, 1.0, 1.0, 0, 10.0).unwrap_err();
        assert!(matches!(err, SpError::InvalidParameter { name: "max_population", .. }));

        let err = BirthDeathParams::new(5, -1.0, 1.0, 0, 10.0).unwrap_err();
        assert!(matches!(err, SpError::InvalidParameter { name: "birth_rate", .. }));

        let err = BirthDeathParams::new(5, 1.0, 1.0, 0, -3.0).unwrap_err();
        assert!(matches!(err, SpError::InvalidParameter { name: "horizon", .. }));
    }

    #[test]
    fn rates_follow_linear_convention() {
        let p = BirthDeathParams::new(10, 2.0, 0.5, 3, 1.0).unwrap();
        assert_eq!(p.rates_at(0), (20.0, 0.0));
        assert_eq!(p.rates_at(4), (12.0, 2.0));
        assert_eq!(p.rates_at(10), (0.0, 5.0));
    }

    #[test]
    fn percolation_grid_bounds() {
        use crate::params::MAX_GRID_SIZE;
        use crate::PercolationParams;

        assert_eq!(PercolationParams::new(1).unwrap().site_count(), 1);
        assert_eq!(PercolationParams::new(20).unwrap().site_count(), 400);
        assert!(PercolationParams::new(MAX_GRID_SIZE).is_ok());
        let err = PercolationParams::new(0).unwrap_err();
        assert!(matches!(err, SpError::InvalidParameter { name: "grid_size", .. }));
        assert!(PercolationParams::new(MAX_GRID_SIZE + 1).is_err());
    }

    #[test]
    fn rates_above_ceiling_have_no_births() {
        let p = BirthDeathParams::new(10, 2.0, 0.5, 4, 1.0).unwrap();
        assert_eq!(p.rates_at(12), (0.0, 6.0));
        assert_eq!(p.rates_at(u32::MAX).0, 0.0);
    }

    #[test]
    fn crossing_rejects_non_positive() {
        assert!(CrossingParams::new(1.0, 2.0, 60.0).is_ok());
        assert!(CrossingParams::new(0.0, 2.0, 60.0).is_err());
        assert!(CrossingParams::new(1.0, 0.0, 60.0).is_err());
        assert!(CrossingParams::new(1.0, 2.0, 0.0).is_err());
    }

    #[test]
    fn error_message_names_parameter() {
        let err = CrossingParams::new(-2.0, 2.0, 60.0).unwrap_err();
        assert!(err.to_string().contains("arrival_rate"), "got {err}");
    }
}
