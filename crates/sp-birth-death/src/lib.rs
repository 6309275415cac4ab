//! `sp-birth-death`: the bounded linear birth-death chain.
//!
//! The chain lives on `{0, …, N}`.  From state `n` it jumps to `n + 1` at
//! rate `(N - n)λ` and to `n - 1` at rate `nμ`.  Paths are sampled exactly
//! (Gillespie): draw the holding time from the total rate, then pick the
//! jump direction in proportion to the two rates.
//!
//! # Quick-start
//!
//! ```rust
//! use sp_birth_death::{expected_state, simulate_birth_death};
//! use sp_core::EventRng;
//!
//! let mut rng = EventRng::new(42);
//! let path = simulate_birth_death(15, 2.0, 1.0, 5, 100.0, &mut rng).unwrap();
//! assert!(path.final_state() <= 15);
//!
//! let mean = expected_state(5, 15, 2.0, 1.0, 100.0).unwrap();
//! assert!((mean - 10.0).abs() < 1e-9);
//! ```

pub mod simulate;
pub mod theory;
pub mod trajectory;

#[cfg(test)]
mod tests;

pub use simulate::{simulate, simulate_birth_death};
pub use theory::{expected_final_state, expected_state, stationary_mean};
pub use trajectory::{Trajectory, TrajectoryPoint};
