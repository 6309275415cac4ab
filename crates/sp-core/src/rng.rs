//! Per-run random event generator.
//!
//! # Determinism strategy
//!
//! Every simulation run owns one `EventRng`.  A batch of runs derives the
//! seed of run `i` as:
//!
//!   seed = batch_seed XOR (i * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive run indices across the seed space.  This means:
//!
//! - Runs never share generator state, so there is no cross-run correlation
//!   and no contention when a batch is spread over threads.
//! - Run `i` draws the same stream whether the batch executes sequentially
//!   or in parallel, and regardless of how many runs follow it.
//!
//! There is no global generator anywhere in the workspace.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp1};

use crate::{SpResult, validate};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Source of exponential waiting times and uniform event-type decisions for
/// a single simulation run.
///
/// `Exp(rate)` is sampled as `Exp(1) / rate`, so the same underlying stream
/// serves every rate a birth-death path visits.
#[derive(Debug, Clone)]
pub struct EventRng(SmallRng);

impl EventRng {
    /// Seed deterministically.  The same seed always yields the same stream.
    pub fn new(seed: u64) -> Self {
        EventRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from operating-system entropy.  Used when the caller asks for no
    /// particular seed.
    pub fn from_entropy() -> Self {
        EventRng(SmallRng::from_entropy())
    }

    /// The stream for run `run` of a batch seeded with `batch_seed`.
    pub fn for_run(batch_seed: u64, run: u64) -> Self {
        let seed = batch_seed ^ run.wrapping_mul(MIXING_CONSTANT);
        EventRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with other `rand` distributions.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// One draw from `Exp(rate)`.
    ///
    /// Fails with `InvalidParameter` unless `rate` is finite and `> 0`.
    pub fn exponential(&mut self, rate: f64) -> SpResult<f64> {
        let rate = validate::positive("rate", rate)?;
        Ok(self.standard_exponential() / rate)
    }

    /// Lazy, unbounded sequence of independent `Exp(rate)` draws.
    ///
    /// The rate is checked once, before the first draw.
    pub fn exponentials(&mut self, rate: f64) -> SpResult<impl Iterator<Item = f64> + '_> {
        let rate = validate::positive("rate", rate)?;
        Ok(Exp1.sample_iter(&mut self.0).map(move |x: f64| x / rate))
    }

    /// One draw from `Exp(1)`.
    ///
    /// Callers that have already validated a positive rate divide by it
    /// directly instead of going through [`exponential`](Self::exponential).
    #[inline]
    pub fn standard_exponential(&mut self) -> f64 {
        Exp1.sample(&mut self.0)
    }

    /// Uniform draw in `[0, 1)`.
    #[inline]
    pub fn uniform01(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    /// Shuffle `slice` in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
