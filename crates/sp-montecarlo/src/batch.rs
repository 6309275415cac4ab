//! The batch runner.

use std::sync::atomic::{AtomicUsize, Ordering};

use sp_core::{EventRng, validate};
use tracing::{debug, info, warn};

use crate::{BatchObserver, McError, McResult, MonteCarloResult, NoopObserver};

/// What to do with runs that produce no sample (e.g. no safe crossing
/// before the horizon).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MissingPolicy {
    /// Drop them from the statistics and report how many were dropped in
    /// [`MonteCarloResult::missing`].
    #[default]
    Exclude,
    /// Reject the whole batch with [`McError::MissingSamples`].
    Fail,
}

/// The samples a batch kept, plus the bookkeeping needed to interpret them.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSet {
    /// Kept samples, in run-index order.
    pub values:    Vec<f64>,
    /// Runs executed.
    pub requested: usize,
    /// Runs that produced no sample and were excluded.
    pub missing:   usize,
    /// Seed the per-run streams were derived from.
    pub seed:      u64,
}

/// Fluent configuration for a batch of independent simulation runs.
///
/// # Example
///
/// ```rust,ignore
/// let result = MonteCarlo::new(10_000)
///     .seed(7)
///     .missing(MissingPolicy::Fail)
///     .run(|rng| first_crossing(&params, LeadIn::FromOrigin, rng), &ProgressCounter::new())?;
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarlo {
    sample_count: usize,
    seed:         Option<u64>,
    missing:      MissingPolicy,
}

impl MonteCarlo {
    /// A batch of `sample_count` runs with a fresh random seed and
    /// [`MissingPolicy::Exclude`].
    pub fn new(sample_count: usize) -> Self {
        Self { sample_count, seed: None, missing: MissingPolicy::default() }
    }

    /// Fix the batch seed.  Run `i` then always sees `EventRng::for_run(seed, i)`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn missing(mut self, policy: MissingPolicy) -> Self {
        self.missing = policy;
        self
    }

    /// Execute the batch and return the kept samples.
    ///
    /// `simulate_fn` returns anything convertible to `Option<f64>`: an `f64`
    /// for processes that always yield a statistic, `None` for a run with no
    /// outcome.
    pub fn collect<F, S, O>(&self, simulate_fn: F, observer: &O) -> McResult<SampleSet>
    where
        F: Fn(&mut EventRng) -> S + Sync,
        S: Into<Option<f64>>,
        O: BatchObserver + ?Sized,
    {
        let requested = validate::at_least_one("sample_count", self.sample_count)?;
        let seed = self.seed.unwrap_or_else(rand::random);
        debug!(requested, seed, policy = ?self.missing, "starting Monte-Carlo batch");

        let raw = draw(requested, seed, &simulate_fn, observer);

        let missing = raw.iter().filter(|s| s.is_none()).count();
        if missing > 0 {
            match self.missing {
                MissingPolicy::Fail => {
                    return Err(McError::MissingSamples { missing, requested });
                }
                MissingPolicy::Exclude => {
                    warn!(missing, requested, "excluding runs that produced no sample");
                }
            }
        }

        let values: Vec<f64> = raw.into_iter().flatten().collect();
        if values.is_empty() {
            return Err(McError::NoSamples { requested });
        }
        Ok(SampleSet { values, requested, missing, seed })
    }

    /// Execute the batch and summarise it.
    pub fn run<F, S, O>(&self, simulate_fn: F, observer: &O) -> McResult<MonteCarloResult>
    where
        F: Fn(&mut EventRng) -> S + Sync,
        S: Into<Option<f64>>,
        O: BatchObserver + ?Sized,
    {
        let samples = self.collect(simulate_fn, observer)?;
        let result = MonteCarloResult::from_sample_set(&samples)?;
        info!(
            samples = result.sample_count,
            missing = result.missing,
            mean = result.empirical_mean,
            std = result.empirical_std,
            "Monte-Carlo batch complete"
        );
        Ok(result)
    }
}

/// Run `simulate_fn` `sample_count` times with fresh streams and default
/// settings: entropy seed, [`MissingPolicy::Exclude`], no progress callbacks.
pub fn run_monte_carlo<F, S>(simulate_fn: F, sample_count: usize) -> McResult<MonteCarloResult>
where
    F: Fn(&mut EventRng) -> S + Sync,
    S: Into<Option<f64>>,
{
    MonteCarlo::new(sample_count).run(simulate_fn, &NoopObserver)
}

/// One sample per run, in run-index order.
fn draw<F, S, O>(total: usize, seed: u64, simulate_fn: &F, observer: &O) -> Vec<Option<f64>>
where
    F: Fn(&mut EventRng) -> S + Sync,
    S: Into<Option<f64>>,
    O: BatchObserver + ?Sized,
{
    let completed = AtomicUsize::new(0);
    let one_run = |run: usize| -> Option<f64> {
        let mut rng = EventRng::for_run(seed, run as u64);
        let sample = simulate_fn(&mut rng).into();
        let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
        observer.on_sample(done, total);
        sample
    };

    #[cfg(not(feature = "parallel"))]
    {
        (0..total).map(one_run).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        // Indexed collect keeps run order, so the output matches the
        // sequential path bit for bit.
        (0..total).into_par_iter().map(one_run).collect()
    }
}
