//! Sample statistics and the CLT confidence interval.

use crate::{McError, McResult, SampleSet};

/// Two-sided 95 % standard-normal quantile.
pub const Z_95: f64 = 1.96;

/// Summary of a Monte-Carlo batch.
///
/// The interval is `mean ± 1.96 · std / √n` with the population (not
/// Bessel-corrected) standard deviation: a normal approximation that is
/// adequate for the batch sizes these simulators run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonteCarloResult {
    /// Samples the statistics are computed from (always ≥ 1).
    pub sample_count:        usize,
    /// Runs executed, including any that produced no sample.
    pub requested:           usize,
    /// Runs excluded because they produced no sample.
    pub missing:             usize,
    pub empirical_mean:      f64,
    pub empirical_std:       f64,
    pub confidence_interval: (f64, f64),
}

impl MonteCarloResult {
    /// Summarise plain samples (no runs missing).
    pub fn from_samples(values: &[f64]) -> McResult<Self> {
        summarise(values, values.len(), 0)
    }

    pub fn from_sample_set(set: &SampleSet) -> McResult<Self> {
        summarise(&set.values, set.requested, set.missing)
    }

    /// `std / √n`.
    pub fn standard_error(&self) -> f64 {
        self.empirical_std / (self.sample_count as f64).sqrt()
    }

    /// Whether `value` lies inside the confidence interval (inclusive).
    pub fn contains(&self, value: f64) -> bool {
        let (lower, upper) = self.confidence_interval;
        lower <= value && value <= upper
    }

    /// `|mean - reference| / |reference|`.
    pub fn relative_error(&self, reference: f64) -> f64 {
        (self.empirical_mean - reference).abs() / reference.abs()
    }
}

fn summarise(values: &[f64], requested: usize, missing: usize) -> McResult<MonteCarloResult> {
    if values.is_empty() {
        return Err(McError::NoSamples { requested });
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std = variance.sqrt();
    let half_width = Z_95 * std / n.sqrt();

    Ok(MonteCarloResult {
        sample_count:        values.len(),
        requested,
        missing,
        empirical_mean:      mean,
        empirical_std:       std,
        confidence_interval: (mean - half_width, mean + half_width),
    })
}
