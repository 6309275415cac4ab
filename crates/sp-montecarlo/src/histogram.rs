//! Equal-width histograms of batch samples.

use sp_core::validate;

use crate::{McError, McResult};

/// Counts of samples in `bins` equal-width bins spanning `[lower, upper]`.
///
/// The last bin is closed on the right so the maximum sample is counted.
/// When every sample is equal the range is widened to `value ± 0.5`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Histogram {
    pub lower:  f64,
    pub upper:  f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn from_samples(samples: &[f64], bins: usize) -> McResult<Self> {
        let bins = validate::at_least_one("bins", bins)?;
        if samples.is_empty() {
            return Err(McError::NoSamples { requested: 0 });
        }

        let (mut lower, mut upper) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        if lower == upper {
            lower -= 0.5;
            upper += 0.5;
        }

        let width = (upper - lower) / bins as f64;
        let mut counts = vec![0; bins];
        for &v in samples {
            let idx = (((v - lower) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }
        Ok(Self { lower, upper, counts })
    }

    pub fn bin_width(&self) -> f64 {
        (self.upper - self.lower) / self.counts.len() as f64
    }

    /// `(left edge, right edge, count)` per bin.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        let width = self.bin_width();
        self.counts.iter().enumerate().map(move |(i, &c)| {
            let left = self.lower + i as f64 * width;
            (left, left + width, c)
        })
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}
