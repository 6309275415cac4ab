//! Arrival generation and gap extraction.

use sp_core::{CrossingParams, EventRng, SpResult};

// ── ArrivalStream ─────────────────────────────────────────────────────────────

/// Vehicle arrival times, strictly increasing.
///
/// Generation stops at the first arrival at or past the horizon, and that
/// arrival is kept, so the stream may end beyond the horizon.  Use
/// [`within_horizon`](Self::within_horizon) for the trimmed view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArrivalStream {
    pub(crate) times: Vec<f64>,
}

impl ArrivalStream {
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Arrivals at or before `horizon`.
    pub fn within_horizon(&self, horizon: f64) -> &[f64] {
        let end = self.times.partition_point(|&t| t <= horizon);
        &self.times[..end]
    }

    /// Successive differences between arrivals.
    pub fn gaps(&self) -> GapSet {
        GapSet { gaps: self.times.windows(2).map(|w| w[1] - w[0]).collect() }
    }
}

// ── GapSet ────────────────────────────────────────────────────────────────────

/// Inter-arrival gaps; `gaps[i]` separates arrivals `i` and `i + 1`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GapSet {
    pub(crate) gaps: Vec<f64>,
}

impl GapSet {
    pub fn as_slice(&self) -> &[f64] {
        &self.gaps
    }

    pub fn len(&self) -> usize {
        self.gaps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gaps.is_empty()
    }

    /// Mean gap length, `None` when there are no gaps.
    pub fn mean(&self) -> Option<f64> {
        if self.gaps.is_empty() {
            return None;
        }
        Some(self.gaps.iter().sum::<f64>() / self.gaps.len() as f64)
    }

    /// Number of gaps of length `min_gap` or more.
    pub fn count_at_least(&self, min_gap: f64) -> usize {
        self.gaps.iter().filter(|&&g| g >= min_gap).count()
    }

    /// Index of the first gap of length `min_gap` or more.
    pub fn first_at_least(&self, min_gap: f64) -> Option<usize> {
        self.gaps.iter().position(|&g| g >= min_gap)
    }
}

// ── CrossingRun ───────────────────────────────────────────────────────────────

/// Everything one road-crossing run produces.
#[derive(Clone, Debug, PartialEq)]
pub struct CrossingRun {
    pub arrivals:       ArrivalStream,
    pub gaps:           GapSet,
    /// Number of gaps of at least `min_gap`.
    pub safe_crossings: usize,
}

/// Generate one arrival stream and its gaps.
///
/// `params` must already be valid (see [`CrossingParams::new`]).
pub fn simulate(params: &CrossingParams, rng: &mut EventRng) -> CrossingRun {
    let mut clock = 0.0;
    let mut times = Vec::new();
    while clock < params.horizon {
        clock += rng.standard_exponential() / params.arrival_rate;
        times.push(clock);
    }

    let arrivals = ArrivalStream { times };
    let gaps = arrivals.gaps();
    let safe_crossings = gaps.count_at_least(params.min_gap);
    CrossingRun { arrivals, gaps, safe_crossings }
}

/// Validate the raw parameters, then [`simulate`].
///
/// No random draw happens if validation fails.
pub fn simulate_arrivals(
    arrival_rate: f64,
    min_gap:      f64,
    horizon:      f64,
    rng:          &mut EventRng,
) -> SpResult<CrossingRun> {
    let params = CrossingParams::new(arrival_rate, min_gap, horizon)?;
    Ok(simulate(&params, rng))
}
