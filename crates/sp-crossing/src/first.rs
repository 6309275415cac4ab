//! Time of the first safe crossing.

use sp_core::{CrossingParams, EventRng, SpResult};

use crate::stream::{CrossingRun, simulate};

/// Whether the stretch of road before the first vehicle counts as a gap.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LeadIn {
    /// The pedestrian arrives at time 0; the interval `[0, first arrival)`
    /// is a usable gap.  This is the setting the closed form
    /// [`expected_first_crossing`](crate::expected_first_crossing) describes.
    #[default]
    FromOrigin,
    /// Only gaps between two vehicles count; the wait before the first
    /// vehicle is lost.
    AfterFirstArrival,
}

impl CrossingRun {
    /// Earliest time a crossing that started on a gap of at least `min_gap`
    /// is complete: the arrival opening the gap, plus `min_gap`.
    ///
    /// `None` when the generated stream holds no such gap.
    pub fn first_safe_crossing(&self, min_gap: f64, lead_in: LeadIn) -> Option<f64> {
        let times = self.arrivals.times();
        let first = *times.first()?;
        if lead_in == LeadIn::FromOrigin && first >= min_gap {
            return Some(min_gap);
        }
        self.gaps.first_at_least(min_gap).map(|i| times[i] + min_gap)
    }
}

/// Run one stream and return its first safe crossing time.
///
/// `params` must already be valid.
pub fn first_crossing(params: &CrossingParams, lead_in: LeadIn, rng: &mut EventRng) -> Option<f64> {
    simulate(params, rng).first_safe_crossing(params.min_gap, lead_in)
}

/// Validate the raw parameters, then [`first_crossing`].
///
/// The outer `Result` rejects bad input; the inner `Option` is `None` when
/// no crossing occurred, which is a normal outcome.
///
/// # Lead-in
///
/// [`LeadIn::FromOrigin`] (the default) matches
/// [`expected_first_crossing`](crate::expected_first_crossing).  Scanning
/// only the gaps between consecutive vehicles, as a plain gap-list search
/// does, requires [`LeadIn::AfterFirstArrival`]; its mean is larger by one
/// inter-arrival time, `1 / λ`.
pub fn first_safe_crossing(
    arrival_rate: f64,
    min_gap:      f64,
    horizon:      f64,
    lead_in:      LeadIn,
    rng:          &mut EventRng,
) -> SpResult<Option<f64>> {
    let params = CrossingParams::new(arrival_rate, min_gap, horizon)?;
    Ok(first_crossing(&params, lead_in, rng))
}
