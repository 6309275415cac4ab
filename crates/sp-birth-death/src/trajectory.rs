//! Sample paths of the birth-death chain.

/// One recorded jump: the chain entered `state` at `time`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectoryPoint {
    pub time:  f64,
    pub state: u32,
}

/// A right-continuous step path, stored as its jump points.
///
/// The first point is always `(0, initial_state)`.  Times are strictly
/// increasing and consecutive states differ by exactly one.  The last state
/// holds until the horizon; no closing point is recorded for it.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    pub(crate) fn start(initial_state: u32) -> Self {
        Self { points: vec![TrajectoryPoint { time: 0.0, state: initial_state }] }
    }

    pub(crate) fn push(&mut self, time: f64, state: u32) {
        debug_assert!(time > self.last().time, "jump times must increase");
        self.points.push(TrajectoryPoint { time, state });
    }

    fn last(&self) -> &TrajectoryPoint {
        // Never empty: `start` seeds the first point.
        &self.points[self.points.len() - 1]
    }

    /// All recorded points, in time order.
    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    /// Number of recorded points (always ≥ 1).
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of jumps before the horizon.
    pub fn event_count(&self) -> usize {
        self.points.len() - 1
    }

    pub fn initial_state(&self) -> u32 {
        self.points[0].state
    }

    /// State held at the horizon.
    pub fn final_state(&self) -> u32 {
        self.last().state
    }

    /// State occupied at time `t`, or `None` for `t < 0`.
    ///
    /// Jumps are right-continuous: at exactly a jump time the new state is
    /// returned.
    pub fn state_at(&self, t: f64) -> Option<u32> {
        let idx = self.points.partition_point(|p| p.time <= t);
        idx.checked_sub(1).map(|i| self.points[i].state)
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.time)
    }

    pub fn states(&self) -> impl Iterator<Item = u32> + '_ {
        self.points.iter().map(|p| p.state)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrajectoryPoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectoryPoint;
    type IntoIter = std::slice::Iter<'a, TrajectoryPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
