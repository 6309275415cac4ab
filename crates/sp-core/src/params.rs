//! Immutable, validated parameter bundles.
//!
//! The constructors check every field before returning, so a value obtained
//! from [`BirthDeathParams::new`] or [`CrossingParams::new`] can be handed to
//! a simulator without further checks.  Values built with a struct literal
//! or deserialised from a config file should go through `validate()` first.

use crate::{SpError, SpResult, validate};

// ── BirthDeathParams ──────────────────────────────────────────────────────────

/// Parameters of the linear birth-death chain on `{0, …, N}`.
///
/// At state `n` the birth rate is `(N - n) * birth_rate` and the death rate
/// is `n * death_rate`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BirthDeathParams {
    /// Population ceiling `N`.  No births occur at `N`.
    pub max_population: u32,
    /// Per-slot birth rate `λ`.
    pub birth_rate: f64,
    /// Per-individual death rate `μ`.
    pub death_rate: f64,
    /// Population at time 0, in `0..=N`.
    pub initial_state: u32,
    /// Simulation end time `T`.
    pub horizon: f64,
}

impl BirthDeathParams {
    pub fn new(
        max_population: u32,
        birth_rate:     f64,
        death_rate:     f64,
        initial_state:  u32,
        horizon:        f64,
    ) -> SpResult<Self> {
        let params = Self { max_population, birth_rate, death_rate, initial_state, horizon };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> SpResult<()> {
        if self.max_population == 0 {
            return Err(SpError::invalid("max_population", "must be at least 1"));
        }
        validate::non_negative("birth_rate", self.birth_rate)?;
        validate::non_negative("death_rate", self.death_rate)?;
        if self.initial_state > self.max_population {
            return Err(SpError::invalid(
                "initial_state",
                format!("{} is outside [0, {}]", self.initial_state, self.max_population),
            ));
        }
        validate::positive("horizon", self.horizon)?;
        Ok(())
    }

    /// Total event rate out of state `n`: `(birth, death)`.
    ///
    /// States above `N` have no birth slots left, so their birth rate is 0.
    #[inline]
    pub fn rates_at(&self, n: u32) -> (f64, f64) {
        let birth = f64::from(self.max_population.saturating_sub(n)) * self.birth_rate;
        let death = f64::from(n) * self.death_rate;
        (birth, death)
    }
}

// ── CrossingParams ────────────────────────────────────────────────────────────

/// Parameters of the road-crossing model: Poisson traffic at `arrival_rate`
/// vehicles per unit time, and a pedestrian who needs `min_gap` time units
/// of empty road.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrossingParams {
    /// Vehicle arrival rate `λ`.
    pub arrival_rate: f64,
    /// Gap length `S` the pedestrian needs.
    pub min_gap: f64,
    /// Arrivals are generated until one reaches `horizon`.
    pub horizon: f64,
}

impl CrossingParams {
    pub fn new(arrival_rate: f64, min_gap: f64, horizon: f64) -> SpResult<Self> {
        let params = Self { arrival_rate, min_gap, horizon };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> SpResult<()> {
        validate::positive("arrival_rate", self.arrival_rate)?;
        validate::positive("min_gap", self.min_gap)?;
        validate::positive("horizon", self.horizon)?;
        Ok(())
    }
}

// ── PercolationParams ─────────────────────────────────────────────────────────

/// Side length of the square grid used by the site-percolation model.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PercolationParams {
    /// The grid has `grid_size × grid_size` sites.
    pub grid_size: u32,
}

impl PercolationParams {
    pub fn new(grid_size: u32) -> SpResult<Self> {
        let params = Self { grid_size };
        params.validate()?;
        Ok(params)
    }

    /// `grid_size` must be at least 1, and the site count plus the two
    /// virtual sites must fit a `u32` index.
    pub fn validate(&self) -> SpResult<()> {
        if self.grid_size == 0 {
            return Err(SpError::invalid("grid_size", "must be at least 1"));
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(SpError::invalid(
                "grid_size",
                format!("{} exceeds the maximum of {MAX_GRID_SIZE}", self.grid_size),
            ));
        }
        Ok(())
    }

    /// Number of sites, `grid_size²`.
    #[inline]
    pub fn site_count(&self) -> usize {
        let n = self.grid_size as usize;
        n * n
    }
}

/// Largest side for which `n² + 2` still fits a `u32`.
pub const MAX_GRID_SIZE: u32 = 65_535;
