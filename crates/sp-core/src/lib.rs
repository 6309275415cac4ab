//! `sp-core`: foundational types for the stochastic-process simulators.
//!
//! This crate is a dependency of every other `sp-*` crate.  It has no `sp-*`
//! dependencies and only a few external ones (`rand`, `rand_distr`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`rng`]      | `EventRng`, one independent stream per simulation run   |
//! | [`params`]   | `BirthDeathParams`, `CrossingParams`, `PercolationParams` |
//! | [`validate`] | Range checks shared by constructors and closed forms     |
//! | [`error`]    | `SpError`, `SpResult`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the parameter structs.   |

pub mod error;
pub mod params;
pub mod rng;
pub mod validate;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SpError, SpResult};
pub use params::{BirthDeathParams, CrossingParams, PercolationParams};
pub use rng::EventRng;
