//! `sp-crossing`: can a pedestrian cross the road?
//!
//! Vehicles pass a point as a Poisson stream of rate `λ`.  A pedestrian
//! needs an empty stretch of `S` time units.  This crate generates the
//! arrival stream, derives the gaps between vehicles, finds the first gap
//! long enough to cross, and provides the closed-form mean of that time.
//!
//! | Item                       | Contents                                        |
//! |----------------------------|-------------------------------------------------|
//! | [`stream`]                 | `ArrivalStream`, `GapSet`, `CrossingRun`, `simulate` |
//! | [`first`]                  | `LeadIn`, `first_crossing`, `first_safe_crossing`   |
//! | [`theory`]                 | `expected_first_crossing`                       |

pub mod first;
pub mod stream;
pub mod theory;


pub use first::{LeadIn, first_crossing, first_safe_crossing};
pub use stream::{ArrivalStream, CrossingRun, GapSet, simulate, simulate_arrivals};
pub use theory::expected_first_crossing;
