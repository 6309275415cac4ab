//! `sp-montecarlo`: repeated independent runs and their summary statistics.
//!
//! # Batch layout
//!
//! ```text
//! for run in 0..sample_count:            (Rayon with the `parallel` feature)
//!   rng    = EventRng::for_run(seed, run)
//!   sample = simulate_fn(&mut rng)        → Option<f64>
//!   observer.on_sample(completed, total)
//! apply MissingPolicy to the `None`s
//! mean, population std, mean ± 1.96·std/√n
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the batch on Rayon's thread pool.                 |
//! | `serde`    | `Serialize` for `MonteCarloResult` and `Histogram`.    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sp_montecarlo::{MonteCarlo, NoopObserver};
//!
//! let result = MonteCarlo::new(1_000)
//!     .seed(42)
//!     .run(|rng| f64::from(sp_birth_death::simulate(&params, rng).final_state()), &NoopObserver)?;
//! println!("{:?}", result.confidence_interval);
//! ```

pub mod batch;
pub mod error;
pub mod histogram;
pub mod observer;
pub mod stats;


pub use batch::{MissingPolicy, MonteCarlo, SampleSet, run_monte_carlo};
pub use error::{McError, McResult};
pub use histogram::Histogram;
pub use observer::{BatchObserver, LogProgress, NoopObserver, ProgressCounter};
pub use stats::{MonteCarloResult, Z_95};
