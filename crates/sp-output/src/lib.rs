//! `sp-output`: delimited-text export of simulation results.
//!
//! | Table                 | Header        | One row per        |
//! |-----------------------|---------------|--------------------|
//! | `Trajectory`          | `Time,State`  | recorded jump      |
//! | `GapSet`              | `Gap`         | inter-arrival gap  |
//! | [`Samples`]           | `Sample`      | Monte-Carlo sample |
//!
//! Every table implements [`CsvTable`] and can be written to any
//! `io::Write`, to a file, or to an in-memory string for download.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sp_output::{to_csv_string, write_table_file};
//!
//! write_table_file(&trajectory, Path::new("birth_death_simulation.csv"))?;
//! let text = to_csv_string(&run.gaps)?;
//! ```

pub mod csv;
pub mod error;
pub mod table;


pub use crate::csv::{to_csv_string, write_table, write_table_file};
pub use error::{OutputError, OutputResult};
pub use table::{CsvTable, Samples};
