//! The `CsvTable` trait and its implementations for result types.

use std::io::Write;

use csv::Writer;
use sp_birth_death::Trajectory;
use sp_crossing::GapSet;

/// A result that exports as a header row followed by data rows.
pub trait CsvTable {
    fn header(&self) -> &'static [&'static str];

    /// Write the data rows (not the header).
    fn write_rows<W: Write>(&self, out: &mut Writer<W>) -> csv::Result<()>;
}

impl CsvTable for Trajectory {
    fn header(&self) -> &'static [&'static str] {
        &["Time", "State"]
    }

    fn write_rows<W: Write>(&self, out: &mut Writer<W>) -> csv::Result<()> {
        for point in self {
            out.write_record(&[point.time.to_string(), point.state.to_string()])?;
        }
        Ok(())
    }
}

impl CsvTable for GapSet {
    fn header(&self) -> &'static [&'static str] {
        &["Gap"]
    }

    fn write_rows<W: Write>(&self, out: &mut Writer<W>) -> csv::Result<()> {
        for gap in self.as_slice() {
            out.write_record(&[gap.to_string()])?;
        }
        Ok(())
    }
}

/// Raw Monte-Carlo samples (final states, crossing times, …).
#[derive(Clone, Copy, Debug)]
pub struct Samples<'a>(pub &'a [f64]);

impl CsvTable for Samples<'_> {
    fn header(&self) -> &'static [&'static str] {
        &["Sample"]
    }

    fn write_rows<W: Write>(&self, out: &mut Writer<W>) -> csv::Result<()> {
        for sample in self.0 {
            out.write_record(&[sample.to_string()])?;
        }
        Ok(())
    }
}
