//! CSV backend.

use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::{CsvTable, OutputResult};

/// Write `table` (header first) to `out` and flush.
pub fn write_table<T, W>(table: &T, out: W) -> OutputResult<()>
where
    T: CsvTable,
    W: Write,
{
    let mut writer = Writer::from_writer(out);
    writer.write_record(table.header())?;
    table.write_rows(&mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) the file at `path` and write `table` to it.
pub fn write_table_file<T>(table: &T, path: &Path) -> OutputResult<()>
where
    T: CsvTable,
{
    let mut writer = Writer::from_path(path)?;
    writer.write_record(table.header())?;
    table.write_rows(&mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Render `table` as an in-memory CSV document.
pub fn to_csv_string<T>(table: &T) -> OutputResult<String>
where
    T: CsvTable,
{
    let mut buf = Vec::new();
    write_table(table, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}
