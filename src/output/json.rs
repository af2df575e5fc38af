//! JSON report output.

use crate::models::Report;
use std::error::Error;
use std::io::Write;

/// Write `report` as indented JSON followed by a newline.
pub fn write_report<W: Write>(report: &Report, out: &mut W) -> Result<(), Box<dyn Error>> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
