//! Console lines printed while an inventory runs.
//!
//! Both functions take any `Write` sink so callers can capture the output;
//! the binary passes a locked stdout.

use std::io::{self, Write};
use std::path::Path;

/// Writes `<filename> written to <report>`.
pub fn progress(out: &mut impl Write, filename: &str, report: &Path) -> io::Result<()> {
    writeln!(out, "{} written to {}", filename, report.display())?;
    Ok(())
}

/// Writes the two-line success message naming the report path.
pub fn success(out: &mut impl Write, report: &Path) -> io::Result<()> {
    writeln!(out, "CSV file created successfully!")?;
    writeln!(out, "CSV file path: {}", report.display())?;
    Ok(())
}
