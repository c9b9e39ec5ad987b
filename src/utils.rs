//! Utility functions for the `fileinv` inventory tool.
//!
//! This module provides:
//! - Hidden-file detection and extension derivation from base names
//! - Extension filter parsing and normalization
//! - Report file naming and default output directory resolution

use crate::error::InventoryError;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Date format used in report file names (`DD-MM-YYYY`).
pub const REPORT_DATE_FORMAT: &str = "%d-%m-%Y";

/// Returns true if a base name marks a hidden file (leading `.`).
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Returns the lower-cased extension of a base name, including the leading `.`.
///
/// The extension runs from the last `.` to the end of the name, so
/// `"a.TAR.GZ"` yields `".gz"`. Names without a `.` yield an empty string.
pub fn extension_of(name: &str) -> String {
    match name.rfind('.') {
        Some(idx) => name[idx..].to_lowercase(),
        None => String::new(),
    }
}

/// Normalizes one user-supplied extension into filter form.
///
/// Trims whitespace, lower-cases and adds the leading `.` if missing.
/// A piece that is empty after trimming stays `""`, the extension of files
/// without a `.`; a lone `"."` stays `"."`, the extension of names ending in one.
///
/// # Arguments
/// * `raw` - One piece of the user's extension list, as typed
///
/// # Returns
/// The normalized filter entry, comparable with [`extension_of`].
pub fn normalize_extension(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    if lowered.is_empty() || lowered.starts_with('.') {
        lowered
    } else {
        format!(".{}", lowered)
    }
}

/// Builds an extension filter set from a sequence of raw pieces.
///
/// Every piece becomes an entry, so a non-empty sequence never yields the
/// empty "match everything" set.
pub fn extension_set<I, S>(pieces: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    pieces
        .into_iter()
        .map(|p| normalize_extension(p.as_ref()))
        .collect()
}

/// Parses a comma-separated extension list as typed at the prompt.
///
/// An empty (or whitespace-only) line means "no filter" and yields an empty set.
/// Otherwise every comma-separated piece is kept, including empty ones:
/// `","` selects files without an extension.
pub fn parse_extension_list(input: &str) -> BTreeSet<String> {
    let input = input.trim();
    if input.is_empty() {
        return BTreeSet::new();
    }
    extension_set(input.split(','))
}

/// Returns the name used as the report's prefix for a scan root.
///
/// Uses the final component of the path as given. Roots without one
/// (`.`, `..`, `/`) fall back to the canonicalized path's final component,
/// then to `"root"`.
pub fn root_base_name(root: &Path) -> String {
    if let Some(name) = root.file_name() {
        return name.to_string_lossy().into_owned();
    }

    root.canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "root".to_string())
}

/// Formats the report file name: `<base-name>_<DD-MM-YYYY>.csv`.
pub fn report_file_name(root: &Path, date: NaiveDate) -> String {
    format!(
        "{}_{}.csv",
        root_base_name(root),
        date.format(REPORT_DATE_FORMAT)
    )
}

/// Returns `<home>/Downloads`, the default report directory.
///
/// The directory is not created here.
///
/// # Errors
/// [`InventoryError::HomeDirUnavailable`] if the home directory cannot be determined.
pub fn default_output_dir() -> Result<PathBuf, InventoryError> {
    dirs::home_dir()
        .map(|home| home.join("Downloads"))
        .ok_or(InventoryError::HomeDirUnavailable)
}

/// Resolves the full report path for a root, output directory and run date.
///
/// # Arguments
/// * `root` - Scan root as given; its final component names the report
/// * `output_dir` - Directory the report goes into
/// * `date` - Local run date
///
/// # Returns
/// `<output_dir>/<base-name>_<DD-MM-YYYY>.csv`
pub fn report_path(root: &Path, output_dir: &Path, date: NaiveDate) -> PathBuf {
    output_dir.join(report_file_name(root, date))
}
