//! Runs one inventory: walk, filter, write rows, print progress.
//!
//! [`run_inventory`] is the whole pipeline. [`run_with_args`] puts the
//! front-ends in front of it: flags or prompts, then the dated report path.
//! Neither owns process concerns; errors come back as [`InventoryError`] and
//! the caller picks the exit code.

use crate::cli::{Args, ProgressMode};
use crate::data::ScanRequest;
use crate::error::InventoryError;
use crate::metrics::{PhaseTimer, ProfileData};
use crate::output::{ReportWriter, terminal};
use crate::prompt::prompt_request;
use crate::scan::walk;
use crate::utils::{default_output_dir, report_path};
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySummary {
    pub report_path: PathBuf,
    /// Non-hidden files reached by the walk, matched or not.
    pub files_visited: u64,
    pub rows_written: u64,
}

/// Builds the scan request from parsed flags, prompting on `input` for whatever is missing.
///
/// With a `PATH` argument no prompt is shown. Without one the path prompt
/// runs, followed by the extension prompt unless `--ext` was given.
///
/// # Errors
/// [`InventoryError::EmptyRootPath`] for a blank path, [`InventoryError::Console`]
/// if the prompts cannot be read or written.
pub fn build_request<R, W>(
    args: &Args,
    input: &mut R,
    console: &mut W,
) -> Result<ScanRequest, InventoryError>
where
    R: BufRead,
    W: Write,
{
    let request = match &args.path {
        Some(path) => ScanRequest::new(path.clone(), &args.extensions)?,
        None => {
            let preset = (!args.extensions.is_empty()).then_some(args.extensions.as_slice());
            prompt_request(input, console, preset)?
        }
    };
    Ok(request.with_order(args.order))
}

/// Runs one inventory end to end from parsed flags.
///
/// Builds the request (see [`build_request`]), resolves the report path under
/// `--output-dir` or `~/Downloads`, writes the report and prints the success
/// lines. No report file is created unless a request was obtained.
///
/// # Arguments
/// * `args` - Parsed command-line flags
/// * `input` - Where prompt answers are read from
/// * `console` - Receives prompts, progress lines and the success message
/// * `date` - Run date used in the report file name
/// * `profile` - Collects phase timings and counters
///
/// # Returns
/// The [`InventorySummary`] of the written report.
///
/// # Errors
/// Any [`InventoryError`] from the prompts, home directory lookup, walk or report.
pub fn run_with_args<R, W>(
    args: &Args,
    input: &mut R,
    console: &mut W,
    date: NaiveDate,
    profile: &mut ProfileData,
) -> Result<InventorySummary, InventoryError>
where
    R: BufRead,
    W: Write,
{
    let request = build_request(args, input, console)?;
    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => default_output_dir()?,
    };
    let report = report_path(request.root(), &output_dir, date);

    let summary = run_inventory(&request, &report, args.progress, console, profile)?;
    terminal::success(console, &summary.report_path).map_err(InventoryError::Console)?;
    console.flush().map_err(InventoryError::Console)?;
    Ok(summary)
}

/// Writes the report for `request` to `report_path`, streaming rows as they are found.
///
/// # Arguments
/// * `request` - Root and extension filter to inventory
/// * `report_path` - CSV file to create (or overwrite)
/// * `progress` - Which visited files get a progress line
/// * `console` - Receives the progress lines
/// * `profile` - Walk and flush timings plus `files_visited`/`rows_written` are added here
///
/// # Returns
/// An [`InventorySummary`] with the report path and the visit and row counts.
///
/// # Errors
/// Stops at the first failure. A report that was already created is left on
/// disk with whatever rows were written before the error.
pub fn run_inventory<W: Write>(
    request: &ScanRequest,
    report_path: &Path,
    progress: ProgressMode,
    console: &mut W,
    profile: &mut ProfileData,
) -> Result<InventorySummary, InventoryError> {
    info!(
        root = %request.root().display(),
        report = %report_path.display(),
        "writing inventory"
    );

    let mut report = ReportWriter::create(report_path)?;
    let mut files_visited = 0u64;

    let walk_timer = PhaseTimer::new("Walk");
    for visited in walk(request) {
        let visited = visited?;
        files_visited += 1;

        if visited.matched {
            report.write_record(&visited.record)?;
        }
        if progress.reports(visited.matched) {
            terminal::progress(console, &visited.record.filename, report.path())
                .map_err(InventoryError::Console)?;
        }
    }
    profile.add_phase(walk_timer.finish());

    let rows_written = report.rows();
    let flush_timer = PhaseTimer::new("Flush");
    report.finish()?;
    profile.add_phase(flush_timer.finish());

    profile.add_metadata("files_visited", files_visited);
    profile.add_metadata("rows_written", rows_written);
    debug!(files_visited, rows_written, "inventory complete");

    Ok(InventorySummary {
        report_path: report_path.to_path_buf(),
        files_visited,
        rows_written,
    })
}
