//! Main entry point for the `fileinv` CLI application.
//!
//! `fileinv` walks a directory and writes every file's name and extension to
//! `~/Downloads/<dir-name>_<DD-MM-YYYY>.csv`.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Falls back to interactive prompts when no path is given
//! - Resolves the dated report path
//! - Delegates the walk and report writing to [`run_with_args`]
//! - Maps failures to the exit codes of [`InventoryError::exit_code`]
//!
//! # Flags of Interest
//! - `--ext txt,md`: Only report files with these extensions
//! - `--progress matched|all|none`: Which files print a progress line
//! - `--order name`: Visit directory entries in name order
//! - `--output-dir DIR`: Write the report somewhere other than ~/Downloads
//! - `--profile`: Show phase timings after the run

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use fileinv::inventory::run_with_args;
use fileinv::metrics::{ProfileData, print_profile_summary, rss_after_phase, save_stats_json};
use fileinv::{Args, InventoryError};
use std::io;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Installs the stderr log subscriber; `--verbose` raises it to DEBUG.
fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to install logger")?;
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    init_logging(args.verbose)?;

    let mut profile = ProfileData::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let summary = run_with_args(
        args,
        &mut stdin.lock(),
        &mut stdout,
        Local::now().date_naive(),
        &mut profile,
    )?;
    drop(stdout);

    if args.profile || args.stats_json {
        profile.memory_peak = rss_after_phase();
    }
    if args.profile {
        print_profile_summary(&profile);
    }
    if args.stats_json {
        let stats_path = save_stats_json(&summary.report_path, &profile)?;
        println!("Performance stats saved to: {}", stats_path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let code = err
                .downcast_ref::<InventoryError>()
                .map(InventoryError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
