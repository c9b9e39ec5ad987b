//! Performance metrics and profiling utilities for `fileinv`.
//!
//! This module provides:
//! - [`PhaseTimer`] - A wrapper around `Instant` for timing the phases of a run
//! - [`rss_after_phase`] - Optional memory usage tracking using `sysinfo`
//! - [`ProfileData`] - Structured data for performance metrics
//! - [`print_profile_summary`] - Terminal output for profiling results
//! - [`save_stats_json`] - JSON output for scripting integration
//!
//! # Usage
//!
//! ```rust
//! use fileinv::metrics::{PhaseTimer, rss_after_phase, ProfileData};
//!
//! let mut profile = ProfileData::new();
//! let timer = PhaseTimer::new("Walk");
//!
//! // ... do work ...
//!
//! profile.add_phase(timer.finish());
//! profile.memory_peak = rss_after_phase();
//! ```

use anyhow::{Context, Result};
use humansize::{DECIMAL, format_size};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use sysinfo::{Pid, System};

/// Times one phase of a run, such as the walk or the final flush.
#[derive(Debug, Clone)]
pub struct PhaseTimer {
    name: String,
    start: Instant,
}

impl PhaseTimer {
    /// Starts timing the phase called `name`.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            start: Instant::now(),
        }
    }

    /// Stops the timer.
    ///
    /// # Returns
    /// A [`PhaseResult`] with the phase name and the time since [`PhaseTimer::new`].
    pub fn finish(self) -> PhaseResult {
        PhaseResult {
            name: self.name,
            duration: self.start.elapsed(),
        }
    }
}

/// A finished phase and how long it took.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseResult {
    pub name: String,
    /// Written to `stats.json` as whole milliseconds.
    #[serde(serialize_with = "serialize_millis")]
    pub duration: Duration,
}

fn serialize_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_millis() as u64)
}

/// Profiling data for one inventory run.
///
/// Collects phase timings, peak memory and free-form counters such as the
/// number of files visited and rows written.
#[derive(Debug, Clone, Default)]
pub struct ProfileData {
    /// Timing results for each phase of the run
    pub phases: Vec<PhaseResult>,
    /// Peak memory usage in bytes (if available)
    pub memory_peak: Option<u64>,
    /// Additional counters about the run, sorted by key
    pub metadata: BTreeMap<String, String>,
}

impl ProfileData {
    /// Creates a new empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a completed phase result to the profile.
    pub fn add_phase(&mut self, phase: PhaseResult) {
        self.phases.push(phase);
    }

    /// Adds a metadata entry to the profile.
    pub fn add_metadata(&mut self, key: &str, value: impl ToString) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Gets the total duration of all phases combined.
    pub fn total_duration(&self) -> Duration {
        self.phases.iter().map(|p| p.duration).sum()
    }
}

/// Measures the current process's RSS (Resident Set Size) in bytes.
///
/// Returns `None` when the platform or the sandbox does not expose it.
pub fn rss_after_phase() -> Option<u64> {
    let pid = Pid::from_u32(std::process::id());
    let mut system = System::new();
    if !system.refresh_process(pid) {
        return None;
    }
    system.process(pid).map(|process| process.memory())
}

/// Renders the profile summary shown by `--profile`.
///
/// # Example Output
/// ```text
/// Inventory phase timings
///   Walk                 150 ms
///   Flush                  2 ms
/// Memory peak:      4.2 MB
///
/// Additional metrics:
///   files_visited   1834
///   rows_written    211
/// ```
pub fn format_profile_summary(profile: &ProfileData) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nInventory phase timings");

    for phase in &profile.phases {
        let _ = writeln!(
            out,
            "  {:<15} {:>7} ms",
            phase.name,
            phase.duration.as_millis()
        );
    }

    if let Some(memory_peak) = profile.memory_peak {
        let _ = writeln!(out, "Memory peak:      {}", format_size(memory_peak, DECIMAL));
    }

    if !profile.metadata.is_empty() {
        let _ = writeln!(out, "\nAdditional metrics:");
        for (key, value) in &profile.metadata {
            let _ = writeln!(out, "  {:<15} {}", key, value);
        }
    }

    out
}

/// Prints [`format_profile_summary`] to stdout.
pub fn print_profile_summary(profile: &ProfileData) {
    println!("{}", format_profile_summary(profile));
}

/// Saves profiling statistics to `stats.json` beside the report.
///
/// # Returns
/// The path of the stats file that was written.
pub fn save_stats_json(report_path: &Path, profile: &ProfileData) -> Result<PathBuf> {
    let stats_path = report_path.with_file_name("stats.json");

    let stats = serde_json::json!({
        "phases": profile.phases,
        "total_duration_ms": profile.total_duration().as_millis() as u64,
        "memory_peak_bytes": profile.memory_peak,
        "metadata": profile.metadata,
        "report": report_path.display().to_string(),
        "timestamp": chrono::Local::now().to_rfc3339()
    });

    let body = serde_json::to_string_pretty(&stats).context("Failed to encode stats")?;
    std::fs::write(&stats_path, body)
        .with_context(|| format!("Failed to write {}", stats_path.display()))?;

    Ok(stats_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_phase_timer() {
        let timer = PhaseTimer::new("test_phase");
        thread::sleep(Duration::from_millis(10));
        let result = timer.finish();

        assert_eq!(result.name, "test_phase");
        assert!(result.duration.as_millis() >= 10);
    }

    #[test]
    fn test_profile_data() {
        let mut profile = ProfileData::new();
        profile.add_phase(PhaseResult {
            name: "Walk".to_string(),
            duration: Duration::from_millis(100),
        });
        profile.add_phase(PhaseResult {
            name: "Flush".to_string(),
            duration: Duration::from_millis(20),
        });
        profile.add_metadata("rows_written", 3);

        assert_eq!(profile.phases.len(), 2);
        assert_eq!(profile.total_duration(), Duration::from_millis(120));
        assert_eq!(profile.metadata["rows_written"], "3");
    }

    #[test]
    fn test_summary_lists_phases_and_metrics() {
        let mut profile = ProfileData::new();
        profile.add_phase(PhaseResult {
            name: "Walk".to_string(),
            duration: Duration::from_millis(42),
        });
        profile.add_metadata("files_visited", 7);

        let summary = format_profile_summary(&profile);
        assert!(summary.contains("Walk"));
        assert!(summary.contains("42 ms"));
        assert!(summary.contains("files_visited   7"));
        assert!(!summary.contains("Memory peak"));
    }

    #[test]
    fn test_memory_tracking() {
        // Not every sandbox exposes process info; only check the value when present.
        if let Some(bytes) = rss_after_phase() {
            assert!(bytes > 0);
        }
    }

    #[test]
    fn test_save_stats_json() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let report = temp_dir.path().join("data_01-01-2024.csv");

        let mut profile = ProfileData::new();
        profile.add_phase(PhaseResult {
            name: "Walk".to_string(),
            duration: Duration::from_millis(5),
        });

        let stats_path = save_stats_json(&report, &profile).unwrap();
        assert_eq!(stats_path, temp_dir.path().join("stats.json"));

        let stats: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&stats_path).unwrap()).unwrap();
        assert_eq!(stats["total_duration_ms"], 5);
        assert_eq!(stats["phases"][0]["name"], "Walk");
    }
}
