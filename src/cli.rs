//! CLI interface definitions for the `fileinv` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes:
//!
//! - [`Args`]: the main struct parsed from CLI inputs
//! - [`TraversalOrder`]: how entries within a directory are visited
//! - [`ProgressMode`]: which files get a progress line on stdout
//!
//! Every flag is optional. Without a `PATH` the binary falls back to the
//! interactive prompts in [`crate::prompt`].
//!
//! # Example
//!
//! ```bash
//! fileinv ~/Pictures --ext jpg,png --order name --progress all
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for the `fileinv` inventory reporter.
#[derive(Parser, Debug)]
#[command(name = "fileinv", author = "Sam Green", version, about)]
pub struct Args {
    /// Directory to inventory (prompted for when omitted)
    pub path: Option<PathBuf>,

    /// Extensions to keep, comma separated (e.g. 'txt,.md'); all files when omitted
    #[arg(short, long = "ext", value_name = "EXT", value_delimiter = ',', action = clap::ArgAction::Append)]
    pub extensions: Vec<String>,

    /// Order in which entries of a directory are visited
    #[arg(long, value_enum, default_value_t = TraversalOrder::Native)]
    pub order: TraversalOrder,

    /// Which files print a progress line
    #[arg(long, value_enum, default_value_t = ProgressMode::Matched)]
    pub progress: ProgressMode,

    /// Directory the report is written to (default: ~/Downloads)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Show a timing summary after the report is written
    #[arg(long, default_value_t = false)]
    pub profile: bool,

    /// Also write profiling stats to stats.json next to the report
    #[arg(long, default_value_t = false)]
    pub stats_json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Order in which the entries of each directory are visited.
///
/// The walk is always depth-first and pre-order; this only controls sibling order.
///
/// # Variants
/// * `Native` - Whatever order the filesystem enumeration returns
/// * `Name` - Siblings sorted by file name
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum TraversalOrder {
    Native,
    Name,
}

/// Selects which visited files produce a `<file> written to <report>` line.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum ProgressMode {
    /// Only files whose row was written to the report
    Matched,
    /// Every non-hidden file, including ones rejected by the extension filter
    All,
    /// No per-file lines
    None,
}

impl ProgressMode {
    /// Returns true if a file with the given match outcome gets a progress line.
    pub fn reports(&self, matched: bool) -> bool {
        match self {
            ProgressMode::Matched => matched,
            ProgressMode::All => true,
            ProgressMode::None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let args = Args::try_parse_from(["fileinv"]).unwrap();
        assert!(args.path.is_none());
        assert!(args.extensions.is_empty());
        assert_eq!(args.order, TraversalOrder::Native);
        assert_eq!(args.progress, ProgressMode::Matched);
        assert!(!args.profile);
    }

    #[test]
    fn test_extensions_split_and_repeat() {
        let args =
            Args::try_parse_from(["fileinv", "/data", "--ext", "txt,md", "-e", ".RS"]).unwrap();
        assert_eq!(args.path, Some(PathBuf::from("/data")));
        assert_eq!(args.extensions, vec!["txt", "md", ".RS"]);
    }

    #[test]
    fn test_progress_mode_reports() {
        assert!(ProgressMode::Matched.reports(true));
        assert!(!ProgressMode::Matched.reports(false));
        assert!(ProgressMode::All.reports(false));
        assert!(!ProgressMode::None.reports(true));
    }

    #[test]
    fn test_value_enums_parse() {
        let args =
            Args::try_parse_from(["fileinv", ".", "--order", "name", "--progress", "all"]).unwrap();
        assert_eq!(args.order, TraversalOrder::Name);
        assert_eq!(args.progress, ProgressMode::All);
    }
}
