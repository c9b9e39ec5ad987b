//! Error types for inventory runs.
//!
//! Every error is fatal: the walk stops at the first failure and the caller
//! decides how to report it. [`InventoryError::exit_code`] gives the process
//! exit status the `fileinv` binary uses for each kind.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort an inventory run.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The root path was empty after trimming.
    #[error("No path provided")]
    EmptyRootPath,

    /// The user's home directory could not be determined.
    #[error("Could not determine the user home directory")]
    HomeDirUnavailable,

    /// Reading prompts from stdin or writing progress to stdout failed.
    #[error("Console I/O failed")]
    Console(#[source] std::io::Error),

    /// The report file could not be created.
    #[error("Failed to create report {path}")]
    ReportCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A header or row could not be written to the report.
    #[error("Failed to write report {path}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A directory or file could not be read during the walk.
    #[error("Failed to read {path}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl InventoryError {
    /// Wraps a `walkdir` error, keeping the offending path when it has one.
    pub fn traversal(root: &std::path::Path, source: walkdir::Error) -> Self {
        let path = source
            .path()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| root.to_path_buf());
        Self::Traversal { path, source }
    }

    /// Wraps an I/O error raised while writing a row as a report write failure.
    pub fn report_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReportWrite {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Process exit status for this error.
    ///
    /// * `2` - empty root path
    /// * `3` - home directory unavailable
    /// * `4` - report could not be created or written
    /// * `5` - traversal failure
    /// * `1` - console read or write failure
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::EmptyRootPath => 2,
            Self::HomeDirUnavailable => 3,
            Self::ReportCreate { .. } | Self::ReportWrite { .. } => 4,
            Self::Traversal { .. } => 5,
            Self::Console(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_exit_codes_are_non_zero() {
        let errors = [
            InventoryError::EmptyRootPath,
            InventoryError::HomeDirUnavailable,
            InventoryError::ReportCreate {
                path: PathBuf::from("/nope/report.csv"),
                source: io::Error::new(io::ErrorKind::NotFound, "missing"),
            },
            InventoryError::report_io(
                "/nope/report.csv",
                io::Error::new(io::ErrorKind::Other, "disk full"),
            ),
            InventoryError::Console(io::Error::new(io::ErrorKind::BrokenPipe, "closed")),
        ];

        for err in &errors {
            assert_ne!(err.exit_code(), 0, "{err} must map to a failure code");
        }
        assert_eq!(errors[2].exit_code(), errors[3].exit_code());
    }

    #[test]
    fn test_report_create_names_path_and_keeps_source() {
        let err = InventoryError::ReportCreate {
            path: PathBuf::from("/tmp/Downloads/data_01-02-2024.csv"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("data_01-02-2024.csv"));

        let source = std::error::Error::source(&err).expect("io error is kept as source");
        assert!(source.to_string().contains("denied"));
    }

    #[test]
    fn test_traversal_keeps_missing_path() {
        let missing = PathBuf::from("/definitely/not/here/fileinv-test");
        let walk_err = walkdir::WalkDir::new(&missing)
            .into_iter()
            .find_map(|e| e.err())
            .expect("walking a missing path must fail");

        let err = InventoryError::traversal(&missing, walk_err);
        assert_eq!(err.exit_code(), 5);
        match err {
            InventoryError::Traversal { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
