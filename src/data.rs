//! Data structures for inventory requests and report rows.
//!
//! A [`ScanRequest`] is built once, from flags, prompts or directly through the
//! API, and never changes afterwards. Each file the walk visits becomes a
//! [`FileRecord`]; the walker wraps it in a [`VisitedFile`] that says whether
//! it passed the extension filter.

use crate::cli::TraversalOrder;
use crate::error::InventoryError;
use crate::utils::{extension_of, extension_set};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// What to inventory and which files to keep.
///
/// # Fields
/// * `root` - Directory (or single file) the walk starts from
/// * `extensions` - Normalized extension allow-list; empty means every file
/// * `order` - Sibling order during traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    root: PathBuf,
    extensions: BTreeSet<String>,
    order: TraversalOrder,
}

impl ScanRequest {
    /// Creates a request for `root`, keeping files whose extension is in `extensions`.
    ///
    /// Extensions are trimmed, lower-cased and given a leading `.` when missing,
    /// so `"txt"`, `".TXT"` and `" txt "` are the same filter entry. An empty
    /// piece selects files without an extension; only an empty `extensions`
    /// sequence means "every file".
    ///
    /// # Arguments
    /// * `root` - Directory (or single file) to inventory
    /// * `extensions` - Raw extension pieces as typed or passed with `--ext`
    ///
    /// # Returns
    /// A request with the default [`TraversalOrder::Native`] order.
    ///
    /// # Errors
    /// Returns [`InventoryError::EmptyRootPath`] if `root` is empty or whitespace.
    pub fn new<I, S>(root: impl Into<PathBuf>, extensions: I) -> Result<Self, InventoryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let root = root.into();
        if root.to_string_lossy().trim().is_empty() {
            return Err(InventoryError::EmptyRootPath);
        }

        Ok(Self {
            root,
            extensions: extension_set(extensions),
            order: TraversalOrder::Native,
        })
    }

    /// Returns the request with a different sibling order.
    pub fn with_order(mut self, order: TraversalOrder) -> Self {
        self.order = order;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn extensions(&self) -> &BTreeSet<String> {
        &self.extensions
    }

    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    /// Returns true if a file with this (already lower-cased) extension is kept.
    pub fn accepts(&self, extension: &str) -> bool {
        self.extensions.is_empty() || self.extensions.contains(extension)
    }
}

/// A single report row.
///
/// # Fields
/// * `filename` - Base name of the file, without its directory
/// * `extension` - Lower-cased extension with leading `.`, or empty
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FileRecord {
    #[serde(rename = "Filename")]
    pub filename: String,
    #[serde(rename = "Extension")]
    pub extension: String,
}

impl FileRecord {
    /// Builds a record from a file's base name.
    pub fn from_name(name: &str) -> Self {
        Self {
            filename: name.to_string(),
            extension: extension_of(name),
        }
    }
}

/// A non-hidden file reached by the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedFile {
    pub record: FileRecord,
    /// Whether the file passed the extension filter and belongs in the report.
    pub matched: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_request_normalizes_extensions() {
        let request = ScanRequest::new("/data", ["txt", " .MD"]).unwrap();
        assert_eq!(request.root(), Path::new("/data"));
        assert_eq!(request.extensions().len(), 2);
        assert!(request.accepts(".txt"));
        assert!(request.accepts(".md"));
        assert!(!request.accepts(".rs"));
        assert!(!request.accepts(""));
    }

    #[test]
    fn test_empty_piece_selects_files_without_extension() {
        let request = ScanRequest::new("/data", ["txt", ""]).unwrap();
        assert_eq!(request.extensions().len(), 2);
        assert!(request.accepts(""));
        assert!(request.accepts(".txt"));
        assert!(!request.accepts(".md"));
    }

    #[test]
    fn test_lone_dot_filter_is_kept() {
        let request = ScanRequest::new("/data", ["."]).unwrap();
        assert!(request.accepts("."));
        assert!(!request.accepts(".txt"));
        assert!(!request.accepts(""));
    }

    #[test]
    fn test_scan_request_empty_filter_accepts_all() {
        let request = ScanRequest::new("/data", Vec::<String>::new()).unwrap();
        assert!(request.accepts(".anything"));
        assert!(request.accepts(""));
    }

    #[test]
    fn test_scan_request_rejects_empty_root() {
        let err = ScanRequest::new("   ", ["txt"]).unwrap_err();
        assert!(matches!(err, InventoryError::EmptyRootPath));
    }

    #[test]
    fn test_with_order() {
        let request = ScanRequest::new(".", Vec::<String>::new())
            .unwrap()
            .with_order(TraversalOrder::Name);
        assert_eq!(request.order(), TraversalOrder::Name);
    }

    #[test]
    fn test_file_record_from_name() {
        let record = FileRecord::from_name("Archive.TAR.GZ");
        assert_eq!(record.filename, "Archive.TAR.GZ");
        assert_eq!(record.extension, ".gz");

        let bare = FileRecord::from_name("Makefile");
        assert_eq!(bare.extension, "");
    }
}
