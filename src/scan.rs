//! File system walking module for `fileinv`.
//!
//! This module handles:
//! - Recursive, depth-first, pre-order traversal using `WalkDir`
//! - Skipping directories and hidden files
//! - Deriving each file's extension and checking it against the request's filter
//!
//! The main entry point is [`walk`], which returns an [`Inventory`]: a lazy,
//! finite iterator over every non-hidden file under the root. Nothing is
//! buffered; each item is produced as the underlying directory read reaches it.
//! The first traversal error ends the iteration.

use crate::cli::TraversalOrder;
use crate::data::{FileRecord, ScanRequest, VisitedFile};
use crate::error::InventoryError;
use crate::utils::is_hidden;
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Starts walking the tree described by `request`.
///
/// Symbolic links are not followed. The walk reports a link as a file entry
/// because it is not a directory.
///
/// # Arguments
/// * `request` - Root, extension filter and sibling order of the walk
///
/// # Returns
/// A lazy [`Inventory`] yielding every non-hidden file in depth-first
/// pre-order. Nothing is read from disk until it is iterated.
pub fn walk(request: &ScanRequest) -> Inventory {
    let mut walker = WalkDir::new(request.root()).follow_links(false);
    if request.order() == TraversalOrder::Name {
        walker = walker.sort_by_file_name();
    }

    debug!(root = %request.root().display(), filters = ?request.extensions(), "starting walk");

    Inventory {
        request: request.clone(),
        entries: walker.into_iter(),
        failed: false,
    }
}

/// Iterator over the non-hidden files under a scan root.
///
/// Yields `Ok(VisitedFile)` for each file, matched or not, and at most one
/// `Err`, after which it is exhausted.
pub struct Inventory {
    request: ScanRequest,
    entries: walkdir::IntoIter,
    failed: bool,
}

impl Inventory {
    /// Narrows the walk to files that passed the extension filter.
    pub fn matching(self) -> impl Iterator<Item = Result<FileRecord, InventoryError>> {
        self.filter_map(|visited| match visited {
            Ok(file) if file.matched => Some(Ok(file.record)),
            Ok(_) => None,
            Err(e) => Some(Err(e)),
        })
    }
}

impl Iterator for Inventory {
    type Item = Result<VisitedFile, InventoryError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        for entry in self.entries.by_ref() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(InventoryError::traversal(self.request.root(), e)));
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if is_hidden(&name) {
                trace!(path = %entry.path().display(), "skipping hidden file");
                continue;
            }

            let record = FileRecord::from_name(&name);
            let matched = self.request.accepts(&record.extension);
            if !matched {
                trace!(file = %record.filename, ext = %record.extension, "rejected by filter");
            }

            return Some(Ok(VisitedFile { record, matched }));
        }

        None
    }
}
