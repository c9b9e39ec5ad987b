//! CSV report writer.
//!
//! Rows are streamed as the walk produces them; nothing is held in memory.
//! The header row is written at creation so even an empty inventory yields a
//! valid two-column report.

use crate::data::FileRecord;
use crate::error::InventoryError;
use csv::{Writer, WriterBuilder};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Column names of the report, in order.
pub const HEADER: [&str; 2] = ["Filename", "Extension"];

/// Streaming writer for the inventory report.
pub struct ReportWriter<W: Write = File> {
    path: PathBuf,
    writer: Writer<W>,
    rows: u64,
}

impl ReportWriter<File> {
    /// Creates (or truncates) the report at `path` and writes the header.
    ///
    /// The parent directory must already exist.
    ///
    /// # Arguments
    /// * `path` - Report file to create; an existing file is overwritten
    ///
    /// # Returns
    /// A writer positioned after the `Filename,Extension` header.
    ///
    /// # Errors
    /// * [`InventoryError::ReportCreate`] if the file cannot be created
    /// * [`InventoryError::ReportWrite`] if the header cannot be written
    pub fn create(path: &Path) -> Result<Self, InventoryError> {
        let file = File::create(path).map_err(|source| InventoryError::ReportCreate {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_writer(path, file)
    }
}

impl<W: Write> ReportWriter<W> {
    /// Wraps an arbitrary sink, labelling errors with `path`, and writes the header.
    ///
    /// # Errors
    /// [`InventoryError::ReportWrite`] if the header cannot be written.
    pub fn from_writer(path: &Path, sink: W) -> Result<Self, InventoryError> {
        // Header is written by hand so it appears even when no rows follow.
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(sink);
        writer
            .write_record(HEADER)
            .map_err(|source| InventoryError::ReportWrite {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            writer,
            rows: 0,
        })
    }

    /// Appends one row.
    pub fn write_record(&mut self, record: &FileRecord) -> Result<(), InventoryError> {
        self.writer
            .serialize(record)
            .map_err(|source| InventoryError::ReportWrite {
                path: self.path.clone(),
                source,
            })?;
        self.rows += 1;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of data rows written so far (header excluded).
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Flushes buffered rows and returns the underlying sink.
    pub fn finish(self) -> Result<W, InventoryError> {
        let path = self.path;
        self.writer.into_inner().map_err(|e| {
            let cause = e.error();
            InventoryError::report_io(&path, io::Error::new(cause.kind(), cause.to_string()))
        })
    }
}
