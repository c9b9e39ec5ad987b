//! Library crate for fileinv
//!
//! Walks a directory tree and writes each file's name and extension to a
//! dated CSV report. The binary is a thin front-end over these modules.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`prompt`]: Interactive front-end asking for the root path and extensions
//! - [`data`]: Core data structures (`ScanRequest`, `FileRecord`, `VisitedFile`)
//! - [`scan`]: Lazy, filtered directory walk
//! - [`output`]: CSV report writer and console lines
//! - [`inventory`]: The walk-filter-write pipeline
//! - [`error`]: Error taxonomy and exit codes
//! - [`metrics`]: Optional phase timing and memory profiling
//! - [`utils`]: Extension helpers and report path resolution
//!
//! # Example
//!
//! ```no_run
//! use fileinv::{ScanRequest, cli::ProgressMode, inventory::run_inventory, metrics::ProfileData};
//! use std::path::Path;
//!
//! let request = ScanRequest::new("/srv/photos", ["jpg", "png"])?;
//! let summary = run_inventory(
//!     &request,
//!     Path::new("/tmp/photos.csv"),
//!     ProgressMode::None,
//!     &mut std::io::stdout(),
//!     &mut ProfileData::new(),
//! )?;
//! println!("{} rows", summary.rows_written);
//! # Ok::<(), fileinv::InventoryError>(())
//! ```

pub mod cli;
pub mod data;
pub mod error;
pub mod inventory;
pub mod metrics;
pub mod output;
pub mod prompt;
pub mod scan;
pub mod utils;

pub use cli::Args;
pub use data::{FileRecord, ScanRequest, VisitedFile};
pub use error::InventoryError;
pub use inventory::{InventorySummary, run_inventory, run_with_args};
