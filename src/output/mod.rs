//! Output side of an inventory run.
//!
//! # Modules
//!
//! - **csv**: the streaming report writer ([`ReportWriter`])
//! - **terminal**: progress and success lines printed to the console

pub mod csv;
pub mod terminal;

pub use csv::ReportWriter;
