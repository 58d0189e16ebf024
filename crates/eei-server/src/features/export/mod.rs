//! Interaction exports: CSV, TSV, and JSON with metadata

pub mod format;
pub mod queries;
pub mod routes;

pub use queries::{ExportData, ExportError, ExportFormat, ExportQuery, ExportType};
pub use routes::export_routes;
