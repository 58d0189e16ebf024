//! Export query handlers

pub mod export_interactions;

pub use export_interactions::{
    AppliedFilters, ExportData, ExportError, ExportFormat, ExportQuery, ExportType,
};
