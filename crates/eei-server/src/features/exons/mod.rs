//! Exon entity lookups

pub mod queries;
pub mod routes;

pub use queries::{GetExonError, GetExonQuery};
pub use routes::exons_routes;
