//! Protein entity lookups

pub mod queries;
pub mod routes;

pub use queries::{GetProteinError, GetProteinQuery};
pub use routes::proteins_routes;
