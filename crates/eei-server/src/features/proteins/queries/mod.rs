//! Protein query handlers

pub mod get;

pub use get::{GetProteinError, GetProteinQuery};
