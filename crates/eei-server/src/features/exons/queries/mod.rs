//! Exon query handlers

pub mod get;

pub use get::{GetExonError, GetExonQuery};
