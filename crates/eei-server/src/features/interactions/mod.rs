//! Interaction entity lookups

pub mod queries;
pub mod routes;

pub use queries::{GetInteractionError, GetInteractionQuery};
pub use routes::interactions_routes;
