//! Interaction query handlers

pub mod get;

pub use get::{GetInteractionError, GetInteractionQuery};
