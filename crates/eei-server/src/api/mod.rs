//! API response types and envelope conventions

pub mod response;

pub use response::{ApiResponse, ErrorResponse, FieldError};
