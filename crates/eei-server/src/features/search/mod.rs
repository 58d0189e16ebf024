//! Free-text search over the interaction join view

pub mod queries;
pub mod routes;

pub use queries::{SearchError, SearchQuery, SearchResponse, SearchType};
pub use routes::search_routes;
