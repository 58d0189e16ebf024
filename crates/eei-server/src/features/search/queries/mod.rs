//! Search query handlers

pub mod interaction_search;

pub use interaction_search::{SearchError, SearchQuery, SearchResponse, SearchType};
