//! Utilities shared across feature slices

pub mod filters;
pub mod identifiers;
pub mod pagination;
pub mod post_filter;
pub mod stats;

pub use filters::{
    interaction_by_id, BuiltQuery, ExportFilter, FilterError, InteractionFilter, SearchFilter,
};
pub use identifiers::EntityKey;
pub use pagination::{paginate, Page, PageInfo, PageParams, SearchPageInfo};
pub use post_filter::PostFilter;
pub use stats::{aggregate, NetworkStatistics, ScoreRange};
