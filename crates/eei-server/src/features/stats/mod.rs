//! Global statistic snapshots

pub mod queries;
pub mod routes;

pub use queries::{
    ConfidenceBucket, ConfidenceStatsResponse, DistributionsResponse, StatsError,
    StatsSummaryResponse,
};
pub use routes::stats_routes;
