//! Global statistics query handlers

pub mod confidence;
pub mod distributions;
pub mod summary;

use crate::error::AppError;

pub use confidence::{ConfidenceBucket, ConfidenceStatsResponse};
pub use distributions::DistributionsResponse;
pub use summary::StatsSummaryResponse;

/// Errors from the statistics snapshots
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<StatsError> for AppError {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::Database(e) => AppError::from(e),
        }
    }
}
