//! Orthology confidence snapshot
//!
//! Range and histogram over every non-null confidence score in the store.
//! The range fold shares the empty-set handling of the batch aggregator, so
//! a store with no predicted interactions reports "no data" rather than an
//! Infinity or NaN leaking into JSON.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use super::StatsError;
use crate::features::shared::ScoreRange;

/// Fixed histogram buckets; the last bucket is inclusive at 1.0
const BUCKET_BOUNDS: &[(f64, f64)] = &[(0.0, 0.5), (0.5, 0.7), (0.7, 0.9), (0.9, 1.0)];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfidenceBucket {
    pub low: f64,
    pub high: f64,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceStatsResponse {
    /// Interactions carrying a confidence score
    pub total_scored: i64,
    pub range: ScoreRange,
    pub histogram: Vec<ConfidenceBucket>,
}

/// Count values into the fixed buckets
fn bucketize(values: &[f64]) -> Vec<ConfidenceBucket> {
    BUCKET_BOUNDS
        .iter()
        .enumerate()
        .map(|(i, &(low, high))| {
            let last = i == BUCKET_BOUNDS.len() - 1;
            let count = values
                .iter()
                .filter(|&&v| v >= low && (v < high || (last && v <= high)))
                .count() as i64;
            ConfidenceBucket { low, high, count }
        })
        .collect()
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool) -> Result<ConfidenceStatsResponse, StatsError> {
    let values = sqlx::query_scalar::<_, f64>(
        "SELECT om.confidence \
         FROM eei_orthology_mapping om \
         WHERE om.confidence IS NOT NULL",
    )
    .fetch_all(&pool)
    .await?;

    Ok(ConfidenceStatsResponse {
        total_scored: values.len() as i64,
        range: ScoreRange::from_values(values.iter().copied()),
        histogram: bucketize(&values),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucketize_empty_values() {
        let buckets = bucketize(&[]);
        assert_eq!(buckets.len(), 4);
        assert!(buckets.iter().all(|b| b.count == 0));
    }

    #[test]
    fn test_bucketize_boundaries() {
        // 0.5 falls into the second bucket, 1.0 into the last
        let buckets = bucketize(&[0.0, 0.49, 0.5, 0.7, 0.9, 1.0]);
        assert_eq!(buckets[0].count, 2);
        assert_eq!(buckets[1].count, 1);
        assert_eq!(buckets[2].count, 1);
        assert_eq!(buckets[3].count, 2);
    }

    #[test]
    fn test_bucket_counts_sum_to_total() {
        let values = [0.1, 0.2, 0.55, 0.72, 0.95, 0.99];
        let buckets = bucketize(&values);
        let sum: i64 = buckets.iter().map(|b| b.count).sum();
        assert_eq!(sum, values.len() as i64);
    }
}
