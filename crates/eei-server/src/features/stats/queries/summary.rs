//! Store-wide entity and method-type counts

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use super::StatsError;
use crate::models::{METHOD_TYPE_EXPERIMENTAL, METHOD_TYPE_PREDICTED};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsSummaryResponse {
    pub total_interactions: i64,
    pub experimental_interactions: i64,
    pub predicted_interactions: i64,
    pub total_exons: i64,
    pub total_proteins: i64,
    pub total_genes: i64,
    pub total_organisms: i64,
}

#[derive(Debug, sqlx::FromRow)]
struct TypeCount {
    method_type: String,
    count: i64,
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool) -> Result<StatsSummaryResponse, StatsError> {
    let type_counts = sqlx::query_as::<_, TypeCount>(
        "SELECT m.method_type, COUNT(*) AS count \
         FROM eei_interactions i \
         JOIN eei_methods m ON m.method_id = i.method_id \
         GROUP BY m.method_type",
    )
    .fetch_all(&pool)
    .await?;

    let mut experimental = 0i64;
    let mut predicted = 0i64;
    for row in &type_counts {
        if row.method_type == METHOD_TYPE_EXPERIMENTAL {
            experimental = row.count;
        } else if row.method_type == METHOD_TYPE_PREDICTED {
            predicted = row.count;
        }
    }

    let total_exons = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM exons")
        .fetch_one(&pool)
        .await?;
    let total_proteins = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM proteins")
        .fetch_one(&pool)
        .await?;
    let total_genes = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM genes")
        .fetch_one(&pool)
        .await?;
    let total_organisms = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM organisms")
        .fetch_one(&pool)
        .await?;

    Ok(StatsSummaryResponse {
        total_interactions: experimental + predicted,
        experimental_interactions: experimental,
        predicted_interactions: predicted,
        total_exons,
        total_proteins,
        total_genes,
        total_organisms,
    })
}
