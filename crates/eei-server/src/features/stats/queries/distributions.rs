//! Interaction and exon distributions

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use super::StatsError;
use crate::models::MethodCount;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ChromosomeCount {
    pub chromosome: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionsResponse {
    /// Interactions per detection method
    pub methods: Vec<MethodCount>,
    /// Exons per chromosome
    pub chromosomes: Vec<ChromosomeCount>,
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool) -> Result<DistributionsResponse, StatsError> {
    let methods = sqlx::query_as::<_, MethodCount>(
        "SELECT m.method_name, m.method_type, COUNT(*) AS count \
         FROM eei_interactions i \
         JOIN eei_methods m ON m.method_id = i.method_id \
         GROUP BY m.method_name, m.method_type \
         ORDER BY count DESC",
    )
    .fetch_all(&pool)
    .await?;

    let chromosomes = sqlx::query_as::<_, ChromosomeCount>(
        "SELECT e.chromosome, COUNT(*) AS count \
         FROM exons e \
         WHERE e.chromosome IS NOT NULL \
         GROUP BY e.chromosome \
         ORDER BY count DESC",
    )
    .fetch_all(&pool)
    .await?;

    Ok(DistributionsResponse {
        methods,
        chromosomes,
    })
}
