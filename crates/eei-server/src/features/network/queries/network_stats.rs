//! Global network statistics
//!
//! Store-wide entity counts and the per-method interaction distribution.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use super::NetworkQueryError;
use crate::models::MethodCount;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkStatsResponse {
    pub total_interactions: i64,
    pub total_exons: i64,
    pub total_proteins: i64,
    pub total_genes: i64,
    pub total_organisms: i64,
    pub methods: Vec<MethodCount>,
}

async fn count_table(pool: &PgPool, table: &str) -> Result<i64, sqlx::Error> {
    // Table names come from the fixed list below, never from the caller.
    let sql = format!("SELECT COUNT(*) FROM {table}");
    sqlx::query_scalar::<_, i64>(&sql).fetch_one(pool).await
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool) -> Result<NetworkStatsResponse, NetworkQueryError> {
    let total_interactions = count_table(&pool, "eei_interactions").await?;
    let total_exons = count_table(&pool, "exons").await?;
    let total_proteins = count_table(&pool, "proteins").await?;
    let total_genes = count_table(&pool, "genes").await?;
    let total_organisms = count_table(&pool, "organisms").await?;

    let methods = sqlx::query_as::<_, MethodCount>(
        "SELECT m.method_name, m.method_type, COUNT(*) AS count \
         FROM eei_interactions i \
         JOIN eei_methods m ON m.method_id = i.method_id \
         GROUP BY m.method_name, m.method_type \
         ORDER BY count DESC",
    )
    .fetch_all(&pool)
    .await?;

    Ok(NetworkStatsResponse {
        total_interactions,
        total_exons,
        total_proteins,
        total_genes,
        total_organisms,
        methods,
    })
}
