//! Single-exon lookup
//!
//! Accepts the surrogate integer key or the Ensembl exon id interchangeably;
//! both return the identical row.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::AppError;
use crate::features::shared::EntityKey;
use crate::models::ExonDetail;

const EXON_SELECT: &str = "SELECT e.exon_id, e.ensembl_exon_id, e.chromosome, e.strand, \
     e.start_position, e.end_position, e.length, \
     g.gene_symbol, g.gene_name \
     FROM exons e \
     LEFT JOIN genes g ON g.gene_id = e.gene_id";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetExonQuery {
    pub id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GetExonError {
    #[error("Exon '{0}' not found")]
    NotFound(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<GetExonError> for AppError {
    fn from(err: GetExonError) -> Self {
        match err {
            GetExonError::NotFound(id) => AppError::not_found("Exon", &id),
            GetExonError::Database(e) => AppError::from(e),
        }
    }
}

#[tracing::instrument(skip(pool), fields(id = %query.id))]
pub async fn handle(pool: PgPool, query: GetExonQuery) -> Result<ExonDetail, GetExonError> {
    let row = match EntityKey::parse(&query.id) {
        EntityKey::Surrogate(exon_id) => {
            sqlx::query_as::<_, ExonDetail>(&format!("{EXON_SELECT} WHERE e.exon_id = $1"))
                .bind(exon_id)
                .fetch_optional(&pool)
                .await?
        }
        EntityKey::Business(ensembl_id) => {
            sqlx::query_as::<_, ExonDetail>(&format!(
                "{EXON_SELECT} WHERE e.ensembl_exon_id = $1"
            ))
            .bind(ensembl_id)
            .fetch_optional(&pool)
            .await?
        }
    };

    row.ok_or_else(|| GetExonError::NotFound(query.id.clone()))
}
