//! Single-protein lookup
//!
//! Accepts the surrogate integer key or the UniProt id interchangeably.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::AppError;
use crate::features::shared::EntityKey;
use crate::models::ProteinDetail;

const PROTEIN_SELECT: &str = "SELECT p.protein_id, p.uniprot_id, p.protein_name, \
     p.sequence_length, p.molecular_weight, \
     g.gene_symbol, g.gene_name \
     FROM proteins p \
     LEFT JOIN genes g ON g.gene_id = p.gene_id";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetProteinQuery {
    pub id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GetProteinError {
    #[error("Protein '{0}' not found")]
    NotFound(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<GetProteinError> for AppError {
    fn from(err: GetProteinError) -> Self {
        match err {
            GetProteinError::NotFound(id) => AppError::not_found("Protein", &id),
            GetProteinError::Database(e) => AppError::from(e),
        }
    }
}

#[tracing::instrument(skip(pool), fields(id = %query.id))]
pub async fn handle(
    pool: PgPool,
    query: GetProteinQuery,
) -> Result<ProteinDetail, GetProteinError> {
    let row = match EntityKey::parse(&query.id) {
        EntityKey::Surrogate(protein_id) => {
            sqlx::query_as::<_, ProteinDetail>(&format!(
                "{PROTEIN_SELECT} WHERE p.protein_id = $1"
            ))
            .bind(protein_id)
            .fetch_optional(&pool)
            .await?
        }
        EntityKey::Business(uniprot_id) => {
            sqlx::query_as::<_, ProteinDetail>(&format!(
                "{PROTEIN_SELECT} WHERE p.uniprot_id = $1"
            ))
            .bind(uniprot_id)
            .fetch_optional(&pool)
            .await?
        }
    };

    row.ok_or_else(|| GetProteinError::NotFound(query.id.clone()))
}
