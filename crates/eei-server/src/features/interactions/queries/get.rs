//! Single-interaction lookup
//!
//! Returns the full joined row plus the method-specific attribute side-table
//! (PISA or EPPIC) when one exists for the interaction's method.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::AppError;
use crate::features::shared::interaction_by_id;
use crate::models::{EppicAttributes, InteractionDetail, PisaAttributes};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetInteractionQuery {
    pub eei_id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GetInteractionError {
    #[error("Interaction id must be a positive integer")]
    InvalidId,
    #[error("Interaction '{0}' not found")]
    NotFound(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<GetInteractionError> for AppError {
    fn from(err: GetInteractionError) -> Self {
        match err {
            GetInteractionError::InvalidId => AppError::validation(err.to_string()),
            GetInteractionError::NotFound(id) => AppError::not_found("Interaction", &id),
            GetInteractionError::Database(e) => AppError::from(e),
        }
    }
}

#[tracing::instrument(skip(pool), fields(eei_id = %query.eei_id))]
pub async fn handle(
    pool: PgPool,
    query: GetInteractionQuery,
) -> Result<InteractionDetail, GetInteractionError> {
    let eei_id: i32 = query
        .eei_id
        .parse()
        .ok()
        .filter(|id| *id > 0)
        .ok_or(GetInteractionError::InvalidId)?;

    let interaction = interaction_by_id(eei_id)
        .fetch_optional_interaction(&pool)
        .await?
        .ok_or_else(|| GetInteractionError::NotFound(query.eei_id.clone()))?;

    let created_at = sqlx::query_scalar::<_, Option<DateTime<Utc>>>(
        "SELECT created_at FROM eei_interactions WHERE eei_id = $1",
    )
    .bind(eei_id)
    .fetch_one(&pool)
    .await?;

    let pisa = sqlx::query_as::<_, PisaAttributes>(
        "SELECT pa.free_energy, pa.buried_area, pa.hydrogen_bonds, pa.salt_bridges \
         FROM eei_pisa_attributes pa WHERE pa.eei_id = $1",
    )
    .bind(eei_id)
    .fetch_optional(&pool)
    .await?;

    let eppic = sqlx::query_as::<_, EppicAttributes>(
        "SELECT ea.cs_score, ea.cr_score \
         FROM eei_eppic_attributes ea WHERE ea.eei_id = $1",
    )
    .bind(eei_id)
    .fetch_optional(&pool)
    .await?;

    Ok(InteractionDetail {
        interaction,
        created_at,
        pisa,
        eppic,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_numeric_id_is_invalid() {
        let query = GetInteractionQuery {
            eei_id: "ENSE0001".to_string(),
        };
        let parsed: Result<i32, _> = query.eei_id.parse();
        assert!(parsed.is_err());
    }

    #[test]
    fn test_invalid_id_maps_to_validation_error() {
        let err = AppError::from(GetInteractionError::InvalidId);
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_not_found_maps_to_not_found() {
        let err = AppError::from(GetInteractionError::NotFound("9".to_string()));
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
