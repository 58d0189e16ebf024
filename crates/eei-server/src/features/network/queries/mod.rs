//! Network query handlers

pub mod gene_network;
pub mod network_stats;
pub mod protein_network;
pub mod subgraph;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::features::shared::pagination::MAX_LIMIT;
use crate::features::shared::FilterError;

pub use gene_network::{GeneNetworkQuery, GeneNetworkResponse};
pub use network_stats::NetworkStatsResponse;
pub use protein_network::{ProteinNetworkQuery, ProteinNetworkResponse};
pub use subgraph::{SubgraphQuery, SubgraphResponse};

/// Query-string filter parameters shared by the network endpoints
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NetworkFilterParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// Exact method-name filter, applied client-side after the fetch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_jaccard: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_interactions: Option<i64>,
}

impl NetworkFilterParams {
    /// Validate ranges; identifier presence is checked per endpoint
    pub fn validate(&self) -> Result<(), NetworkQueryError> {
        if let Some(limit) = self.limit {
            if !(1..=MAX_LIMIT).contains(&limit) {
                return Err(NetworkQueryError::InvalidLimit);
            }
        }
        if let Some(offset) = self.offset {
            if offset < 0 {
                return Err(NetworkQueryError::InvalidOffset);
            }
        }
        if let Some(min_confidence) = self.min_confidence {
            if !(0.0..=1.0).contains(&min_confidence) {
                return Err(NetworkQueryError::InvalidConfidence);
            }
        }
        if let Some(min_jaccard) = self.min_jaccard {
            if !(0.0..=100.0).contains(&min_jaccard) {
                return Err(NetworkQueryError::InvalidJaccard);
            }
        }
        if let Some(max_interactions) = self.max_interactions {
            if max_interactions < 1 {
                return Err(NetworkQueryError::InvalidMaxInteractions);
            }
        }
        Ok(())
    }
}

/// Errors shared by the network query handlers
#[derive(Debug, thiserror::Error)]
pub enum NetworkQueryError {
    #[error("Gene symbol is required and cannot be empty")]
    GeneRequired,
    #[error("Protein identifier is required and cannot be empty")]
    ProteinRequired,
    #[error("At least one gene, protein, or exon identifier is required")]
    AnchorsRequired,
    #[error("Limit must be between 1 and 500")]
    InvalidLimit,
    #[error("Offset must not be negative")]
    InvalidOffset,
    #[error("min_confidence must be between 0 and 1")]
    InvalidConfidence,
    #[error("min_jaccard must be between 0 and 100")]
    InvalidJaccard,
    #[error("max_interactions must be a positive integer")]
    InvalidMaxInteractions,
    #[error("{0}")]
    Filter(#[from] FilterError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<NetworkQueryError> for AppError {
    fn from(err: NetworkQueryError) -> Self {
        match err {
            NetworkQueryError::Database(e) => AppError::from(e),
            other => AppError::validation(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_are_valid() {
        assert!(NetworkFilterParams::default().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_confidence_is_rejected() {
        let params = NetworkFilterParams {
            min_confidence: Some(1.5),
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(NetworkQueryError::InvalidConfidence)
        ));
    }

    #[test]
    fn test_out_of_range_jaccard_is_rejected() {
        let params = NetworkFilterParams {
            min_jaccard: Some(120.0),
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(NetworkQueryError::InvalidJaccard)
        ));
    }

    #[test]
    fn test_validation_errors_map_to_app_validation() {
        let err = AppError::from(NetworkQueryError::InvalidLimit);
        assert!(matches!(err, AppError::Validation { .. }));
    }
}
