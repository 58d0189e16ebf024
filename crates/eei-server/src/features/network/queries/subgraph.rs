//! Multi-anchor interaction subgraph
//!
//! Accepts comma-separated gene/protein/exon identifier lists and returns a
//! single capped page: the row cap is pushed into the query, no offset is
//! combined with this path. At least one anchor identifier must be given.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use super::NetworkQueryError;
use crate::features::shared::filters::DEFAULT_MAX_INTERACTIONS;
use crate::features::shared::pagination::PageInfo;
use crate::features::shared::{aggregate, InteractionFilter, NetworkStatistics};
use crate::models::InteractionRow;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SubgraphQuery {
    /// Comma-separated gene symbols
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genes: Option<String>,
    /// Comma-separated UniProt identifiers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proteins: Option<String>,
    /// Comma-separated Ensembl exon identifiers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exons: Option<String>,
    /// Method-name filter, pushed into the query on this path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_jaccard: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_interactions: Option<i64>,
}

/// Anchor identifiers actually used for the query, after list parsing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubgraphSelection {
    pub genes: Vec<String>,
    pub proteins: Vec<String>,
    pub exons: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubgraphResponse {
    pub query: SubgraphSelection,
    pub interactions: Vec<InteractionRow>,
    pub statistics: NetworkStatistics,
    /// Single capped page: offset is always zero on this path
    pub pagination: PageInfo,
}

fn parse_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}

impl SubgraphQuery {
    fn selection(&self) -> SubgraphSelection {
        SubgraphSelection {
            genes: parse_list(self.genes.as_deref()),
            proteins: parse_list(self.proteins.as_deref()),
            exons: parse_list(self.exons.as_deref()),
        }
    }

    /// Reject anchor-less requests before any query is constructed, so they
    /// never reach the store.
    pub fn validate(&self) -> Result<SubgraphSelection, NetworkQueryError> {
        let selection = self.selection();
        if selection.genes.is_empty()
            && selection.proteins.is_empty()
            && selection.exons.is_empty()
        {
            return Err(NetworkQueryError::AnchorsRequired);
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
        Ok(selection)
    }
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: PgPool,
    query: SubgraphQuery,
) -> Result<SubgraphResponse, NetworkQueryError> {
    let selection = query.validate()?;

    let max_interactions = query
        .max_interactions
        .unwrap_or(DEFAULT_MAX_INTERACTIONS);
    let filter = InteractionFilter {
        genes: selection.genes.clone(),
        proteins: selection.proteins.clone(),
        exons: selection.exons.clone(),
        method: query.method_filter.clone(),
        min_confidence: query.min_confidence,
        min_jaccard: query.min_jaccard,
        max_interactions,
    };

    let rows = filter.build()?.fetch_interactions(&pool).await?;
    let statistics = aggregate(&rows);
    let total = rows.len() as i64;

    tracing::debug!(total, "Subgraph assembled");

    Ok(SubgraphResponse {
        query: selection,
        statistics,
        pagination: PageInfo {
            limit: max_interactions,
            offset: 0,
            total,
            has_more: false,
        },
        interactions: rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_empty_anchor_lists_are_rejected() {
        let query = SubgraphQuery {
            genes: Some("".to_string()),
            proteins: Some("".to_string()),
            exons: Some("".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            query.validate(),
            Err(NetworkQueryError::AnchorsRequired)
        ));
    }

    #[test]
    fn test_missing_anchor_params_are_rejected() {
        assert!(matches!(
            SubgraphQuery::default().validate(),
            Err(NetworkQueryError::AnchorsRequired)
        ));
    }

    #[test]
    fn test_comma_lists_are_parsed_and_trimmed() {
        let query = SubgraphQuery {
            genes: Some("TP53, MDM2,,BRCA1 ".to_string()),
            ..Default::default()
        };
        let selection = query.validate().unwrap();
        assert_eq!(selection.genes, vec!["TP53", "MDM2", "BRCA1"]);
        assert!(selection.proteins.is_empty());
    }

    #[test]
    fn test_single_anchor_category_is_enough() {
        let query = SubgraphQuery {
            exons: Some("ENSE00003527892".to_string()),
            ..Default::default()
        };
        assert!(query.validate().is_ok());
    }
}
