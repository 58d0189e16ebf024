//! Protein-anchored interaction subgraph
//!
//! Same shape as the gene network, anchored on a UniProt identifier instead.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use super::{NetworkFilterParams, NetworkQueryError};
use crate::features::shared::{
    aggregate, paginate, InteractionFilter, NetworkStatistics, PageInfo, PageParams, PostFilter,
};
use crate::features::shared::filters::DEFAULT_MAX_INTERACTIONS;
use crate::models::InteractionRow;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProteinNetworkQuery {
    pub protein_id: String,
    #[serde(flatten)]
    pub params: NetworkFilterParams,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProteinNetworkResponse {
    pub protein_id: String,
    pub interactions: Vec<InteractionRow>,
    /// Computed over the filtered batch, not just the returned page
    pub statistics: NetworkStatistics,
    pub pagination: PageInfo,
}

impl ProteinNetworkQuery {
    pub fn validate(&self) -> Result<(), NetworkQueryError> {
        if self.protein_id.trim().is_empty() {
            return Err(NetworkQueryError::ProteinRequired);
        }
        self.params.validate()
    }

    fn filter(&self) -> InteractionFilter {
        InteractionFilter {
            proteins: vec![self.protein_id.clone()],
            min_confidence: self.params.min_confidence,
            min_jaccard: self.params.min_jaccard,
            max_interactions: self
                .params
                .max_interactions
                .unwrap_or(DEFAULT_MAX_INTERACTIONS),
            ..Default::default()
        }
    }

    fn post_filter(&self) -> PostFilter {
        PostFilter {
            method: self.params.method_filter.clone(),
            ..Default::default()
        }
    }
}

#[tracing::instrument(skip(pool), fields(protein = %query.protein_id))]
pub async fn handle(
    pool: PgPool,
    query: ProteinNetworkQuery,
) -> Result<ProteinNetworkResponse, NetworkQueryError> {
    query.validate()?;

    let built = query.filter().build()?;
    let rows = built.fetch_interactions(&pool).await?;
    let filtered = query.post_filter().apply(rows);

    let statistics = aggregate(&filtered);

    let page_params = PageParams::new(query.params.limit, query.params.offset);
    let page = paginate(filtered, page_params.limit(), page_params.offset());

    tracing::debug!(
        total = page.pagination.total,
        returned = page.items.len(),
        "Protein network assembled"
    );

    Ok(ProteinNetworkResponse {
        protein_id: query.protein_id,
        interactions: page.items,
        statistics,
        pagination: page.pagination,
    })
}
