//! Gene-anchored interaction subgraph
//!
//! Fetches every interaction touching the given gene symbol (on either side
//! of the pair), applies the client-side method filter, aggregates statistics
//! over the full filtered batch, and returns one offset/limit page.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use super::{NetworkFilterParams, NetworkQueryError};
use crate::features::shared::{
    aggregate, paginate, InteractionFilter, NetworkStatistics, PageInfo, PageParams, PostFilter,
};
use crate::features::shared::filters::DEFAULT_MAX_INTERACTIONS;
use crate::models::InteractionRow;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneNetworkQuery {
    pub gene_symbol: String,
    #[serde(flatten)]
    pub params: NetworkFilterParams,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneNetworkResponse {
    pub gene_symbol: String,
    pub interactions: Vec<InteractionRow>,
    /// Computed over the filtered batch, not just the returned page
    pub statistics: NetworkStatistics,
    pub pagination: PageInfo,
}

impl GeneNetworkQuery {
    pub fn validate(&self) -> Result<(), NetworkQueryError> {
        if self.gene_symbol.trim().is_empty() {
            return Err(NetworkQueryError::GeneRequired);
        }
        self.params.validate()
    }

    /// The store-side filter: anchor and thresholds are pushed down, the
    /// method filter stays client-side.
    fn filter(&self) -> InteractionFilter {
        InteractionFilter {
            genes: vec![self.gene_symbol.clone()],
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

#[tracing::instrument(skip(pool), fields(gene = %query.gene_symbol))]
pub async fn handle(
    pool: PgPool,
    query: GeneNetworkQuery,
) -> Result<GeneNetworkResponse, NetworkQueryError> {
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
        "Gene network assembled"
    );

    Ok(GeneNetworkResponse {
        gene_symbol: query.gene_symbol,
        interactions: page.items,
        statistics,
        pagination: page.pagination,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(gene: &str) -> GeneNetworkQuery {
        GeneNetworkQuery {
            gene_symbol: gene.to_string(),
            params: NetworkFilterParams::default(),
        }
    }

    #[test]
    fn test_validation_rejects_empty_gene() {
        assert!(matches!(
            query("  ").validate(),
            Err(NetworkQueryError::GeneRequired)
        ));
    }

    #[test]
    fn test_validation_accepts_gene_symbol() {
        assert!(query("TP53").validate().is_ok());
    }

    #[test]
    fn test_anchor_is_pushed_to_the_store() {
        let filter = query("TP53").filter();
        assert_eq!(filter.genes, vec!["TP53"]);
        assert!(filter.proteins.is_empty());
        assert!(filter.exons.is_empty());
    }

    #[test]
    fn test_method_filter_stays_client_side() {
        let mut q = query("TP53");
        q.params.method_filter = Some("PISA".to_string());
        let filter = q.filter();
        assert!(filter.method.is_none());
        assert_eq!(q.post_filter().method.as_deref(), Some("PISA"));
    }

    #[test]
    fn test_thresholds_are_pushed_to_the_store() {
        let mut q = query("TP53");
        q.params.min_confidence = Some(0.7);
        q.params.min_jaccard = Some(25.0);
        let filter = q.filter();
        assert_eq!(filter.min_confidence, Some(0.7));
        assert_eq!(filter.min_jaccard, Some(25.0));
    }
}
