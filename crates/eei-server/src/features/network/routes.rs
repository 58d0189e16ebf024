use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use sqlx::PgPool;

use super::queries::{self, GeneNetworkQuery, NetworkFilterParams, ProteinNetworkQuery, SubgraphQuery};
use crate::api::response::ApiResponse;
use crate::error::AppError;

pub fn network_routes() -> Router<PgPool> {
    Router::new()
        .route("/gene/:gene_symbol", get(gene_network))
        .route("/protein/:protein_id", get(protein_network))
        .route("/interactions/subgraph", get(subgraph))
        .route("/stats", get(network_stats))
}

#[tracing::instrument(skip(pool, params), fields(gene = %gene_symbol))]
async fn gene_network(
    State(pool): State<PgPool>,
    Path(gene_symbol): Path<String>,
    Query(params): Query<NetworkFilterParams>,
) -> Result<Response, AppError> {
    let query = GeneNetworkQuery {
        gene_symbol,
        params,
    };
    let response = queries::gene_network::handle(pool, query).await?;

    tracing::debug!(
        total = response.pagination.total,
        "Gene network request completed"
    );

    Ok(ApiResponse::success(response).into_response())
}

#[tracing::instrument(skip(pool, params), fields(protein = %protein_id))]
async fn protein_network(
    State(pool): State<PgPool>,
    Path(protein_id): Path<String>,
    Query(params): Query<NetworkFilterParams>,
) -> Result<Response, AppError> {
    let query = ProteinNetworkQuery { protein_id, params };
    let response = queries::protein_network::handle(pool, query).await?;

    tracing::debug!(
        total = response.pagination.total,
        "Protein network request completed"
    );

    Ok(ApiResponse::success(response).into_response())
}

#[tracing::instrument(skip(pool, query))]
async fn subgraph(
    State(pool): State<PgPool>,
    Query(query): Query<SubgraphQuery>,
) -> Result<Response, AppError> {
    let response = queries::subgraph::handle(pool, query).await?;

    tracing::debug!(
        total = response.pagination.total,
        "Subgraph request completed"
    );

    Ok(ApiResponse::success(response).into_response())
}

#[tracing::instrument(skip(pool))]
async fn network_stats(State(pool): State<PgPool>) -> Result<Response, AppError> {
    let response = queries::network_stats::handle(pool).await?;
    Ok(ApiResponse::success(response).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_structure() {
        let router = network_routes();
        assert!(format!("{:?}", router).contains("Router"));
    }
}
