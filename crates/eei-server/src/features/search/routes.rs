use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use sqlx::PgPool;

use super::queries::{self, SearchQuery};
use crate::api::response::ApiResponse;
use crate::error::AppError;

pub fn search_routes() -> Router<PgPool> {
    Router::new().route("/", get(search))
}

#[tracing::instrument(
    skip(pool, query),
    fields(q = %query.q, search_type = %query.search_type)
)]
async fn search(
    State(pool): State<PgPool>,
    Query(query): Query<SearchQuery>,
) -> Result<Response, AppError> {
    let response = queries::interaction_search::handle(pool, query).await?;

    tracing::debug!(
        count = response.pagination.count,
        "Search request completed"
    );

    Ok(ApiResponse::success(response).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_structure() {
        let router = search_routes();
        assert!(format!("{:?}", router).contains("Router"));
    }
}
