use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use sqlx::PgPool;

use super::queries::{self, GetProteinQuery};
use crate::api::response::ApiResponse;
use crate::error::AppError;

pub fn proteins_routes() -> Router<PgPool> {
    Router::new().route("/:id", get(get_protein))
}

#[tracing::instrument(skip(pool), fields(id = %id))]
async fn get_protein(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let protein = queries::get::handle(pool, GetProteinQuery { id }).await?;
    Ok(ApiResponse::success(protein).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_structure() {
        let router = proteins_routes();
        assert!(format!("{:?}", router).contains("Router"));
    }
}
