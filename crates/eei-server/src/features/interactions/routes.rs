use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use sqlx::PgPool;

use super::queries::{self, GetInteractionQuery};
use crate::api::response::ApiResponse;
use crate::error::AppError;

pub fn interactions_routes() -> Router<PgPool> {
    Router::new().route("/:eei_id", get(get_interaction))
}

#[tracing::instrument(skip(pool), fields(eei_id = %eei_id))]
async fn get_interaction(
    State(pool): State<PgPool>,
    Path(eei_id): Path<String>,
) -> Result<Response, AppError> {
    let detail = queries::get::handle(pool, GetInteractionQuery { eei_id }).await?;
    Ok(ApiResponse::success(detail).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_structure() {
        let router = interactions_routes();
        assert!(format!("{:?}", router).contains("Router"));
    }
}
