use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use sqlx::PgPool;

use super::queries::{self, GetExonQuery};
use crate::api::response::ApiResponse;
use crate::error::AppError;

pub fn exons_routes() -> Router<PgPool> {
    Router::new().route("/:id", get(get_exon))
}

#[tracing::instrument(skip(pool), fields(id = %id))]
async fn get_exon(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let exon = queries::get::handle(pool, GetExonQuery { id }).await?;
    Ok(ApiResponse::success(exon).into_response())
}
