use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use sqlx::PgPool;

use super::queries;
use crate::api::response::ApiResponse;
use crate::error::AppError;

pub fn stats_routes() -> Router<PgPool> {
    Router::new()
        .route("/summary", get(summary))
        .route("/distributions", get(distributions))
        .route("/confidence", get(confidence))
}

#[tracing::instrument(skip(pool))]
async fn summary(State(pool): State<PgPool>) -> Result<Response, AppError> {
    let response = queries::summary::handle(pool).await?;
    Ok(ApiResponse::success(response).into_response())
}

#[tracing::instrument(skip(pool))]
async fn distributions(State(pool): State<PgPool>) -> Result<Response, AppError> {
    let response = queries::distributions::handle(pool).await?;
    Ok(ApiResponse::success(response).into_response())
}

#[tracing::instrument(skip(pool))]
async fn confidence(State(pool): State<PgPool>) -> Result<Response, AppError> {
    let response = queries::confidence::handle(pool).await?;
    Ok(ApiResponse::success(response).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_structure() {
        let router = stats_routes();
        assert!(format!("{:?}", router).contains("Router"));
    }
}
