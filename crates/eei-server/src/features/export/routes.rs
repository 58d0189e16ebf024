use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::Utc;
use serde_json::json;
use sqlx::PgPool;

use super::format::{columns_for, write_delimited};
use super::queries::export_interactions::{ExportData, ExportError, ExportFormat, ExportQuery};
use crate::api::response::ApiResponse;
use crate::error::AppError;

pub fn export_routes() -> Router<PgPool> {
    Router::new().route("/interactions", get(export_interactions))
}

#[tracing::instrument(
    skip(pool, query),
    fields(export_type = %query.export_type, format = ?query.format)
)]
async fn export_interactions(
    State(pool): State<PgPool>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, AppError> {
    let format = query.format;
    let data = super::queries::export_interactions::handle(pool, query).await?;

    tracing::debug!(rows = data.rows.len(), "Export assembled");

    match format {
        ExportFormat::Json => Ok(json_response(data)),
        ExportFormat::Csv => delimited_response(data, b',', "csv", "text/csv; charset=utf-8"),
        ExportFormat::Tsv => delimited_response(
            data,
            b'\t',
            "tsv",
            "text/tab-separated-values; charset=utf-8",
        ),
    }
}

/// JSON exports keep the API envelope and carry counts, applied filters, and
/// a generation timestamp in the metadata.
fn json_response(data: ExportData) -> Response {
    let meta = json!({
        "export_type": data.export_type,
        "experimental_count": data.experimental_count,
        "predicted_count": data.predicted_count,
        "total_count": data.experimental_count + data.predicted_count,
        "filters": data.filters,
        "generated_at": Utc::now().to_rfc3339(),
    });
    ApiResponse::success_with_meta(data.rows, meta).into_response()
}

/// CSV/TSV exports bypass the JSON envelope: raw delimited text with
/// download-oriented headers and a timestamped attachment filename.
fn delimited_response(
    data: ExportData,
    delimiter: u8,
    extension: &str,
    content_type: &str,
) -> Result<Response, AppError> {
    let columns = columns_for(data.export_type.includes_predicted());
    let text = write_delimited(&data.rows, &columns, delimiter).map_err(ExportError::Render)?;

    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!(
        "eei_interactions_{}_{}.{}",
        data.export_type, timestamp, extension
    );

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(Body::from(text))
        .map_err(|e| AppError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_structure() {
        let router = export_routes();
        assert!(format!("{:?}", router).contains("Router"));
    }
}
