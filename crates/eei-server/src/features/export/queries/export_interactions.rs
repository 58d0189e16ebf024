//! Interaction export fetches
//!
//! Experimental and predicted result sets are selected independently. The
//! "All" export issues both fetches concurrently (they are mutually
//! independent) and concatenates experimental rows before predicted ones,
//! with no duplication or loss.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use super::super::format::predicted_variant;
use crate::error::AppError;
use crate::features::shared::ExportFilter;
use crate::models::{InteractionRow, METHOD_TYPE_EXPERIMENTAL, METHOD_TYPE_PREDICTED};

/// Default row cap for exports when no limit is given
pub const DEFAULT_EXPORT_LIMIT: i64 = 10_000;

/// Which interaction sets to export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportType {
    Experimental,
    Predicted,
    #[default]
    All,
}

impl ExportType {
    pub fn includes_predicted(self) -> bool {
        matches!(self, ExportType::Predicted | ExportType::All)
    }
}

impl std::fmt::Display for ExportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportType::Experimental => write!(f, "experimental"),
            ExportType::Predicted => write!(f, "predicted"),
            ExportType::All => write!(f, "all"),
        }
    }
}

impl std::str::FromStr for ExportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "experimental" => Ok(ExportType::Experimental),
            "predicted" => Ok(ExportType::Predicted),
            "all" => Ok(ExportType::All),
            other => Err(format!(
                "Invalid export type '{}'. Must be 'experimental', 'predicted', or 'All'",
                other
            )),
        }
    }
}

impl<'de> Deserialize<'de> for ExportType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Output format for exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!(
                "Invalid export format '{}'. Must be 'csv', 'tsv', or 'json'",
                other
            )),
        }
    }
}

impl<'de> Deserialize<'de> for ExportFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ExportQuery {
    #[serde(rename = "type", default)]
    pub export_type: ExportType,
    #[serde(default)]
    pub format: ExportFormat,
    /// Row cap; the literal "all" (any case) disables the cap entirely
    pub limit: Option<String>,
    pub offset: Option<i64>,
    /// Base method-name filter, remapped per fetch
    pub method: Option<String>,
    pub min_jaccard: Option<f64>,
    pub min_confidence: Option<f64>,
}

/// Filters echoed back in JSON export metadata
#[derive(Debug, Clone, Serialize)]
pub struct AppliedFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_jaccard: Option<f64>,
    /// None means the cap was disabled with limit=all
    pub limit: Option<i64>,
    pub offset: i64,
}

#[derive(Debug, Clone)]
pub struct ExportData {
    pub export_type: ExportType,
    pub rows: Vec<InteractionRow>,
    pub experimental_count: i64,
    pub predicted_count: i64,
    pub filters: AppliedFilters,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Limit must be a positive integer or 'all'")]
    InvalidLimit,
    #[error("Offset must not be negative")]
    InvalidOffset,
    #[error("min_confidence must be between 0 and 1")]
    InvalidConfidence,
    #[error("min_jaccard must be between 0 and 100")]
    InvalidJaccard,
    #[error("Export rendering failed: {0}")]
    Render(#[from] csv::Error),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::Database(e) => AppError::from(e),
            ExportError::Render(e) => AppError::Internal(e.to_string()),
            other => AppError::validation(other.to_string()),
        }
    }
}

/// Parse the export row cap: a positive integer, or "all" to disable it
fn parse_limit(raw: Option<&str>) -> Result<Option<i64>, ExportError> {
    match raw {
        None => Ok(Some(DEFAULT_EXPORT_LIMIT)),
        Some(s) if s.eq_ignore_ascii_case("all") => Ok(None),
        Some(s) => match s.trim().parse::<i64>() {
            Ok(n) if n > 0 => Ok(Some(n)),
            _ => Err(ExportError::InvalidLimit),
        },
    }
}

impl ExportQuery {
    fn validate(&self) -> Result<(Option<i64>, i64), ExportError> {
        let limit = parse_limit(self.limit.as_deref())?;
        let offset = self.offset.unwrap_or(0);
        if offset < 0 {
            return Err(ExportError::InvalidOffset);
        }
        if let Some(min_confidence) = self.min_confidence {
            if !(0.0..=1.0).contains(&min_confidence) {
                return Err(ExportError::InvalidConfidence);
            }
        }
        if let Some(min_jaccard) = self.min_jaccard {
            if !(0.0..=100.0).contains(&min_jaccard) {
                return Err(ExportError::InvalidJaccard);
            }
        }
        Ok((limit, offset))
    }

    /// Store-side filter for the experimental fetch: the base method name
    fn experimental_filter(&self, limit: Option<i64>, offset: i64) -> ExportFilter {
        ExportFilter {
            method_type: Some(METHOD_TYPE_EXPERIMENTAL.to_string()),
            method: self.method.clone(),
            min_confidence: self.min_confidence,
            min_jaccard: self.min_jaccard,
            limit,
            offset: Some(offset),
        }
    }

    /// Store-side filter for the predicted fetch: the method name is remapped
    /// to its predicted variant
    fn predicted_filter(&self, limit: Option<i64>, offset: i64) -> ExportFilter {
        ExportFilter {
            method_type: Some(METHOD_TYPE_PREDICTED.to_string()),
            method: self.method.as_deref().map(predicted_variant),
            min_confidence: self.min_confidence,
            min_jaccard: self.min_jaccard,
            limit,
            offset: Some(offset),
        }
    }
}

#[tracing::instrument(skip(pool, query), fields(export_type = %query.export_type))]
pub async fn handle(pool: PgPool, query: ExportQuery) -> Result<ExportData, ExportError> {
    let (limit, offset) = query.validate()?;

    let (experimental, predicted) = match query.export_type {
        ExportType::Experimental => {
            let rows = query
                .experimental_filter(limit, offset)
                .build()
                .fetch_interactions(&pool)
                .await?;
            (rows, Vec::new())
        }
        ExportType::Predicted => {
            let rows = query
                .predicted_filter(limit, offset)
                .build()
                .fetch_interactions(&pool)
                .await?;
            (Vec::new(), rows)
        }
        ExportType::All => {
            // The two fetches are independent; issue them concurrently.
            let experimental_query = query.experimental_filter(limit, offset).build();
            let predicted_query = query.predicted_filter(limit, offset).build();
            futures::try_join!(
                experimental_query.fetch_interactions(&pool),
                predicted_query.fetch_interactions(&pool),
            )?
        }
    };

    let experimental_count = experimental.len() as i64;
    let predicted_count = predicted.len() as i64;

    let mut rows = experimental;
    rows.extend(predicted);

    tracing::debug!(
        experimental = experimental_count,
        predicted = predicted_count,
        "Export fetch completed"
    );

    Ok(ExportData {
        export_type: query.export_type,
        rows,
        experimental_count,
        predicted_count,
        filters: AppliedFilters {
            method: query.method.clone(),
            min_confidence: query.min_confidence,
            min_jaccard: query.min_jaccard,
            limit,
            offset,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_defaults_to_cap() {
        assert_eq!(parse_limit(None).unwrap(), Some(DEFAULT_EXPORT_LIMIT));
    }

    #[test]
    fn test_limit_all_disables_cap_case_insensitively() {
        assert_eq!(parse_limit(Some("all")).unwrap(), None);
        assert_eq!(parse_limit(Some("ALL")).unwrap(), None);
        assert_eq!(parse_limit(Some("All")).unwrap(), None);
    }

    #[test]
    fn test_numeric_limit_is_parsed() {
        assert_eq!(parse_limit(Some("500")).unwrap(), Some(500));
    }

    #[test]
    fn test_invalid_limits_are_rejected() {
        assert!(parse_limit(Some("0")).is_err());
        assert!(parse_limit(Some("-5")).is_err());
        assert!(parse_limit(Some("soon")).is_err());
    }

    #[test]
    fn test_export_type_parses_any_case() {
        assert_eq!("All".parse::<ExportType>().unwrap(), ExportType::All);
        assert_eq!("all".parse::<ExportType>().unwrap(), ExportType::All);
        assert_eq!(
            "EXPERIMENTAL".parse::<ExportType>().unwrap(),
            ExportType::Experimental
        );
        assert!("both".parse::<ExportType>().is_err());
    }

    #[test]
    fn test_method_remap_differs_per_fetch() {
        let query = ExportQuery {
            method: Some("PISA".to_string()),
            ..Default::default()
        };
        let experimental = query.experimental_filter(None, 0);
        let predicted = query.predicted_filter(None, 0);
        assert_eq!(experimental.method.as_deref(), Some("PISA"));
        assert_eq!(predicted.method.as_deref(), Some("predicted_PISA"));
    }

    #[test]
    fn test_fetches_are_type_scoped() {
        let query = ExportQuery::default();
        assert_eq!(
            query.experimental_filter(None, 0).method_type.as_deref(),
            Some(METHOD_TYPE_EXPERIMENTAL)
        );
        assert_eq!(
            query.predicted_filter(None, 0).method_type.as_deref(),
            Some(METHOD_TYPE_PREDICTED)
        );
    }

    #[test]
    fn test_confidence_out_of_range_is_rejected() {
        let query = ExportQuery {
            min_confidence: Some(2.0),
            ..Default::default()
        };
        assert!(matches!(
            query.validate(),
            Err(ExportError::InvalidConfidence)
        ));
    }
}
