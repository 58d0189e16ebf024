//! Free-text interaction search
//!
//! Routes a term plus a declared entity-type hint to the matching column set
//! and returns a uniform paginated envelope. Pagination here is SQL-level, so
//! `has_more` is the "page came back full" heuristic rather than the exact
//! total-count comparison the network endpoints use.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::AppError;
use crate::features::shared::pagination::{DEFAULT_LIMIT, MAX_LIMIT};
use crate::features::shared::{SearchFilter, SearchPageInfo};
use crate::models::InteractionRow;

/// Entity type hint for search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    Gene,
    Protein,
    Exon,
    #[default]
    Any,
}

impl std::fmt::Display for SearchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchType::Gene => write!(f, "gene"),
            SearchType::Protein => write!(f, "protein"),
            SearchType::Exon => write!(f, "exon"),
            SearchType::Any => write!(f, "any"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    pub q: String,
    #[serde(rename = "type", default)]
    pub search_type: SearchType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub search_term: String,
    pub search_type: SearchType,
    pub results: Vec<InteractionRow>,
    pub pagination: SearchPageInfo,
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Search term is required and cannot be empty")]
    TermRequired,
    #[error("Limit must be between 1 and 500")]
    InvalidLimit,
    #[error("Offset must not be negative")]
    InvalidOffset,
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::Database(e) => AppError::from(e),
            other => AppError::validation(other.to_string()),
        }
    }
}

impl SearchQuery {
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.q.trim().is_empty() {
            return Err(SearchError::TermRequired);
        }
        if let Some(limit) = self.limit {
            if !(1..=MAX_LIMIT).contains(&limit) {
                return Err(SearchError::InvalidLimit);
            }
        }
        if let Some(offset) = self.offset {
            if offset < 0 {
                return Err(SearchError::InvalidOffset);
            }
        }
        Ok(())
    }

    fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }

    fn filter(&self) -> SearchFilter {
        let (genes, proteins, exons) = match self.search_type {
            SearchType::Gene => (true, false, false),
            SearchType::Protein => (false, true, false),
            SearchType::Exon => (false, false, true),
            SearchType::Any => (true, true, true),
        };
        SearchFilter {
            term: self.q.trim().to_string(),
            match_genes: genes,
            match_proteins: proteins,
            match_exons: exons,
            limit: self.limit(),
            offset: self.offset(),
        }
    }
}

#[tracing::instrument(skip(pool), fields(q = %query.q, search_type = %query.search_type))]
pub async fn handle(pool: PgPool, query: SearchQuery) -> Result<SearchResponse, SearchError> {
    query.validate()?;

    let limit = query.limit();
    let offset = query.offset();

    let results = query.filter().build().fetch_interactions(&pool).await?;
    let count = results.len() as i64;

    tracing::debug!(count, "Search completed");

    Ok(SearchResponse {
        search_term: query.q.trim().to_string(),
        search_type: query.search_type,
        pagination: SearchPageInfo::new(limit, offset, count),
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(q: &str, search_type: SearchType) -> SearchQuery {
        SearchQuery {
            q: q.to_string(),
            search_type,
            limit: None,
            offset: None,
        }
    }

    #[test]
    fn test_empty_term_is_rejected() {
        assert!(matches!(
            query("   ", SearchType::Any).validate(),
            Err(SearchError::TermRequired)
        ));
    }

    #[test]
    fn test_any_matches_all_three_column_sets() {
        let filter = query("TP53", SearchType::Any).filter();
        assert!(filter.match_genes && filter.match_proteins && filter.match_exons);
    }

    #[test]
    fn test_specific_type_matches_only_its_column() {
        let filter = query("P04637", SearchType::Protein).filter();
        assert!(!filter.match_genes);
        assert!(filter.match_proteins);
        assert!(!filter.match_exons);
    }

    #[test]
    fn test_search_type_defaults_to_any() {
        let query: SearchQuery = serde_json::from_str(r#"{"q": "TP53"}"#).unwrap();
        assert_eq!(query.search_type, SearchType::Any);
    }

    #[test]
    fn test_search_type_parses_lowercase() {
        let query: SearchQuery =
            serde_json::from_str(r#"{"q": "x", "type": "exon"}"#).unwrap();
        assert_eq!(query.search_type, SearchType::Exon);
    }

    #[test]
    fn test_invalid_limit_is_rejected() {
        let mut q = query("TP53", SearchType::Any);
        q.limit = Some(0);
        assert!(matches!(q.validate(), Err(SearchError::InvalidLimit)));
    }
}
