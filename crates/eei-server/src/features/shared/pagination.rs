//! Shared pagination utilities
//!
//! List endpoints slice an in-memory, already-filtered row list into an
//! offset/limit page. Two distinct `has_more` contracts exist side by side
//! and are intentionally NOT unified:
//!
//! - **Exact** ([`Page`] / [`PageInfo`]): `has_more = offset + limit < total`
//!   where `total` is the full filtered count. Used by the network endpoints.
//! - **Heuristic** ([`SearchPageInfo`]): `has_more = (count == limit)`, i.e.
//!   "the page came back full, so more may exist". Used by the search
//!   endpoint, whose SQL-level pagination never learns the total.
//!
//! Callers depend on whichever semantic their endpoint documents.

use serde::{Deserialize, Serialize};

/// Default page size for list endpoints.
pub const DEFAULT_LIMIT: i64 = 50;

/// Upper bound on page size.
pub const MAX_LIMIT: i64 = 500;

/// Common offset/limit request parameters
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PageParams {
    /// Page size. Defaults to 50, clamped to 1-500.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    /// Rows to skip. Defaults to 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
}

impl PageParams {
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Self {
        Self { limit, offset }
    }

    /// Page size, defaulting to 50 and clamped to 1-500
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// Offset, defaulting to 0, never negative
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }

    /// Validate raw parameters, returning an error message on violation
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(limit) = self.limit {
            if !(1..=MAX_LIMIT).contains(&limit) {
                return Err("Limit must be between 1 and 500");
            }
        }
        if let Some(offset) = self.offset {
            if offset < 0 {
                return Err("Offset must not be negative");
            }
        }
        Ok(())
    }
}

/// Exact pagination metadata: total is the full filtered count
///
/// `hasMore` keeps its historical camelCase name on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageInfo {
    pub limit: i64,
    pub offset: i64,
    /// Full filtered count, not the page size
    pub total: i64,
    #[serde(rename = "hasMore")]
    pub has_more: bool,
}

/// Heuristic pagination metadata for search: a full page signals more may exist
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchPageInfo {
    pub limit: i64,
    pub offset: i64,
    /// Number of rows in this page
    pub count: i64,
    #[serde(rename = "hasMore")]
    pub has_more: bool,
}

impl SearchPageInfo {
    pub fn new(limit: i64, offset: i64, count: i64) -> Self {
        Self {
            limit,
            offset,
            count,
            has_more: count == limit,
        }
    }
}

/// One page of an in-memory row list
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: PageInfo,
}

/// Slice `rows[offset..offset+limit]`, preserving order
///
/// An offset beyond the end yields an empty page; a short tail page and an
/// empty page both report `has_more = false`.
pub fn paginate<T>(rows: Vec<T>, limit: i64, offset: i64) -> Page<T> {
    let total = rows.len() as i64;
    let has_more = offset + limit < total;
    let items = rows
        .into_iter()
        .skip(offset.max(0) as usize)
        .take(limit.max(0) as usize)
        .collect();

    Page {
        items,
        pagination: PageInfo {
            limit,
            offset,
            total,
            has_more,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_params_defaults() {
        let params = PageParams::default();
        assert_eq!(params.limit(), 50);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_page_params_clamping() {
        let params = PageParams::new(Some(10_000), Some(-3));
        assert_eq!(params.limit(), 500);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_page_params_validation() {
        assert!(PageParams::new(Some(1), Some(0)).validate().is_ok());
        assert!(PageParams::new(Some(0), None).validate().is_err());
        assert!(PageParams::new(None, Some(-1)).validate().is_err());
    }

    #[test]
    fn test_paginate_empty_list() {
        let page = paginate(Vec::<i32>::new(), 10, 0);
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total, 0);
        assert!(!page.pagination.has_more);
    }

    #[test]
    fn test_paginate_single_row() {
        let page = paginate(vec![1], 10, 0);
        assert_eq!(page.items, vec![1]);
        assert_eq!(page.pagination.total, 1);
        assert!(!page.pagination.has_more);
    }

    #[test]
    fn test_paginate_exact_page_boundary() {
        let page = paginate(vec![1, 2, 3], 3, 0);
        assert_eq!(page.items.len(), 3);
        assert!(!page.pagination.has_more);
    }

    #[test]
    fn test_paginate_one_more_than_a_page() {
        let page = paginate(vec![1, 2, 3, 4], 3, 0);
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.pagination.total, 4);
        assert!(page.pagination.has_more);

        let tail = paginate(vec![1, 2, 3, 4], 3, 3);
        assert_eq!(tail.items, vec![4]);
        assert!(!tail.pagination.has_more);
    }

    #[test]
    fn test_paginate_offset_beyond_end() {
        let page = paginate(vec![1, 2, 3], 10, 100);
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total, 3);
        assert!(!page.pagination.has_more);
    }

    #[test]
    fn test_paginate_preserves_order() {
        let page = paginate(vec![5, 4, 3, 2, 1], 2, 1);
        assert_eq!(page.items, vec![4, 3]);
    }

    #[test]
    fn test_has_more_serializes_camel_case() {
        let page = paginate(vec![1, 2, 3], 2, 0);
        let value = serde_json::to_value(&page.pagination).unwrap();
        assert_eq!(value["hasMore"], true);
        assert!(value.get("has_more").is_none());
    }

    #[test]
    fn test_search_page_info_full_page_signals_more() {
        let info = SearchPageInfo::new(10, 0, 10);
        assert!(info.has_more);
    }

    #[test]
    fn test_search_page_info_short_page_signals_done() {
        let info = SearchPageInfo::new(10, 0, 7);
        assert!(!info.has_more);
    }
}
