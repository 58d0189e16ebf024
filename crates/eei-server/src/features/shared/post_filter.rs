//! In-memory result post-filtering
//!
//! Filters that the query layer does not push down (client-side method
//! equality, thresholds re-checked over a cached batch) run here, before
//! pagination, preserving the batch's existing order.

use crate::models::InteractionRow;

/// Per-field filters applied to a fetched interaction batch
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    /// Exact method-name equality
    pub method: Option<String>,
    pub min_confidence: Option<f64>,
    pub min_jaccard: Option<f64>,
}

impl PostFilter {
    pub fn is_noop(&self) -> bool {
        self.method.is_none() && self.min_confidence.is_none() && self.min_jaccard.is_none()
    }

    /// Apply to a batch, keeping order
    ///
    /// Threshold filters retain rows whose field is null: an interaction of a
    /// type that does not carry the attribute is never excluded by a floor on
    /// that attribute.
    pub fn apply(&self, rows: Vec<InteractionRow>) -> Vec<InteractionRow> {
        if self.is_noop() {
            return rows;
        }

        rows.into_iter()
            .filter(|row| {
                if let Some(ref method) = self.method {
                    if row.method_name != *method {
                        return false;
                    }
                }
                if let Some(min_confidence) = self.min_confidence {
                    if row.confidence.is_some_and(|c| c < min_confidence) {
                        return false;
                    }
                }
                if let Some(min_jaccard) = self.min_jaccard {
                    if row.jaccard_percent.is_some_and(|j| j < min_jaccard) {
                        return false;
                    }
                }
                true
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{METHOD_TYPE_EXPERIMENTAL, METHOD_TYPE_PREDICTED};

    fn row(
        eei_id: i32,
        gene1: Option<&str>,
        protein1: &str,
        method_name: &str,
        confidence: Option<f64>,
    ) -> InteractionRow {
        let method_type = if method_name.starts_with("predicted") {
            METHOD_TYPE_PREDICTED
        } else {
            METHOD_TYPE_EXPERIMENTAL
        };
        InteractionRow {
            eei_id,
            exon1_id: eei_id * 2,
            exon2_id: eei_id * 2 + 1,
            exon1: format!("ENSE{:08}", eei_id * 2),
            exon2: format!("ENSE{:08}", eei_id * 2 + 1),
            protein1: protein1.to_string(),
            protein2: "Q99999".to_string(),
            gene1: gene1.map(String::from),
            gene2: None,
            method_name: method_name.to_string(),
            method_type: method_type.to_string(),
            pdb_id: None,
            jaccard_percent: None,
            aa1: None,
            aa2: None,
            confidence,
            identity1: None,
            identity2: None,
            mouse_exon1_coordinates: None,
            mouse_exon2_coordinates: None,
        }
    }

    #[test]
    fn test_noop_filter_returns_batch_unchanged() {
        let rows = vec![row(1, None, "P1", "PISA", None)];
        let filtered = PostFilter::default().apply(rows.clone());
        assert_eq!(filtered.len(), rows.len());
    }

    #[test]
    fn test_confidence_floor_retains_null_rows() {
        let rows = vec![
            row(1, None, "P1", "PISA", None),
            row(2, None, "P2", "predicted_PISA", Some(0.4)),
            row(3, None, "P3", "predicted_PISA", Some(0.9)),
        ];
        let filter = PostFilter {
            min_confidence: Some(0.5),
            ..Default::default()
        };
        let retained: Vec<i32> = filter.apply(rows).iter().map(|r| r.eei_id).collect();
        assert_eq!(retained, vec![1, 3]);
    }

    #[test]
    fn test_method_filter_is_exact_equality() {
        let rows = vec![
            row(1, None, "P1", "PISA", None),
            row(2, None, "P2", "predicted_PISA", Some(0.8)),
        ];
        let filter = PostFilter {
            method: Some("PISA".to_string()),
            ..Default::default()
        };
        let retained = filter.apply(rows);
        assert_eq!(retained.len(), 1);
        assert_eq!(retained[0].eei_id, 1);
    }

    #[test]
    fn test_filters_preserve_order() {
        let rows = vec![
            row(3, None, "P3", "PISA", None),
            row(1, None, "P1", "PISA", None),
            row(2, None, "P2", "predicted_PISA", Some(0.1)),
        ];
        let filter = PostFilter {
            method: Some("PISA".to_string()),
            ..Default::default()
        };
        let retained: Vec<i32> = filter.apply(rows).iter().map(|r| r.eei_id).collect();
        assert_eq!(retained, vec![3, 1]);
    }
}
