//! Network statistics aggregation
//!
//! Computes a summary over an in-memory interaction batch without
//! re-querying the store. Statistics are always taken over the full filtered
//! batch, never over a single returned page.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::InteractionRow;

/// Min/max/avg over the non-null values of a score column
///
/// An empty value set is a valid state: `min`/`max` serialize as JSON `null`
/// ("no data") and `avg` stays 0.0. A fold is used instead of iterator
/// min/max so the empty case can never surface as Infinity or NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub avg: f64,
}

impl ScoreRange {
    pub fn empty() -> Self {
        Self {
            min: None,
            max: None,
            avg: 0.0,
        }
    }

    /// Fold non-null values into a range, detecting the empty case explicitly
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut count = 0usize;
        let mut sum = 0.0f64;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for value in values {
            count += 1;
            sum += value;
            if value < min {
                min = value;
            }
            if value > max {
                max = value;
            }
        }

        if count == 0 {
            return Self::empty();
        }

        Self {
            min: Some(min),
            max: Some(max),
            avg: sum / count as f64,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_none()
    }
}

/// Summary over a filtered interaction batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkStatistics {
    pub total_interactions: i64,
    pub unique_genes: i64,
    pub unique_proteins: i64,
    pub unique_exons: i64,
    pub experimental_interactions: i64,
    pub predicted_interactions: i64,
    /// De-duplicated method names, in first-seen order
    pub methods: Vec<String>,
    pub confidence_range: ScoreRange,
    pub jaccard_range: ScoreRange,
}

/// Aggregate a batch of interaction rows
///
/// Unique entity counts union both sides of each pair; null/missing values
/// are excluded from the sets. An empty batch yields zero counts, empty
/// sets, and "no data" ranges.
pub fn aggregate(rows: &[InteractionRow]) -> NetworkStatistics {
    let mut genes: BTreeSet<&str> = BTreeSet::new();
    let mut proteins: BTreeSet<&str> = BTreeSet::new();
    let mut exons: BTreeSet<&str> = BTreeSet::new();
    let mut methods: Vec<String> = Vec::new();
    let mut experimental = 0i64;
    let mut predicted = 0i64;

    for row in rows {
        if let Some(ref gene) = row.gene1 {
            genes.insert(gene);
        }
        if let Some(ref gene) = row.gene2 {
            genes.insert(gene);
        }
        proteins.insert(&row.protein1);
        proteins.insert(&row.protein2);
        exons.insert(&row.exon1);
        exons.insert(&row.exon2);

        if row.is_predicted() {
            predicted += 1;
        } else if row.is_experimental() {
            experimental += 1;
        }

        if !methods.contains(&row.method_name) {
            methods.push(row.method_name.clone());
        }
    }

    NetworkStatistics {
        total_interactions: rows.len() as i64,
        unique_genes: genes.len() as i64,
        unique_proteins: proteins.len() as i64,
        unique_exons: exons.len() as i64,
        experimental_interactions: experimental,
        predicted_interactions: predicted,
        methods,
        confidence_range: ScoreRange::from_values(rows.iter().filter_map(|r| r.confidence)),
        jaccard_range: ScoreRange::from_values(rows.iter().filter_map(|r| r.jaccard_percent)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{METHOD_TYPE_EXPERIMENTAL, METHOD_TYPE_PREDICTED};

    fn row(
        eei_id: i32,
        gene1: Option<&str>,
        gene2: Option<&str>,
        method_name: &str,
        method_type: &str,
        confidence: Option<f64>,
        jaccard: Option<f64>,
    ) -> InteractionRow {
        InteractionRow {
            eei_id,
            exon1_id: eei_id * 2,
            exon2_id: eei_id * 2 + 1,
            exon1: format!("ENSE{:08}", eei_id * 2),
            exon2: format!("ENSE{:08}", eei_id * 2 + 1),
            protein1: format!("P{:05}", eei_id),
            protein2: format!("Q{:05}", eei_id),
            gene1: gene1.map(String::from),
            gene2: gene2.map(String::from),
            method_name: method_name.to_string(),
            method_type: method_type.to_string(),
            pdb_id: None,
            jaccard_percent: jaccard,
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
    fn test_empty_batch_is_valid() {
        let stats = aggregate(&[]);
        assert_eq!(stats.total_interactions, 0);
        assert_eq!(stats.unique_genes, 0);
        assert_eq!(stats.unique_proteins, 0);
        assert_eq!(stats.unique_exons, 0);
        assert!(stats.methods.is_empty());
        assert!(stats.confidence_range.is_empty());
        assert!(stats.jaccard_range.is_empty());
        assert_eq!(stats.confidence_range.avg, 0.0);
    }

    #[test]
    fn test_empty_range_serializes_as_null_not_infinity() {
        let value = serde_json::to_value(ScoreRange::empty()).unwrap();
        assert!(value["min"].is_null());
        assert!(value["max"].is_null());
        assert_eq!(value["avg"], 0.0);
    }

    #[test]
    fn test_unique_counts_union_both_sides() {
        let rows = vec![
            row(1, Some("TP53"), Some("MDM2"), "PISA", METHOD_TYPE_EXPERIMENTAL, None, Some(40.0)),
            row(2, Some("MDM2"), None, "EPPIC", METHOD_TYPE_EXPERIMENTAL, None, Some(60.0)),
        ];
        let stats = aggregate(&rows);
        // TP53 + MDM2; the null gene2 is excluded from the set
        assert_eq!(stats.unique_genes, 2);
        assert_eq!(stats.unique_proteins, 4);
        assert_eq!(stats.unique_exons, 4);
    }

    #[test]
    fn test_method_type_counts_and_names() {
        let rows = vec![
            row(1, None, None, "PISA", METHOD_TYPE_EXPERIMENTAL, None, Some(10.0)),
            row(2, None, None, "predicted_PISA", METHOD_TYPE_PREDICTED, Some(0.8), None),
            row(3, None, None, "PISA", METHOD_TYPE_EXPERIMENTAL, None, Some(20.0)),
        ];
        let stats = aggregate(&rows);
        assert_eq!(stats.experimental_interactions, 2);
        assert_eq!(stats.predicted_interactions, 1);
        assert_eq!(stats.methods, vec!["PISA", "predicted_PISA"]);
    }

    #[test]
    fn test_ranges_skip_null_values() {
        let rows = vec![
            row(1, None, None, "PISA", METHOD_TYPE_EXPERIMENTAL, None, Some(25.0)),
            row(2, None, None, "predicted_PISA", METHOD_TYPE_PREDICTED, Some(0.4), None),
            row(3, None, None, "predicted_PISA", METHOD_TYPE_PREDICTED, Some(0.9), None),
        ];
        let stats = aggregate(&rows);
        assert_eq!(stats.confidence_range.min, Some(0.4));
        assert_eq!(stats.confidence_range.max, Some(0.9));
        assert!((stats.confidence_range.avg - 0.65).abs() < 1e-9);
        assert_eq!(stats.jaccard_range.min, Some(25.0));
        assert_eq!(stats.jaccard_range.max, Some(25.0));
    }

    #[test]
    fn test_all_null_scores_yield_no_data_range() {
        let rows = vec![row(1, None, None, "PISA", METHOD_TYPE_EXPERIMENTAL, None, None)];
        let stats = aggregate(&rows);
        assert!(stats.confidence_range.is_empty());
        assert!(stats.jaccard_range.is_empty());
    }
}
