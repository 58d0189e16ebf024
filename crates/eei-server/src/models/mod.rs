//! Domain row types read from the relational store
//!
//! All entities are created and mutated by the offline ingestion pipeline;
//! this API only ever selects them. The row structs below mirror the joined
//! shapes the query layer produces, not the raw tables.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Method type tag distinguishing direct structural evidence from
/// computational inference.
pub const METHOD_TYPE_EXPERIMENTAL: &str = "experimental";
pub const METHOD_TYPE_PREDICTED: &str = "predicted";

/// One exon-exon interaction joined with both exons, both proteins, their
/// genes, the detection method, and the optional orthology mapping.
///
/// Business keys (`exon1`, `protein1`, `gene1`, ...) are carried instead of
/// surrogate ids so responses and exports can be rendered without further
/// lookups. Orthology fields are populated only for predicted interactions.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct InteractionRow {
    pub eei_id: i32,
    pub exon1_id: i32,
    pub exon2_id: i32,
    /// Ensembl exon identifiers
    pub exon1: String,
    pub exon2: String,
    /// UniProt identifiers
    pub protein1: String,
    pub protein2: String,
    pub gene1: Option<String>,
    pub gene2: Option<String>,
    pub method_name: String,
    pub method_type: String,
    pub pdb_id: Option<String>,
    pub jaccard_percent: Option<f64>,
    pub aa1: Option<String>,
    pub aa2: Option<String>,
    pub confidence: Option<f64>,
    pub identity1: Option<f64>,
    pub identity2: Option<f64>,
    pub mouse_exon1_coordinates: Option<String>,
    pub mouse_exon2_coordinates: Option<String>,
}

impl InteractionRow {
    pub fn is_predicted(&self) -> bool {
        self.method_type == METHOD_TYPE_PREDICTED
    }

    pub fn is_experimental(&self) -> bool {
        self.method_type == METHOD_TYPE_EXPERIMENTAL
    }
}

/// Exon with its owning gene, as returned by the entity lookup
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ExonDetail {
    pub exon_id: i32,
    pub ensembl_exon_id: String,
    pub chromosome: Option<String>,
    pub strand: Option<i16>,
    pub start_position: Option<i64>,
    pub end_position: Option<i64>,
    pub length: Option<i64>,
    pub gene_symbol: Option<String>,
    pub gene_name: Option<String>,
}

/// Protein with its owning gene, as returned by the entity lookup
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProteinDetail {
    pub protein_id: i32,
    pub uniprot_id: String,
    pub protein_name: Option<String>,
    pub sequence_length: Option<i32>,
    pub molecular_weight: Option<f64>,
    pub gene_symbol: Option<String>,
    pub gene_name: Option<String>,
}

/// PISA free-energy attributes attached to experimental PISA interactions
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PisaAttributes {
    pub free_energy: Option<f64>,
    pub buried_area: Option<f64>,
    pub hydrogen_bonds: Option<i32>,
    pub salt_bridges: Option<i32>,
}

/// EPPIC classification scores attached to experimental EPPIC interactions
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EppicAttributes {
    pub cs_score: Option<f64>,
    pub cr_score: Option<f64>,
}

/// Full single-interaction view: the joined row plus method side-tables
#[derive(Debug, Clone, Serialize)]
pub struct InteractionDetail {
    #[serde(flatten)]
    pub interaction: InteractionRow,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pisa: Option<PisaAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eppic: Option<EppicAttributes>,
}

/// Per-method interaction count used by distribution endpoints
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MethodCount {
    pub method_name: String,
    pub method_type: String,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(method_type: &str) -> InteractionRow {
        InteractionRow {
            eei_id: 1,
            exon1_id: 10,
            exon2_id: 11,
            exon1: "ENSE0001".to_string(),
            exon2: "ENSE0002".to_string(),
            protein1: "P04637".to_string(),
            protein2: "Q00987".to_string(),
            gene1: Some("TP53".to_string()),
            gene2: Some("MDM2".to_string()),
            method_name: "PISA".to_string(),
            method_type: method_type.to_string(),
            pdb_id: None,
            jaccard_percent: None,
            aa1: None,
            aa2: None,
            confidence: None,
            identity1: None,
            identity2: None,
            mouse_exon1_coordinates: None,
            mouse_exon2_coordinates: None,
        }
    }

    #[test]
    fn test_method_type_predicates() {
        assert!(row(METHOD_TYPE_EXPERIMENTAL).is_experimental());
        assert!(!row(METHOD_TYPE_EXPERIMENTAL).is_predicted());
        assert!(row(METHOD_TYPE_PREDICTED).is_predicted());
    }
}
