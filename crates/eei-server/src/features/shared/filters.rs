//! Parameterized interaction-query construction
//!
//! Queries against the interaction join view are assembled from an immutable
//! filter description: a list of predicate clauses plus a parallel list of
//! bound parameters, rendered once into final SQL just before execution.
//! Caller-supplied values are only ever bound parameters; the SQL text
//! interpolates nothing but column names and computed placeholder indices.

use sqlx::PgPool;
use thiserror::Error;

use crate::models::InteractionRow;

/// Default cap on interaction rows returned by network queries
pub const DEFAULT_MAX_INTERACTIONS: i64 = 1000;

/// The canonical interaction join view: both exons, both proteins, their
/// genes, the method, and the optional orthology mapping.
const INTERACTION_SELECT: &str = "SELECT i.eei_id, i.exon1_id, i.exon2_id, \
     e1.ensembl_exon_id AS exon1, e2.ensembl_exon_id AS exon2, \
     p1.uniprot_id AS protein1, p2.uniprot_id AS protein2, \
     g1.gene_symbol AS gene1, g2.gene_symbol AS gene2, \
     m.method_name, m.method_type, \
     i.pdb_id, i.jaccard_percent, i.aa1, i.aa2, \
     om.confidence, om.identity1, om.identity2, \
     om.mouse_exon1_coordinates, om.mouse_exon2_coordinates \
     FROM eei_interactions i \
     JOIN exons e1 ON e1.exon_id = i.exon1_id \
     JOIN exons e2 ON e2.exon_id = i.exon2_id \
     JOIN proteins p1 ON p1.protein_id = i.protein1_id \
     JOIN proteins p2 ON p2.protein_id = i.protein2_id \
     LEFT JOIN genes g1 ON g1.gene_id = p1.gene_id \
     LEFT JOIN genes g2 ON g2.gene_id = p2.gene_id \
     JOIN eei_methods m ON m.method_id = i.method_id \
     LEFT JOIN eei_orthology_mapping om ON om.eei_id = i.eei_id";

/// Predicted rows first by confidence, then unscored/tied rows by jaccard,
/// nulls always last.
const INTERACTION_ORDER: &str =
    "ORDER BY om.confidence DESC NULLS LAST, i.jaccard_percent DESC NULLS LAST";

/// A value destined for a bound query parameter
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    TextArray(Vec<String>),
    Float(f64),
    Int(i64),
}

/// A fully assembled query: SQL text plus its ordered bind list
#[derive(Debug, Clone)]
pub struct BuiltQuery {
    pub sql: String,
    pub binds: Vec<BindValue>,
}

impl BuiltQuery {
    fn query_as(&self) -> sqlx::query::QueryAs<'_, sqlx::Postgres, InteractionRow, sqlx::postgres::PgArguments> {
        let mut query = sqlx::query_as::<_, InteractionRow>(&self.sql);
        for bind in &self.binds {
            query = match bind {
                BindValue::Text(v) => query.bind(v),
                BindValue::TextArray(v) => query.bind(v),
                BindValue::Float(v) => query.bind(v),
                BindValue::Int(v) => query.bind(v),
            };
        }
        query
    }

    /// Execute against the pool, mapping rows into the joined interaction shape
    pub async fn fetch_interactions(
        &self,
        pool: &PgPool,
    ) -> Result<Vec<InteractionRow>, sqlx::Error> {
        self.query_as().fetch_all(pool).await
    }

    /// Execute expecting at most one row
    pub async fn fetch_optional_interaction(
        &self,
        pool: &PgPool,
    ) -> Result<Option<InteractionRow>, sqlx::Error> {
        self.query_as().fetch_optional(pool).await
    }
}

/// Single-interaction lookup by surrogate id over the same join view
pub fn interaction_by_id(eei_id: i32) -> BuiltQuery {
    let mut parts = QueryParts::default();
    parts.clauses.push("i.eei_id = $1".to_string());
    parts.binds.push(BindValue::Int(i64::from(eei_id)));
    parts.render(None, None)
}

/// Accumulates predicate clauses and their bound parameters
#[derive(Debug, Default)]
struct QueryParts {
    clauses: Vec<String>,
    binds: Vec<BindValue>,
}

impl QueryParts {
    /// Index of the next placeholder ($1-based)
    fn next_placeholder(&self) -> usize {
        self.binds.len() + 1
    }

    /// "touches ANY listed identifier, on either side of the pair"
    fn push_identifier_list(&mut self, col1: &str, col2: &str, values: &[String]) {
        let n = self.next_placeholder();
        self.clauses
            .push(format!("({col1} = ANY(${n}) OR {col2} = ANY(${n}))"));
        self.binds.push(BindValue::TextArray(values.to_vec()));
    }

    fn push_text_eq(&mut self, col: &str, value: &str) {
        let n = self.next_placeholder();
        self.clauses.push(format!("{col} = ${n}"));
        self.binds.push(BindValue::Text(value.to_string()));
    }

    /// Null-tolerant minimum threshold: rows of a type that simply does not
    /// carry the attribute are never excluded by it.
    fn push_null_or_ge(&mut self, col: &str, threshold: f64) {
        let n = self.next_placeholder();
        self.clauses
            .push(format!("({col} IS NULL OR {col} >= ${n})"));
        self.binds.push(BindValue::Float(threshold));
    }

    fn render(mut self, limit: Option<i64>, offset: Option<i64>) -> BuiltQuery {
        let mut sql = String::from(INTERACTION_SELECT);
        if !self.clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.clauses.join(" AND "));
        }
        sql.push(' ');
        sql.push_str(INTERACTION_ORDER);
        if let Some(limit) = limit {
            let n = self.next_placeholder();
            sql.push_str(&format!(" LIMIT ${n}"));
            self.binds.push(BindValue::Int(limit));
        }
        if let Some(offset) = offset {
            let n = self.next_placeholder();
            sql.push_str(&format!(" OFFSET ${n}"));
            self.binds.push(BindValue::Int(offset));
        }
        BuiltQuery {
            sql,
            binds: self.binds,
        }
    }
}

/// Errors from filter validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("At least one gene, protein, or exon identifier is required")]
    NoAnchors,
    #[error("max_interactions must be a positive integer")]
    InvalidRowCap,
}

/// Anchored network filter
///
/// Identifier lists match business keys exactly and case-sensitively; each
/// non-empty list ORs across its values and across both sides of the pair,
/// and distinct categories combine with AND.
#[derive(Debug, Clone)]
pub struct InteractionFilter {
    pub genes: Vec<String>,
    pub proteins: Vec<String>,
    pub exons: Vec<String>,
    pub method: Option<String>,
    pub min_confidence: Option<f64>,
    pub min_jaccard: Option<f64>,
    pub max_interactions: i64,
}

impl Default for InteractionFilter {
    fn default() -> Self {
        Self {
            genes: Vec::new(),
            proteins: Vec::new(),
            exons: Vec::new(),
            method: None,
            min_confidence: None,
            min_jaccard: None,
            max_interactions: DEFAULT_MAX_INTERACTIONS,
        }
    }
}

impl InteractionFilter {
    /// Assemble the capped, anchored interaction query
    ///
    /// Fails before any SQL is constructed when no anchor identifiers were
    /// given, so an invalid request never reaches the store.
    pub fn build(&self) -> Result<BuiltQuery, FilterError> {
        if self.genes.is_empty() && self.proteins.is_empty() && self.exons.is_empty() {
            return Err(FilterError::NoAnchors);
        }
        if self.max_interactions < 1 {
            return Err(FilterError::InvalidRowCap);
        }

        let mut parts = QueryParts::default();
        if !self.genes.is_empty() {
            parts.push_identifier_list("g1.gene_symbol", "g2.gene_symbol", &self.genes);
        }
        if !self.proteins.is_empty() {
            parts.push_identifier_list("p1.uniprot_id", "p2.uniprot_id", &self.proteins);
        }
        if !self.exons.is_empty() {
            parts.push_identifier_list("e1.ensembl_exon_id", "e2.ensembl_exon_id", &self.exons);
        }
        if let Some(ref method) = self.method {
            parts.push_text_eq("m.method_name", method);
        }
        if let Some(min_confidence) = self.min_confidence {
            parts.push_null_or_ge("om.confidence", min_confidence);
        }
        if let Some(min_jaccard) = self.min_jaccard {
            parts.push_null_or_ge("i.jaccard_percent", min_jaccard);
        }

        // Single capped page: a row limit, never an offset, on this path.
        Ok(parts.render(Some(self.max_interactions), None))
    }
}

/// Unanchored export filter
///
/// Exports select by method type rather than by anchor identifiers, and may
/// run entirely uncapped (`limit: None`) when the caller asked for all rows.
#[derive(Debug, Clone, Default)]
pub struct ExportFilter {
    pub method_type: Option<String>,
    pub method: Option<String>,
    pub min_confidence: Option<f64>,
    pub min_jaccard: Option<f64>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ExportFilter {
    pub fn build(&self) -> BuiltQuery {
        let mut parts = QueryParts::default();
        if let Some(ref method_type) = self.method_type {
            parts.push_text_eq("m.method_type", method_type);
        }
        if let Some(ref method) = self.method {
            parts.push_text_eq("m.method_name", method);
        }
        if let Some(min_confidence) = self.min_confidence {
            parts.push_null_or_ge("om.confidence", min_confidence);
        }
        if let Some(min_jaccard) = self.min_jaccard {
            parts.push_null_or_ge("i.jaccard_percent", min_jaccard);
        }
        parts.render(self.limit, self.offset)
    }
}

/// Free-text search filter over the interaction join view
///
/// The term is matched case-insensitively as a substring against the enabled
/// columns, on both sides of the pair, with a single shared bind. SQL-level
/// limit/offset pagination is used here, so callers never learn the total
/// match count.
#[derive(Debug, Clone)]
pub struct SearchFilter {
    pub term: String,
    pub match_genes: bool,
    pub match_proteins: bool,
    pub match_exons: bool,
    pub limit: i64,
    pub offset: i64,
}

impl SearchFilter {
    pub fn build(&self) -> BuiltQuery {
        let mut parts = QueryParts::default();

        let mut alternatives: Vec<&str> = Vec::new();
        if self.match_genes {
            alternatives.push("g1.gene_symbol ILIKE $1");
            alternatives.push("g2.gene_symbol ILIKE $1");
        }
        if self.match_proteins {
            alternatives.push("p1.uniprot_id ILIKE $1");
            alternatives.push("p2.uniprot_id ILIKE $1");
        }
        if self.match_exons {
            alternatives.push("e1.ensembl_exon_id ILIKE $1");
            alternatives.push("e2.ensembl_exon_id ILIKE $1");
        }
        debug_assert!(!alternatives.is_empty());

        parts.clauses.push(format!("({})", alternatives.join(" OR ")));
        parts
            .binds
            .push(BindValue::Text(format!("%{}%", self.term)));

        parts.render(Some(self.limit), Some(self.offset))
    }
}
