//! EEI Server Library
//!
//! HTTP server exposing exon-exon interaction (EEI) records through a
//! read-only query API.
//!
//! # Overview
//!
//! The store holds interactions between exon pairs (via their encoding
//! proteins) detected by experimental methods (PISA, EPPIC, contact
//! detection) or predicted through orthology mapping. All rows are produced
//! by an external ingestion pipeline; this server only filters, paginates,
//! aggregates, and exports them.
//!
//! - **Network queries**: gene/protein/multi-anchor subgraphs with summary
//!   statistics over the filtered batch
//! - **Search**: free-text lookup across gene, protein, and exon identifiers
//! - **Statistics**: global snapshots of counts, distributions, and the
//!   orthology confidence range
//! - **Export**: CSV/TSV/JSON downloads with type-conditional column sets
//!
//! # Pagination contracts
//!
//! Two deliberately different `has_more` semantics exist and are part of the
//! per-endpoint contract:
//!
//! - Network endpoints paginate an in-memory filtered batch and report the
//!   exact `total` with `has_more = offset + limit < total`.
//! - Search paginates in SQL and never learns the total; it reports
//!   `count` with the heuristic `has_more = (count == limit)`.
//!
//! # Framework Stack
//!
//! - **Axum**: web framework
//! - **SQLx**: PostgreSQL driver with runtime-built parameterized queries
//! - **Tower**: middleware and service abstractions
//!
//! # Example
//!
//! ```no_run
//! use eei_server::{config::Config, db, features};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let pool = db::connect(&config.database).await?;
//!     let app = features::router(pool);
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod features;
pub mod middleware;
pub mod models;

// Re-export commonly used types
pub use error::{AppError, AppResult};
