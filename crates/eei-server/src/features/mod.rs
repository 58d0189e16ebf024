//! Feature modules implementing the EEI API
//!
//! Each feature is a vertical slice with its own queries and routes. The API
//! is read-only: every slice exposes queries only, and all of them receive
//! the connection pool as an explicit argument rather than reaching for a
//! module-global connection.
//!
//! # Features
//!
//! - **network**: gene/protein/multi-anchor interaction subgraphs with batch
//!   statistics, plus global network stats
//! - **search**: free-text search over the interaction join view
//! - **stats**: global statistic snapshots (summary, distributions, confidence)
//! - **export**: CSV/TSV/JSON interaction exports
//! - **exons**, **proteins**, **interactions**: single-entity lookups
//!
//! # Structure
//!
//! Each feature module follows the layout:
//! - `queries/` - read operations with their own validation and error enums
//! - `routes.rs` - HTTP route definitions

pub mod export;
pub mod exons;
pub mod interactions;
pub mod network;
pub mod proteins;
pub mod search;
pub mod shared;
pub mod stats;

use axum::Router;
use sqlx::PgPool;

/// Creates the main API router with all feature routes mounted
///
/// Each feature is mounted under its own path prefix:
/// - `/network` - interaction subgraphs and network statistics
/// - `/search` - free-text search
/// - `/stats` - global statistic snapshots
/// - `/export` - interaction exports
/// - `/exons`, `/proteins`, `/interactions` - entity lookups
pub fn router(pool: PgPool) -> Router<()> {
    Router::new()
        .nest("/network", network::network_routes().with_state(pool.clone()))
        .nest("/search", search::search_routes().with_state(pool.clone()))
        .nest("/stats", stats::stats_routes().with_state(pool.clone()))
        .nest("/export", export::export_routes().with_state(pool.clone()))
        .nest("/exons", exons::exons_routes().with_state(pool.clone()))
        .nest("/proteins", proteins::proteins_routes().with_state(pool.clone()))
        .nest(
            "/interactions",
            interactions::interactions_routes().with_state(pool),
        )
}
