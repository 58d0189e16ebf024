//! Gene/protein/multi-anchor interaction subgraphs and global network stats

pub mod queries;
pub mod routes;

pub use queries::{
    GeneNetworkQuery, GeneNetworkResponse, NetworkFilterParams, NetworkQueryError,
    NetworkStatsResponse, ProteinNetworkQuery, ProteinNetworkResponse, SubgraphQuery,
    SubgraphResponse,
};
pub use routes::network_routes;
