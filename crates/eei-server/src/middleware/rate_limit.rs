//! Rate limiting middleware using tower-governor
//!
//! Keyed by peer IP, so the router must be served with
//! `into_make_service_with_connect_info::<SocketAddr>()`.

use axum::Router;
use std::sync::Arc;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};

/// Rate limiting configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Requests per minute allowed per client
    pub requests_per_minute: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_minute: 100,
        }
    }
}

impl RateLimitConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            requests_per_minute: std::env::var("RATE_LIMIT_REQUESTS_PER_MINUTE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
        }
    }
}

/// Wrap a router with per-client rate limiting
///
/// Replenishes one request every `60000 / rpm` ms and allows bursts up to a
/// full minute's budget.
pub fn with_rate_limit(router: Router, config: RateLimitConfig) -> Router {
    let replenishment_ms = 60_000 / config.requests_per_minute.max(1);
    let burst_size = config.requests_per_minute.try_into().unwrap_or(100);

    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond(replenishment_ms)
        .burst_size(burst_size)
        .finish();

    match governor_conf {
        Some(conf) => router.layer(GovernorLayer {
            config: Arc::new(conf),
        }),
        None => {
            tracing::warn!("Invalid rate limit configuration, rate limiting disabled");
            router
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_config_default() {
        let config = RateLimitConfig::default();
        assert_eq!(config.requests_per_minute, 100);
    }

    #[test]
    fn test_with_rate_limit_wraps_router() {
        let config = RateLimitConfig {
            requests_per_minute: 60,
        };
        let _router = with_rate_limit(Router::new(), config);
    }
}
