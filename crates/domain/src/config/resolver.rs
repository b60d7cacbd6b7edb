use crate::cache_entry::DEFAULT_TTL;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upstream lookup and orchestration settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Upstream servers in `ip:port` form, tried in order.
    #[serde(default = "default_upstream_servers")]
    pub upstream_servers: Vec<String>,

    /// Timeout of a single attempt against one upstream.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Total budget for one (domain, record type) lookup across all upstreams.
    #[serde(default = "default_query_lifetime_ms")]
    pub query_lifetime_ms: u64,

    /// Wall-clock bound on a whole resolution request.
    #[serde(default = "default_resolve_timeout_secs")]
    pub resolve_timeout_secs: u64,

    /// Strategies allowed to run at the same time.
    #[serde(default = "default_workers")]
    pub workers: usize,

    #[serde(default = "default_ttl")]
    pub default_ttl: u32,
}

impl ResolverConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }

    pub fn query_lifetime(&self) -> Duration {
        Duration::from_millis(self.query_lifetime_ms)
    }

    pub fn resolve_timeout(&self) -> Duration {
        Duration::from_secs(self.resolve_timeout_secs)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            upstream_servers: default_upstream_servers(),
            query_timeout_ms: default_query_timeout_ms(),
            query_lifetime_ms: default_query_lifetime_ms(),
            resolve_timeout_secs: default_resolve_timeout_secs(),
            workers: default_workers(),
            default_ttl: default_ttl(),
        }
    }
}

fn default_upstream_servers() -> Vec<String> {
    vec!["8.8.8.8:53".to_string(), "1.1.1.1:53".to_string()]
}

fn default_query_timeout_ms() -> u64 {
    3000
}

fn default_query_lifetime_ms() -> u64 {
    5000
}

fn default_resolve_timeout_secs() -> u64 {
    6
}

fn default_workers() -> usize {
    6
}

fn default_ttl() -> u32 {
    DEFAULT_TTL
}
