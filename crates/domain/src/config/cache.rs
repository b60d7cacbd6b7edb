use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_cache_path")]
    pub path: String,

    /// Interval of the background expired-entry sweep.
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: default_cache_path(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

fn default_cache_path() -> String {
    "data/cache.json".to_string()
}

fn default_sweep_interval_secs() -> u64 {
    300
}
