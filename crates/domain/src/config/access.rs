use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccessConfig {
    #[serde(default = "default_blacklist_path")]
    pub blacklist_path: String,

    #[serde(default = "default_whitelist_path")]
    pub whitelist_path: String,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            blacklist_path: default_blacklist_path(),
            whitelist_path: default_whitelist_path(),
        }
    }
}

fn default_blacklist_path() -> String {
    "data/blacklist.txt".to_string()
}

fn default_whitelist_path() -> String {
    "data/whitelist.txt".to_string()
}
