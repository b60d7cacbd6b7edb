use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Default)]
pub struct DomainRequest {
    #[serde(default)]
    pub domain: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct BlockedDomainsResponse {
    pub blocked_domains: Vec<String>,
}
