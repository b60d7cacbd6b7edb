use ferrous_lookup_domain::CacheSummary;
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct CacheEntryResponse {
    pub domain: String,
    pub expires_at: i64,
    pub remaining_seconds: i64,
    pub ttl: u32,
    pub first_ip: String,
    pub types: Vec<String>,
}

impl CacheEntryResponse {
    pub fn from_summary(domain: String, summary: CacheSummary) -> Self {
        Self {
            domain,
            expires_at: summary.expires_at,
            remaining_seconds: summary.remaining_seconds,
            ttl: summary.ttl,
            first_ip: summary.first_ip,
            types: summary.types,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct CacheListResponse {
    pub entries: Vec<CacheEntryResponse>,
    pub count: usize,
}
