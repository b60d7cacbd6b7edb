use ferrous_lookup_domain::{DomainError, RecordSet, RecordType, ResolvedRecords};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::ports::DnsClient;

/// Per-type lookup loop shared by every strategy.
///
/// A non-existent domain aborts the loop; every other per-type fault only
/// drops that type from the result.
#[derive(Clone)]
pub struct RecursiveLookup {
    client: Arc<dyn DnsClient>,
    default_ttl: u32,
}

impl RecursiveLookup {
    pub fn new(client: Arc<dyn DnsClient>, default_ttl: u32) -> Self {
        Self {
            client,
            default_ttl,
        }
    }

    pub fn client(&self) -> &Arc<dyn DnsClient> {
        &self.client
    }

    pub async fn resolve_all(&self, domain: &str) -> ResolvedRecords {
        self.resolve_types(domain, &RecordType::ALL).await
    }

    pub async fn resolve_types(&self, domain: &str, types: &[RecordType]) -> ResolvedRecords {
        let mut records = RecordSet::new();
        let mut min_ttl: Option<u32> = None;

        for &record_type in types {
            match self.client.lookup(domain, record_type).await {
                Ok(answer) => {
                    if answer.is_empty() {
                        continue;
                    }
                    if let Some(ttl) = answer.usable_ttl() {
                        min_ttl = Some(min_ttl.map_or(ttl, |current| current.min(ttl)));
                    }
                    records.insert(record_type, answer.values);
                }
                Err(DomainError::NxDomain) => {
                    warn!(domain = %domain, "Domain does not exist");
                    return ResolvedRecords::new(RecordSet::non_existent(), self.default_ttl);
                }
                Err(DomainError::NoAnswer { .. }) => {
                    debug!(domain = %domain, record_type = %record_type, "No answer");
                }
                Err(e) => {
                    warn!(
                        domain = %domain,
                        record_type = %record_type,
                        error = %e,
                        "Record type lookup failed"
                    );
                }
            }
        }

        if records.is_empty() {
            return ResolvedRecords::new(RecordSet::no_records(), self.default_ttl);
        }

        debug!(domain = %domain, types = ?records.types(), "Resolved record types");
        ResolvedRecords::new(records, min_ttl.unwrap_or(self.default_ttl))
    }
}
