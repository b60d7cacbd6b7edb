use ferrous_lookup_domain::{
    DomainName, IterativeDetails, IterativeStage, IterativeTimings, RecordSet, RecordType,
    ResolvedRecords,
};
use tokio::time::Instant;
use tracing::debug;

use super::{elapsed_ms, RecursiveLookup};

/// Simulated root → TLD → authoritative walk.
///
/// The delegation stages only report nameservers; the final answer always
/// comes from the recursive loop with a separate address query overlaid.
pub struct IterativeLookup {
    lookup: RecursiveLookup,
}

impl IterativeLookup {
    pub fn new(lookup: RecursiveLookup) -> Self {
        Self { lookup }
    }

    pub async fn resolve(&self, domain: &DomainName) -> (ResolvedRecords, IterativeDetails) {
        let started = Instant::now();
        let tld_ns = self.nameservers(&format!("{}.", domain.tld())).await;
        let root_to_tld_ms = elapsed_ms(started);

        let started = Instant::now();
        let auth_ns = self.nameservers(domain.as_str()).await;
        let tld_to_auth_ms = elapsed_ms(started);

        let started = Instant::now();
        let full = self.lookup.resolve_all(domain.as_str()).await;
        let addresses = self
            .lookup
            .resolve_types(domain.as_str(), &RecordType::ADDRESSES)
            .await;
        let auth_to_ip_ms = elapsed_ms(started);

        let records = merge_addresses(full.records, &addresses.records);
        let ttl = full.ttl.min(addresses.ttl);

        let details = IterativeDetails {
            steps: vec![
                IterativeStage {
                    name: "root_query",
                    status: "done",
                    ns: Some(tld_ns),
                    ms: root_to_tld_ms,
                },
                IterativeStage {
                    name: "tld_query",
                    status: "done",
                    ns: Some(auth_ns),
                    ms: tld_to_auth_ms,
                },
                IterativeStage {
                    name: "auth_query",
                    status: "done",
                    ns: None,
                    ms: auth_to_ip_ms,
                },
            ],
            timings: IterativeTimings {
                root_to_tld_ms,
                tld_to_auth_ms,
                auth_to_ip_ms,
            },
        };

        (ResolvedRecords::new(records, ttl), details)
    }

    async fn nameservers(&self, name: &str) -> Vec<String> {
        match self.lookup.client().lookup(name, RecordType::NS).await {
            Ok(answer) => answer.values,
            Err(e) => {
                debug!(name = %name, error = %e, "Nameserver stage degraded to empty");
                Vec::new()
            }
        }
    }
}

/// Overlay non-empty `A`/`AAAA` values onto `base`. An error sentinel in `base`
/// is discarded when there is something real to put in its place.
pub(super) fn merge_addresses(base: RecordSet, addresses: &RecordSet) -> RecordSet {
    let has_addresses = RecordType::ADDRESSES
        .iter()
        .any(|rt| addresses.get(*rt).is_some_and(|values| !values.is_empty()));

    let mut merged = if base.is_error() && has_addresses && !base.is_non_existent() {
        RecordSet::new()
    } else {
        base
    };
    if !merged.is_non_existent() {
        merged.overlay_addresses(addresses);
    }
    merged
}
