use ferrous_lookup_domain::{
    DomainName, MultiDetails, MultiLatency, RecordSet, RecordType, ResolvedRecords,
};
use tracing::debug;

use super::iterative::merge_addresses;
use super::{timed, RecursiveLookup};

/// Concurrent `A`, `AAAA` and full lookups. The three run as one nested group
/// inside the caller's worker permit.
pub struct MultiLookup {
    lookup: RecursiveLookup,
}

impl MultiLookup {
    pub fn new(lookup: RecursiveLookup) -> Self {
        Self { lookup }
    }

    pub async fn resolve(&self, domain: &DomainName) -> (ResolvedRecords, MultiDetails) {
        let name = domain.as_str();
        let ((a, a_ms), (aaaa, aaaa_ms), full) = tokio::join!(
            timed(self.lookup.resolve_types(name, &[RecordType::A])),
            timed(self.lookup.resolve_types(name, &[RecordType::AAAA])),
            self.lookup.resolve_all(name),
        );

        let a_values = values_of(&a.records, RecordType::A);
        let aaaa_values = values_of(&aaaa.records, RecordType::AAAA);
        let faster = pick_faster(!a_values.is_empty(), a_ms, !aaaa_values.is_empty(), aaaa_ms);

        let address_ttl = if a_values.is_empty() && aaaa_values.is_empty() {
            a.ttl.max(aaaa.ttl)
        } else {
            a.ttl.min(aaaa.ttl)
        };

        let non_existent = is_non_existent(
            a.records.is_non_existent(),
            aaaa.records.is_non_existent(),
            full.records.is_non_existent(),
        );

        let resolved = if non_existent {
            ResolvedRecords::new(RecordSet::non_existent(), address_ttl)
        } else {
            let mut addresses = RecordSet::new();
            addresses.insert(RecordType::A, a_values.clone());
            addresses.insert(RecordType::AAAA, aaaa_values.clone());
            ResolvedRecords::new(
                merge_addresses(full.records, &addresses),
                address_ttl.min(full.ttl),
            )
        };

        debug!(domain = %name, faster, a_ms, aaaa_ms, non_existent, "Multi lookup finished");

        let details = MultiDetails {
            a: a_values,
            aaaa: aaaa_values,
            faster,
            latency_ms: MultiLatency {
                a: a_ms,
                aaaa: aaaa_ms,
                total: a_ms.max(aaaa_ms),
            },
        };
        (resolved, details)
    }
}

/// Only branches that returned values compete; ties go to `A`.
pub fn pick_faster(a_answered: bool, a_ms: u64, aaaa_answered: bool, aaaa_ms: u64) -> &'static str {
    match (a_answered, aaaa_answered) {
        (true, true) if aaaa_ms < a_ms => "AAAA",
        (true, _) => "A",
        (false, true) => "AAAA",
        (false, false) => "none",
    }
}

/// `(nx_a && nx_aaaa) || nx_full`
pub fn is_non_existent(nx_a: bool, nx_aaaa: bool, nx_full: bool) -> bool {
    (nx_a && nx_aaaa) || nx_full
}

fn values_of(records: &RecordSet, record_type: RecordType) -> Vec<String> {
    records
        .get(record_type)
        .map(<[String]>::to_vec)
        .unwrap_or_default()
}
