use ferrous_lookup_domain::DomainName;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::services::DomainMatcher;

pub struct UnblockDomainUseCase {
    matcher: Arc<DomainMatcher>,
}

impl UnblockDomainUseCase {
    pub fn new(matcher: Arc<DomainMatcher>) -> Self {
        Self { matcher }
    }

    #[instrument(skip(self))]
    pub fn execute(&self, domain: &str) -> String {
        let normalized = DomainName::normalize(domain);
        if self.matcher.remove_from_blacklist(&normalized) {
            info!(domain = %normalized, "Domain unblocked");
        } else {
            debug!(domain = %normalized, "Domain was not blacklisted");
        }
        normalized
    }
}
