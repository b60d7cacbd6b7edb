use ferrous_lookup_domain::DomainName;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::services::DomainMatcher;

pub struct BlockDomainUseCase {
    matcher: Arc<DomainMatcher>,
}

impl BlockDomainUseCase {
    pub fn new(matcher: Arc<DomainMatcher>) -> Self {
        Self { matcher }
    }

    /// Blacklists `domain` and returns its normalized form. Blank input is
    /// accepted and ignored.
    #[instrument(skip(self))]
    pub fn execute(&self, domain: &str) -> String {
        let normalized = DomainName::normalize(domain);
        if self.matcher.add_to_blacklist(&normalized) {
            info!(domain = %normalized, "Domain blocked");
        }
        normalized
    }
}
