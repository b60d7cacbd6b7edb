use std::sync::Arc;

use crate::services::DomainMatcher;

pub struct GetBlockedDomainsUseCase {
    matcher: Arc<DomainMatcher>,
}

impl GetBlockedDomainsUseCase {
    pub fn new(matcher: Arc<DomainMatcher>) -> Self {
        Self { matcher }
    }

    /// Sorted blacklist snapshot.
    pub fn execute(&self) -> Vec<String> {
        self.matcher.blacklist()
    }

    pub fn count(&self) -> usize {
        self.matcher.blacklist_len()
    }
}
