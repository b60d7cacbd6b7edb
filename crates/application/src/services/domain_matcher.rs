use ferrous_lookup_domain::{AccessDecision, BlockReason, DomainName};
use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, error, info, instrument, warn};

use crate::ports::PatternStore;

#[derive(Debug, Default)]
struct AccessLists {
    blacklist: BTreeSet<String>,
    whitelist: BTreeSet<String>,
}

/// Allow/deny policy over normalized domain patterns.
///
/// A pattern matches the domain itself and every subdomain of it. A non-empty
/// whitelist is exclusive: anything it does not cover is refused.
pub struct DomainMatcher {
    lists: RwLock<AccessLists>,
    blacklist_store: Arc<dyn PatternStore>,
}

impl DomainMatcher {
    pub fn new(
        blacklist_store: Arc<dyn PatternStore>,
        blacklist: BTreeSet<String>,
        whitelist: BTreeSet<String>,
    ) -> Self {
        Self {
            lists: RwLock::new(AccessLists {
                blacklist,
                whitelist,
            }),
            blacklist_store,
        }
    }

    /// Load both lists; a list that fails to load starts empty.
    pub fn load(
        blacklist_store: Arc<dyn PatternStore>,
        whitelist_store: &dyn PatternStore,
    ) -> Self {
        let blacklist = blacklist_store.load().unwrap_or_else(|e| {
            error!(error = %e, "Failed to load blacklist, starting empty");
            BTreeSet::new()
        });
        let whitelist = whitelist_store.load().unwrap_or_else(|e| {
            error!(error = %e, "Failed to load whitelist, starting empty");
            BTreeSet::new()
        });

        info!(
            blacklist = blacklist.len(),
            whitelist = whitelist.len(),
            "Access lists loaded"
        );

        Self::new(blacklist_store, blacklist, whitelist)
    }

    pub fn check(&self, domain: &str) -> AccessDecision {
        let domain = DomainName::normalize(domain);
        if domain.is_empty() {
            return AccessDecision::Block(BlockReason::InvalidDomain);
        }

        let lists = self.read_lists();
        if !lists.whitelist.is_empty() && !matches_any(&domain, &lists.whitelist) {
            return AccessDecision::Block(BlockReason::NotWhitelisted);
        }
        if matches_any(&domain, &lists.blacklist) {
            return AccessDecision::Block(BlockReason::Blacklist);
        }
        AccessDecision::Allow
    }

    /// Returns `false` when the domain normalizes to nothing.
    #[instrument(skip(self))]
    pub fn add_to_blacklist(&self, domain: &str) -> bool {
        let domain = DomainName::normalize(domain);
        if domain.is_empty() {
            return false;
        }

        let mut lists = self.write_lists();
        lists.blacklist.insert(domain.clone());
        self.persist_blacklist(&lists.blacklist);
        debug!(domain = %domain, "Domain added to blacklist");
        true
    }

    /// Returns `false` when the domain was not blacklisted; the list file is
    /// left untouched in that case.
    #[instrument(skip(self))]
    pub fn remove_from_blacklist(&self, domain: &str) -> bool {
        let domain = DomainName::normalize(domain);

        let mut lists = self.write_lists();
        if !lists.blacklist.remove(&domain) {
            return false;
        }
        self.persist_blacklist(&lists.blacklist);
        debug!(domain = %domain, "Domain removed from blacklist");
        true
    }

    pub fn blacklist(&self) -> Vec<String> {
        self.read_lists().blacklist.iter().cloned().collect()
    }

    pub fn whitelist(&self) -> Vec<String> {
        self.read_lists().whitelist.iter().cloned().collect()
    }

    pub fn blacklist_len(&self) -> usize {
        self.read_lists().blacklist.len()
    }

    // Called with the write lock held so the file always follows memory order.
    fn persist_blacklist(&self, blacklist: &BTreeSet<String>) {
        if let Err(e) = self.blacklist_store.save(blacklist) {
            warn!(error = %e, "Failed to persist blacklist");
        }
    }

    fn read_lists(&self) -> RwLockReadGuard<'_, AccessLists> {
        self.lists.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_lists(&self) -> RwLockWriteGuard<'_, AccessLists> {
        self.lists.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn matches_any(domain: &str, patterns: &BTreeSet<String>) -> bool {
    patterns
        .iter()
        .any(|pattern| DomainName::matches_pattern(domain, pattern))
}
