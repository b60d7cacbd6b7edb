/// Values returned by the upstream for one (domain, record type) question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupAnswer {
    pub values: Vec<String>,
    /// TTL advertised on the answer RRset, if any.
    pub ttl: Option<u32>,
}

impl LookupAnswer {
    pub fn new(values: Vec<String>, ttl: Option<u32>) -> Self {
        Self { values, ttl }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// TTL usable for cache expiry: zero counts as "not advertised".
    pub fn usable_ttl(&self) -> Option<u32> {
        self.ttl.filter(|ttl| *ttl > 0)
    }
}
