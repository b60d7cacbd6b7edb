use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    InvalidDomain,
    NotWhitelisted,
    Blacklist,
}

impl BlockReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockReason::InvalidDomain => "invalid-domain",
            BlockReason::NotWhitelisted => "not-whitelisted",
            BlockReason::Blacklist => "blacklist",
        }
    }
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of checking a domain against the access lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Block(BlockReason),
}

impl AccessDecision {
    pub fn is_blocked(&self) -> bool {
        matches!(self, AccessDecision::Block(_))
    }

    /// Reason code, empty when allowed.
    pub fn reason(&self) -> &'static str {
        match self {
            AccessDecision::Allow => "",
            AccessDecision::Block(reason) => reason.as_str(),
        }
    }
}
