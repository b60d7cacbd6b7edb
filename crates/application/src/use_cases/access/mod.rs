mod block_domain;
mod get_blocked_domains;
mod unblock_domain;

pub use block_domain::BlockDomainUseCase;
pub use get_blocked_domains::GetBlockedDomainsUseCase;
pub use unblock_domain::UnblockDomainUseCase;
