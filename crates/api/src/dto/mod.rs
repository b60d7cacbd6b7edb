pub mod access;
pub mod cache;
pub mod health;
pub mod resolve;

pub use access::{BlockedDomainsResponse, DomainRequest, MessageResponse};
pub use cache::{CacheEntryResponse, CacheListResponse};
pub use health::{HealthResponse, IndexResponse, NotFoundResponse, TestResponse};
pub use resolve::{BlockedResponse, ResolveRequest, ResolvedResponse, TimeoutResponse};
