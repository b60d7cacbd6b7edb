pub mod forwarding;
pub mod transport;
mod upstream_client;

pub use upstream_client::UpstreamDnsClient;
