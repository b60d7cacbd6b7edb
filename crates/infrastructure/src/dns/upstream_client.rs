use super::forwarding::{DnsResponse, MessageBuilder, ResponseParser};
use super::transport::Transport;
use async_trait::async_trait;
use ferrous_lookup_application::ports::DnsClient;
use ferrous_lookup_domain::{DomainError, LookupAnswer, RecordType, ResolverConfig};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_DNS_PORT: u16 = 53;

/// Stub resolver client over plain DNS.
///
/// Upstreams are tried in order over UDP, falling back to TCP for a truncated
/// reply. Each attempt is bounded by the query timeout and the whole lookup
/// by the query lifetime.
pub struct UpstreamDnsClient {
    servers: Vec<SocketAddr>,
    query_timeout: Duration,
    lifetime: Duration,
}

impl UpstreamDnsClient {
    pub fn new(
        servers: Vec<SocketAddr>,
        query_timeout: Duration,
        lifetime: Duration,
    ) -> Result<Self, DomainError> {
        if servers.is_empty() {
            return Err(DomainError::ConfigError(
                "at least one upstream server is required".to_string(),
            ));
        }
        Ok(Self {
            servers,
            query_timeout,
            lifetime,
        })
    }

    pub fn from_config(config: &ResolverConfig) -> Result<Self, DomainError> {
        let servers = config
            .upstream_servers
            .iter()
            .map(|server| parse_server(server))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(servers, config.query_timeout(), config.query_lifetime())
    }

    pub fn servers(&self) -> &[SocketAddr] {
        &self.servers
    }

    async fn exchange(
        &self,
        server: SocketAddr,
        id: u16,
        query: &[u8],
        record_type: RecordType,
    ) -> Result<DnsResponse, DomainError> {
        let udp = Transport::udp(server);
        let reply = udp.send(query, self.query_timeout).await?;
        let response = Self::checked_parse(&reply.bytes, id, record_type)?;

        if !response.truncated {
            return Ok(response);
        }

        debug!(server = %server, "Truncated UDP response, retrying over TCP");
        let tcp = Transport::tcp(server);
        let reply = tcp.send(query, self.query_timeout).await?;
        Self::checked_parse(&reply.bytes, id, record_type)
    }

    fn checked_parse(
        bytes: &[u8],
        id: u16,
        record_type: RecordType,
    ) -> Result<DnsResponse, DomainError> {
        let response = ResponseParser::parse(bytes, record_type)?;
        if response.id != id {
            return Err(DomainError::UpstreamFailure(format!(
                "response id {} does not match query id {}",
                response.id, id
            )));
        }
        Ok(response)
    }

    async fn query_servers(
        &self,
        domain: &str,
        record_type: RecordType,
        id: u16,
        query: &[u8],
    ) -> Result<LookupAnswer, DomainError> {
        let mut last_error = DomainError::NoNameservers(domain.to_string());

        for &server in &self.servers {
            match self.exchange(server, id, query, record_type).await {
                Ok(response) if response.is_nxdomain() => return Err(DomainError::NxDomain),
                Ok(response) if response.is_success() => {
                    if response.values.is_empty() {
                        return Err(DomainError::NoAnswer {
                            domain: domain.to_string(),
                            record_type: record_type.to_string(),
                        });
                    }
                    return Ok(LookupAnswer::new(response.values, response.min_ttl));
                }
                Ok(response) => {
                    debug!(
                        server = %server,
                        rcode = ?response.rcode,
                        "Upstream could not answer, trying next"
                    );
                    last_error = DomainError::NoNameservers(domain.to_string());
                }
                Err(DomainError::QueryTimeout) => {
                    debug!(server = %server, "Upstream attempt timed out");
                    last_error = DomainError::QueryTimeout;
                }
                Err(e) => {
                    warn!(server = %server, error = %e, "Upstream exchange failed");
                    last_error = DomainError::NoNameservers(domain.to_string());
                }
            }
        }

        Err(last_error)
    }
}

#[async_trait]
impl DnsClient for UpstreamDnsClient {
    async fn lookup(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<LookupAnswer, DomainError> {
        let (id, query) = MessageBuilder::build_query(domain, record_type)?;

        tokio::time::timeout(
            self.lifetime,
            self.query_servers(domain, record_type, id, &query),
        )
        .await
        .map_err(|_| {
            debug!(domain = %domain, record_type = %record_type, "Lookup lifetime exhausted");
            DomainError::QueryTimeout
        })?
    }
}

/// `ip:port`, or a bare IP on port 53.
fn parse_server(server: &str) -> Result<SocketAddr, DomainError> {
    let server = server.trim();
    if let Ok(addr) = server.parse::<SocketAddr>() {
        return Ok(addr);
    }
    server
        .parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, DEFAULT_DNS_PORT))
        .map_err(|_| DomainError::ConfigError(format!("invalid upstream server '{}'", server)))
}
