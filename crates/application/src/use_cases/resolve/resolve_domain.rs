use ferrous_lookup_domain::{
    AccessDecision, DomainError, DomainName, IterativeDetails, MultiDetails, Resolution,
    ResolutionMode, ResolutionRequest, ResolvedRecords, ResolverConfig, TraceStep,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::{debug, info, instrument, warn};

use super::{IterativeLookup, MultiLookup, RecursiveLookup};
use crate::ports::DnsClient;
use crate::services::{DomainMatcher, TtlCache};

struct StrategyOutcome {
    resolved: ResolvedRecords,
    steps: Vec<TraceStep>,
    iterative: Option<IterativeDetails>,
    multi: Option<MultiDetails>,
}

/// Request pipeline: validate → access check → cache → strategy → write-back.
///
/// Strategies run while holding a permit from a process-wide pool. Waiting for
/// the permit counts against the request timeout, and a timed-out strategy is
/// dropped mid-flight.
pub struct ResolveDomainUseCase {
    matcher: Arc<DomainMatcher>,
    cache: Arc<TtlCache>,
    recursive: RecursiveLookup,
    iterative: IterativeLookup,
    multi: MultiLookup,
    workers: Arc<Semaphore>,
    timeout: Duration,
}

impl ResolveDomainUseCase {
    pub fn new(
        client: Arc<dyn DnsClient>,
        matcher: Arc<DomainMatcher>,
        cache: Arc<TtlCache>,
        config: &ResolverConfig,
    ) -> Self {
        let recursive = RecursiveLookup::new(client, config.default_ttl);
        Self {
            matcher,
            cache,
            iterative: IterativeLookup::new(recursive.clone()),
            multi: MultiLookup::new(recursive.clone()),
            recursive,
            workers: Arc::new(Semaphore::new(config.workers)),
            timeout: config.resolve_timeout(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[instrument(skip(self), fields(domain = %request.domain, mode = %request.mode))]
    pub async fn execute(&self, request: ResolutionRequest) -> Result<Resolution, DomainError> {
        let domain = DomainName::parse(&request.domain)?;
        let mode = request.mode;
        let mut steps = Vec::with_capacity(4);

        if let AccessDecision::Block(reason) = self.matcher.check(domain.as_str()) {
            info!(domain = %domain, reason = %reason, "Resolution blocked");
            steps.push(TraceStep::new("access_control", "blocked").with_info(reason.as_str()));
            return Ok(Resolution::Blocked {
                domain: domain.to_string(),
                reason,
                steps,
            });
        }
        steps.push(TraceStep::new("access_control", "allowed"));

        if mode.reads_cache() {
            if let Some(entry) = self.cache.get(domain.as_str()).await {
                debug!(domain = %domain, "Cache hit");
                steps.push(TraceStep::new("cache_lookup", "hit"));
                return Ok(Resolution::Resolved {
                    domain: domain.to_string(),
                    mode,
                    cached: true,
                    records: entry.records,
                    ttl: entry.ttl,
                    steps,
                    iterative: None,
                    multi: None,
                });
            }
        }
        steps.push(TraceStep::new("cache_lookup", "miss"));

        let strategy = self.run_strategy(&domain, mode);
        let outcome = match tokio::time::timeout(self.timeout, strategy).await {
            Ok(outcome) => outcome?,
            Err(_) => {
                warn!(
                    domain = %domain,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Resolution timed out"
                );
                steps.push(TraceStep::new("dns_query", "timeout"));
                return Ok(Resolution::TimedOut {
                    domain: domain.to_string(),
                    mode,
                    steps,
                    timeout_secs: self.timeout.as_secs(),
                });
            }
        };

        steps.extend(outcome.steps);

        let ResolvedRecords { records, ttl } = outcome.resolved;
        self.cache
            .set(domain.as_str(), records.clone(), Some(ttl))
            .await;
        steps.push(TraceStep::new("cache_update", "done"));

        info!(domain = %domain, mode = %mode, ttl, types = ?records.types(), "Domain resolved");

        Ok(Resolution::Resolved {
            domain: domain.to_string(),
            mode,
            cached: false,
            records,
            ttl,
            steps,
            iterative: outcome.iterative,
            multi: outcome.multi,
        })
    }

    async fn run_strategy(
        &self,
        domain: &DomainName,
        mode: ResolutionMode,
    ) -> Result<StrategyOutcome, DomainError> {
        let _permit = self
            .workers
            .acquire()
            .await
            .map_err(|_| DomainError::UpstreamFailure("worker pool closed".to_string()))?;

        let outcome = match mode {
            ResolutionMode::Recursive => {
                let resolved = self.recursive.resolve_all(domain.as_str()).await;
                let status = if resolved.records.is_non_existent() {
                    "nxdomain"
                } else {
                    "success"
                };
                StrategyOutcome {
                    resolved,
                    steps: vec![TraceStep::new("dns_query", status)],
                    iterative: None,
                    multi: None,
                }
            }
            ResolutionMode::Iterative => {
                let (resolved, details) = self.iterative.resolve(domain).await;
                StrategyOutcome {
                    resolved,
                    steps: ["root", "tld", "auth"]
                        .into_iter()
                        .map(|stage| TraceStep::new("dns_iterative", stage))
                        .collect(),
                    iterative: Some(details),
                    multi: None,
                }
            }
            ResolutionMode::Multi => {
                let (resolved, details) = self.multi.resolve(domain).await;
                StrategyOutcome {
                    resolved,
                    steps: vec![TraceStep::new("dns_multi", "done")
                        .with_info(format!("faster={}", details.faster))],
                    iterative: None,
                    multi: Some(details),
                }
            }
        };

        Ok(outcome)
    }
}
