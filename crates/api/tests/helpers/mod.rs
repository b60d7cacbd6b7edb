#![allow(dead_code)]

mod mock_repositories;

pub use mock_repositories::*;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use ferrous_lookup_api::{
    create_app,
    state::{AccessUseCases, CacheUseCases},
    AppState,
};
use ferrous_lookup_application::{
    ports::SystemClock,
    services::{DomainMatcher, TtlCache},
    use_cases::{
        BlockDomainUseCase, ClearCacheUseCase, GetBlockedDomainsUseCase, GetCacheSummaryUseCase,
        ResolveDomainUseCase, UnblockDomainUseCase,
    },
};
use ferrous_lookup_domain::ResolverConfig;
use http_body_util::BodyExt;
use serde_json::Value;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub client: MockDnsClient,
    pub cache: Arc<TtlCache>,
    pub blacklist_store: Arc<InMemoryPatternStore>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::build(&[], Duration::from_secs(6))
    }

    pub fn with_whitelist(whitelist: &[&str]) -> Self {
        Self::build(whitelist, Duration::from_secs(6))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::build(&[], timeout)
    }

    fn build(whitelist: &[&str], timeout: Duration) -> Self {
        let client = MockDnsClient::new();
        let blacklist_store = Arc::new(InMemoryPatternStore::new());
        let whitelist: BTreeSet<String> = whitelist.iter().map(|d| d.to_string()).collect();

        let matcher = Arc::new(DomainMatcher::new(
            blacklist_store.clone(),
            BTreeSet::new(),
            whitelist,
        ));
        let cache = Arc::new(TtlCache::new(
            Arc::new(InMemoryCacheStore::new()),
            Arc::new(SystemClock),
            300,
        ));

        let resolve = ResolveDomainUseCase::new(
            Arc::new(client.clone()),
            matcher.clone(),
            cache.clone(),
            &ResolverConfig::default(),
        )
        .with_timeout(timeout);

        let state = AppState {
            resolve: Arc::new(resolve),
            cache: CacheUseCases {
                get_summary: Arc::new(GetCacheSummaryUseCase::new(cache.clone())),
                clear: Arc::new(ClearCacheUseCase::new(cache.clone())),
            },
            access: AccessUseCases {
                block: Arc::new(BlockDomainUseCase::new(matcher.clone())),
                unblock: Arc::new(UnblockDomainUseCase::new(matcher.clone())),
                get_blocked: Arc::new(GetBlockedDomainsUseCase::new(matcher)),
            },
        };

        Self {
            router: create_app(state),
            client,
            cache,
            blacklist_store,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }
}
