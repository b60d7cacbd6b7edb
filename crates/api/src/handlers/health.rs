use axum::{extract::State, routing::get, Json, Router};
use chrono::Local;
use tracing::{debug, instrument};

use crate::{
    dto::{HealthResponse, IndexResponse, TestResponse},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/test", get(api_test))
        .route("/health", get(health_check))
}

/// Local wall-clock time, ISO-8601 without offset.
fn local_timestamp() -> String {
    Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        status: "ok",
        message: "DNS Resolver running",
    })
}

async fn api_test() -> Json<TestResponse> {
    Json(TestResponse {
        status: "ok",
        message: "Server working fine",
        timestamp: local_timestamp(),
    })
}

#[instrument(skip_all, name = "api_health_check")]
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let blacklist_size = state.access.get_blocked.count();
    debug!(blacklist_size, "Health check requested");

    Json(HealthResponse {
        status: "healthy",
        blacklist_size,
        timestamp: local_timestamp(),
    })
}
