use axum::{
    extract::State,
    routing::{delete, get},
    Json, Router,
};
use tracing::{debug, instrument};

use crate::{
    dto::{CacheEntryResponse, CacheListResponse, MessageResponse},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/cache", get(get_cache))
        .route("/cache/clear", delete(clear_cache))
}

#[instrument(skip(state), name = "api_get_cache")]
async fn get_cache(State(state): State<AppState>) -> Json<CacheListResponse> {
    let entries: Vec<CacheEntryResponse> = state
        .cache
        .get_summary
        .execute()
        .into_iter()
        .map(|(domain, summary)| CacheEntryResponse::from_summary(domain, summary))
        .collect();

    debug!(count = entries.len(), "Cache summary retrieved");

    Json(CacheListResponse {
        count: entries.len(),
        entries,
    })
}

#[instrument(skip(state), name = "api_clear_cache")]
async fn clear_cache(State(state): State<AppState>) -> Json<MessageResponse> {
    let removed = state.cache.clear.execute().await;
    Json(MessageResponse::new(format!(
        "Cache cleared ({} entries removed)",
        removed
    )))
}
