use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use crate::{
    dto::{BlockedDomainsResponse, DomainRequest, MessageResponse},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/block", post(block_domain))
        .route("/unblock", post(unblock_domain))
        .route("/blocked", get(get_blocked_domains))
}

#[instrument(skip(state), name = "api_block_domain")]
async fn block_domain(
    State(state): State<AppState>,
    Json(request): Json<DomainRequest>,
) -> Json<MessageResponse> {
    let domain = state.access.block.execute(&request.domain);
    Json(MessageResponse::new(format!("{} blocked", domain)))
}

#[instrument(skip(state), name = "api_unblock_domain")]
async fn unblock_domain(
    State(state): State<AppState>,
    Json(request): Json<DomainRequest>,
) -> Json<MessageResponse> {
    let domain = state.access.unblock.execute(&request.domain);
    Json(MessageResponse::new(format!("{} unblocked", domain)))
}

#[instrument(skip(state), name = "api_get_blocked_domains")]
async fn get_blocked_domains(State(state): State<AppState>) -> Json<BlockedDomainsResponse> {
    Json(BlockedDomainsResponse {
        blocked_domains: state.access.get_blocked.execute(),
    })
}
