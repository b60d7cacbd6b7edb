use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use ferrous_lookup_domain::{
    DomainError, RecordSet, Resolution, ResolutionMode, ResolutionRequest,
};
use tracing::{info, instrument};

use crate::{
    dto::{BlockedResponse, ResolveRequest, ResolvedResponse, TimeoutResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/resolve", post(resolve_domain))
}

#[instrument(skip(state), name = "api_resolve_domain")]
async fn resolve_domain(
    State(state): State<AppState>,
    Json(request): Json<ResolveRequest>,
) -> Result<Response, ApiError> {
    info!(domain = %request.domain, "Resolve request");

    let mode = ResolutionMode::from_request(request.mode.as_deref());
    let resolution = state
        .resolve
        .execute(ResolutionRequest::new(request.domain, mode))
        .await?;

    Ok(into_response(resolution))
}

fn into_response(resolution: Resolution) -> Response {
    match resolution {
        Resolution::Blocked {
            domain,
            reason,
            steps,
        } => Json(BlockedResponse {
            domain,
            blocked: true,
            reason: reason.as_str(),
            steps,
        })
        .into_response(),

        Resolution::Resolved {
            domain,
            mode,
            cached,
            records,
            ttl,
            steps,
            iterative,
            multi,
        } => Json(ResolvedResponse {
            domain,
            mode,
            cached,
            records,
            ttl,
            steps,
            iterative,
            multi,
        })
        .into_response(),

        Resolution::TimedOut {
            domain,
            steps,
            timeout_secs,
            ..
        } => (
            StatusCode::GATEWAY_TIMEOUT,
            Json(TimeoutResponse {
                domain,
                cached: false,
                records: RecordSet::new(),
                steps,
                message: DomainError::ResolutionTimeout(timeout_secs).to_string(),
            }),
        )
            .into_response(),
    }
}
