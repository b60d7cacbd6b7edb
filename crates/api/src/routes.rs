use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .merge(handlers::health::routes())
        .merge(handlers::resolve::routes())
        .merge(handlers::cache::routes())
        .merge(handlers::access::routes())
        .with_state(state)
}

/// Full web surface: `/api` routes, the index, a JSON 404 and permissive CORS.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health::index))
        .nest("/api", create_api_routes(state))
        .fallback(handlers::not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
