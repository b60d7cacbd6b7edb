pub mod access;
pub mod cache;
pub mod health;
pub mod resolve;

use axum::{http::StatusCode, http::Uri, Json};
use tracing::debug;

use crate::dto::NotFoundResponse;

pub async fn not_found(uri: Uri) -> (StatusCode, Json<NotFoundResponse>) {
    debug!(path = %uri.path(), "No route matched");
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse {
            error: "Not Found",
            message: format!("The requested URL {} was not found.", uri.path()),
        }),
    )
}
