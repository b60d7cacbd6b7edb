use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ferrous_lookup_domain::DomainError;
use serde_json::json;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::InvalidDomainFormat(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),

            DomainError::ResolutionTimeout(_) | DomainError::QueryTimeout => {
                (StatusCode::GATEWAY_TIMEOUT, self.0.to_string())
            }

            DomainError::NxDomain | DomainError::NoAnswer { .. } => {
                (StatusCode::NOT_FOUND, self.0.to_string())
            }

            DomainError::NoNameservers(_) | DomainError::UpstreamFailure(_) => {
                (StatusCode::BAD_GATEWAY, self.0.to_string())
            }

            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
