//! Typed API error for HTTP handlers.
//!
//! Converts service errors into JSON responses with proper status codes.
//! Handlers return `Result<Json<T>, ApiError>` instead of losing error
//! context with bare `StatusCode`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use inquiry_desk_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to a JSON response: `{"error": "message"}`. The `Internal`
/// variant logs the real error server-side and returns a static message
/// to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request — malformed query parameter (e.g. unknown status).
    BadRequest(String),
    /// 404 Not Found — requested inquiry doesn't exist.
    NotFound(String),
    /// 409 Conflict — a delete for this id is already in flight.
    Conflict(String),
    /// 500 Internal Server Error — unexpected failure. Details logged,
    /// not exposed.
    Internal(anyhow::Error),
    /// 503 Service Unavailable — the data-access boundary is unreachable.
    ServiceUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
            Self::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        if err.is_not_found() {
            Self::NotFound(err.to_string())
        } else if err.is_transient() {
            Self::ServiceUnavailable(err.to_string())
        } else {
            match err {
                ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
                other => Self::Internal(other.into()),
            }
        }
    }
}
