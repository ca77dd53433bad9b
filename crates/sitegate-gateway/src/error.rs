// Gateway error taxonomy
// Decision: Uniform relay policy — auth routes forward the backend's own
// status and message, every other route collapses upstream failures to an
// opaque 500 and logs the details instead of leaking them.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::upstream::UpstreamError;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Missing or unusable credential. Always 401.
    #[error("{0}")]
    Unauthenticated(String),

    /// Missing path id or failed local validation. Always 400.
    #[error("{0}")]
    BadRequest(String),

    /// Backend status and message forwarded verbatim (auth routes only).
    #[error("backend returned {status}: {message}")]
    Relayed { status: StatusCode, message: String },

    /// Any other upstream failure: network error, timeout, non-success
    /// status on a content route, or an undecodable payload.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl GatewayError {
    pub fn unauthenticated(message: &str) -> Self {
        Self::Unauthenticated(message.to_string())
    }

    pub fn bad_request(message: &str) -> Self {
        Self::BadRequest(message.to_string())
    }

    /// Forward the backend's own status code and message to the caller.
    /// Network-level failures still collapse to the opaque 500.
    pub fn relay(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Status { status, message } => Self::Relayed {
                status: StatusCode::from_u16(status)
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                message,
            },
            other => Self::Upstream(other),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthenticated(message) => (
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": message})),
            )
                .into_response(),
            Self::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({"error": message}))).into_response()
            }
            Self::Relayed { status, message } => {
                (status, Json(json!({"error": message}))).into_response()
            }
            Self::Upstream(err) => {
                tracing::error!("upstream failure: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "Internal Server Error"})),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_preserves_backend_status_and_message() {
        let err = GatewayError::relay(UpstreamError::Status {
            status: 409,
            message: "Email already registered".to_string(),
        });
        match err {
            GatewayError::Relayed { status, message } => {
                assert_eq!(status, StatusCode::CONFLICT);
                assert_eq!(message, "Email already registered");
            }
            other => panic!("expected relayed error, got {other:?}"),
        }
    }

    #[test]
    fn relay_of_invalid_status_falls_back_to_500() {
        let err = GatewayError::relay(UpstreamError::Status {
            status: 42,
            message: "weird".to_string(),
        });
        match err {
            GatewayError::Relayed { status, .. } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            }
            other => panic!("expected relayed error, got {other:?}"),
        }
    }

    #[test]
    fn opaque_conversion_hides_backend_detail() {
        let err = GatewayError::from(UpstreamError::Status {
            status: 422,
            message: "validation exploded".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn local_errors_keep_their_statuses() {
        assert_eq!(
            GatewayError::unauthenticated("Authentication required")
                .into_response()
                .status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            GatewayError::bad_request("Missing id").into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
