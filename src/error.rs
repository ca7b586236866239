//! Gateway error types.
//!
//! Every failure while talking to the backend ends up here and is turned into
//! a server-error response. Nothing is retried.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errors that can occur while forwarding a request to the backend.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Connection to the backend failed or the exchange broke off.
    #[error("Backend unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// The backend did not answer within the client timeout.
    #[error("Backend timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// The backend answered with a body that is not JSON.
    #[error("Backend returned an invalid JSON body: {0}")]
    InvalidBody(#[source] reqwest::Error),

    /// The outbound HTTP client could not be constructed.
    #[error("Failed to build backend client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

impl GatewayError {
    /// Classify a transport-level reqwest error.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout(err)
        } else {
            GatewayError::Unreachable(err)
        }
    }

    /// Classify an error raised while reading the response body as JSON.
    pub fn from_body(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout(err)
        } else if err.is_decode() {
            GatewayError::InvalidBody(err)
        } else {
            GatewayError::Unreachable(err)
        }
    }

    /// HTTP status returned to the caller for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            GatewayError::Unreachable(_) | GatewayError::InvalidBody(_) => StatusCode::BAD_GATEWAY,
            GatewayError::Client(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(status = %status, error = %self, "Backend request failed");
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
