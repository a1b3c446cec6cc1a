//! HTTP error type and its JSON rendering.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use fanout_core::error::ComputeError;

/// Errors surfaced to HTTP clients as `{"error": "..."}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The body could not be decoded into `{"numbers": [int, ...]}`.
    #[error("{0}")]
    BadRequest(String),

    /// No operation is served at this path.
    #[error("no operation at {0}")]
    NotFound(String),

    /// Batch execution failed.
    #[error(transparent)]
    Compute(#[from] ComputeError),

    /// The blocking worker running the batch did not complete.
    #[error("worker failed: {0}")]
    Worker(String),
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Compute(ComputeError::TooDeep { .. }) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) | Self::Compute(ComputeError::UnknownOperation(_)) => {
                StatusCode::NOT_FOUND
            }
            Self::Compute(_) | Self::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
