//! API error types.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use biasguard_core::ClassifyError;

/// API errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed to deserialize.
    #[error("{0}")]
    Validation(String),

    /// Classification failed.
    #[error(transparent)]
    Classify(#[from] ClassifyError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

/// Detail returned for provider failures; the provider's own message is only logged.
pub const PROVIDER_ERROR_DETAIL: &str = "LLM provider request failed";

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ApiError {
    /// Returns the HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Classify(ClassifyError::MalformedReply) => StatusCode::BAD_REQUEST,
            ApiError::Classify(ClassifyError::Timeout(_)) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Classify(ClassifyError::Provider(_)) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            ApiError::Classify(ClassifyError::Provider(e)) => {
                error!(error = %e, "LLM provider call failed");
            }
            ApiError::Classify(ClassifyError::Timeout(d)) => {
                error!(timeout = ?d, "LLM provider call timed out");
            }
            ApiError::Validation(msg) => {
                warn!(detail = %msg, "Rejected request body");
            }
            ApiError::Classify(ClassifyError::MalformedReply) => {}
        }

        let detail = match &self {
            ApiError::Classify(ClassifyError::Provider(_)) => PROVIDER_ERROR_DETAIL.to_string(),
            other => other.to_string(),
        };

        (status, axum::Json(ErrorResponse { detail })).into_response()
    }
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
