//! Core error types.

use std::time::Duration;

use thiserror::Error;

/// Errors raised while talking to the LLM provider.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Network failure, TLS failure, or the request could not be sent.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider answered with a non-success status (auth, rate limit, outage).
    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response envelope could not be decoded.
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),

    /// The response contained no choices.
    #[error("provider returned no choices")]
    EmptyChoices,

    /// Client could not be constructed.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised by the classification gateway.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The model did not answer in the requested two-line format.
    #[error("Invalid LLM response format")]
    MalformedReply,

    /// The provider did not answer within the configured bound.
    #[error("LLM request timed out after {0:?}")]
    Timeout(Duration),

    /// The provider call itself failed.
    #[error("LLM provider error: {0}")]
    Provider(#[from] LlmError),
}

/// Result type for classification operations.
pub type Result<T> = std::result::Result<T, ClassifyError>;
