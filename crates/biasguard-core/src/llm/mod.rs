//! LLM completion capability.
//!
//! The gateway only depends on the [`ChatCompletion`] trait; [`GroqClient`]
//! is the production implementation.

mod groq;
mod types;

use async_trait::async_trait;

use crate::error::LlmError;

pub use groq::GroqClient;
pub use types::{ChatMessage, Choice, ChoiceMessage, CompletionRequest, CompletionResponse, Role};

/// Sends chat-style messages to an LLM provider and returns its completion.
///
/// Implementors own transport and vendor details.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Requests a single completion for the given request.
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, LlmError>;

    /// Returns the name of this provider for logging.
    fn name(&self) -> &'static str;
}
