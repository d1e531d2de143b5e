//! Groq chat completions client.
//!
//! Talks to any OpenAI-compatible `/chat/completions` endpoint; Groq is the
//! default base URL.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::{ChatCompletion, CompletionRequest, CompletionResponse};
use crate::config::GatewayConfig;
use crate::error::LlmError;

/// Bound on establishing the TCP/TLS connection to the provider.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for Groq's OpenAI-compatible API.
#[derive(Clone)]
pub struct GroqClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GroqClient {
    /// Creates a client from the gateway configuration.
    pub fn new(config: &GatewayConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(concat!("biasguard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LlmError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Returns the full completions URL.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ChatCompletion for GroqClient {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, LlmError> {
        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let completion: CompletionResponse = serde_json::from_str(&body)
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        debug!(
            model = %request.model,
            choices = completion.choices.len(),
            "Received completion"
        );

        Ok(completion)
    }

    fn name(&self) -> &'static str {
        "groq"
    }
}
