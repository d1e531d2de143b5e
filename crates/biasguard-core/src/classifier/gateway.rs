//! Classification gateway.
//!
//! One call to [`ClassificationGateway::analyze`] is one provider request:
//! no caching, no retry.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use super::prompt::build_messages;
use super::reply::{parse_reply, AnalysisResult};
use crate::config::GatewayConfig;
use crate::error::{ClassifyError, Result};
use crate::llm::{ChatCompletion, CompletionRequest};

/// Fixed greeting returned by the health endpoint.
pub const HEALTH_MESSAGE: &str = "BiasGuard backend is running!";

/// Classifies text for discriminatory content through an LLM provider.
pub struct ClassificationGateway {
    provider: Arc<dyn ChatCompletion>,
    config: GatewayConfig,
}

impl ClassificationGateway {
    /// Creates a gateway over the given provider.
    pub fn new(provider: Arc<dyn ChatCompletion>, config: GatewayConfig) -> Self {
        Self { provider, config }
    }

    /// Classifies `text`.
    ///
    /// Fails with [`ClassifyError::MalformedReply`] when the model does not
    /// answer with two lines, [`ClassifyError::Timeout`] when the provider
    /// exceeds the configured timeout, and [`ClassifyError::Provider`] on any
    /// provider failure.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult> {
        let start = Instant::now();
        let request = CompletionRequest {
            model: self.config.model.clone(),
            messages: build_messages(text),
        };

        debug!(
            provider = self.provider.name(),
            model = %request.model,
            text_len = text.len(),
            "Requesting classification"
        );

        let response = tokio::time::timeout(self.config.timeout, self.provider.complete(&request))
            .await
            .map_err(|_| ClassifyError::Timeout(self.config.timeout))??;

        let raw = response.first_content()?;
        let result = parse_reply(raw).inspect_err(|_| {
            warn!(reply_len = raw.len(), "Model reply was not two lines");
        })?;

        info!(
            classification = %result.classification,
            latency_ms = start.elapsed().as_millis() as u64,
            "Classification complete"
        );

        Ok(result)
    }

    /// Returns the fixed health greeting. Never touches the provider.
    pub fn health(&self) -> &'static str {
        HEALTH_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LlmError;
    use crate::llm::CompletionResponse;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio_test::assert_err;

    /// Provider that replays scripted replies and counts calls.
    struct ScriptedProvider {
        reply: String,
        delay: Option<Duration>,
        calls: AtomicUsize,
        last_request: Mutex<Option<CompletionRequest>>,
    }

    impl ScriptedProvider {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                delay: None,
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
            }
        }

        fn slow(reply: &str, delay: Duration) -> Self {
            Self {
                delay: Some(delay),
                ..Self::new(reply)
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ChatCompletion for ScriptedProvider {
        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> std::result::Result<CompletionResponse, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request.clone());
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            Ok(CompletionResponse::from_text(self.reply.clone()))
        }

        fn name(&self) -> &'static str {
            "scripted"
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl ChatCompletion for FailingProvider {
        async fn complete(
            &self,
            _request: &CompletionRequest,
        ) -> std::result::Result<CompletionResponse, LlmError> {
            Err(LlmError::Status {
                status: 503,
                body: "unavailable".to_string(),
            })
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    fn gateway(provider: Arc<dyn ChatCompletion>) -> ClassificationGateway {
        ClassificationGateway::new(provider, GatewayConfig::new("test-key"))
    }

    #[tokio::test]
    async fn returns_first_two_lines() {
        let provider = Arc::new(ScriptedProvider::new(
            "Sexist\nThe sentence demeans a person based on gender.",
        ));
        let result = gateway(provider.clone()).analyze("text").await.unwrap();

        assert_eq!(
            result,
            AnalysisResult {
                classification: "Sexist".to_string(),
                explanation: "The sentence demeans a person based on gender.".to_string(),
            }
        );
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn sends_prompt_with_configured_model() {
        let provider = Arc::new(ScriptedProvider::new("Racist\nReason"));
        let gateway = ClassificationGateway::new(
            provider.clone(),
            GatewayConfig::new("k").with_model("custom-model"),
        );
        gateway.analyze("some sentence").await.unwrap();

        let request = provider.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.model, "custom-model");
        assert_eq!(request.messages, build_messages("some sentence"));
    }

    #[tokio::test]
    async fn single_line_reply_is_malformed() {
        let provider = Arc::new(ScriptedProvider::new("Racist"));
        let err = gateway(provider).analyze("text").await.unwrap_err();
        assert!(matches!(err, ClassifyError::MalformedReply));
    }

    #[tokio::test]
    async fn empty_choices_is_provider_error() {
        struct EmptyProvider;

        #[async_trait]
        impl ChatCompletion for EmptyProvider {
            async fn complete(
                &self,
                _request: &CompletionRequest,
            ) -> std::result::Result<CompletionResponse, LlmError> {
                Ok(CompletionResponse::default())
            }

            fn name(&self) -> &'static str {
                "empty"
            }
        }

        let err = gateway(Arc::new(EmptyProvider))
            .analyze("text")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClassifyError::Provider(LlmError::EmptyChoices)
        ));
    }

    #[tokio::test]
    async fn identical_requests_are_not_cached() {
        let provider = Arc::new(ScriptedProvider::new("Ableist\nReason"));
        let gateway = gateway(provider.clone());

        gateway.analyze("same text").await.unwrap();
        gateway.analyze("same text").await.unwrap();

        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test]
    async fn provider_failure_propagates() {
        let err = gateway(Arc::new(FailingProvider))
            .analyze("text")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClassifyError::Provider(LlmError::Status { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn slow_provider_times_out() {
        let provider = Arc::new(ScriptedProvider::slow(
            "Sexist\nReason",
            Duration::from_secs(5),
        ));
        let gateway = ClassificationGateway::new(
            provider.clone(),
            GatewayConfig::new("k").with_timeout(Duration::from_millis(50)),
        );

        let err = gateway.analyze("text").await.unwrap_err();
        assert!(matches!(err, ClassifyError::Timeout(d) if d == Duration::from_millis(50)));
        assert_eq!(provider.calls(), 1);
    }

    #[test]
    fn health_does_not_call_provider() {
        let provider = Arc::new(ScriptedProvider::new("unused"));
        let gateway = gateway(provider.clone());

        assert_eq!(gateway.health(), HEALTH_MESSAGE);
        assert_eq!(provider.calls(), 0);
    }

    #[test]
    fn analyze_blocks_on_current_thread() {
        let ok = gateway(Arc::new(ScriptedProvider::new("\nSexist\nExplanation\n")));
        let result = tokio_test::block_on(ok.analyze("text"));
        assert_eq!(result.unwrap().classification, "Sexist");

        let empty = gateway(Arc::new(ScriptedProvider::new("")));
        assert_err!(tokio_test::block_on(empty.analyze("text")));
    }
}
