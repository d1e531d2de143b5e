//! BiasGuard Core - Discrimination classification through an external LLM.
//!
//! This crate builds the moderation prompt, talks to the LLM provider, and
//! parses the two-line reply into an [`AnalysisResult`].
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use biasguard_core::{ClassificationGateway, GatewayConfig, GroqClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = GatewayConfig::new("gsk_...");
//!     let client = GroqClient::new(&config).unwrap();
//!     let gateway = ClassificationGateway::new(Arc::new(client), config);
//!
//!     let result = gateway.analyze("Some sentence").await.unwrap();
//!     println!("{}: {}", result.classification, result.explanation);
//! }
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod llm;

pub use classifier::{AnalysisResult, ClassificationGateway, HEALTH_MESSAGE};
pub use config::GatewayConfig;
pub use error::{ClassifyError, LlmError};
pub use llm::{ChatCompletion, ChatMessage, CompletionRequest, CompletionResponse, GroqClient};
