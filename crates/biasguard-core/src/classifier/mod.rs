//! Discrimination classification.
//!
//! Builds the moderation prompt, sends it through a [`ChatCompletion`]
//! provider and parses the two-line reply.
//!
//! [`ChatCompletion`]: crate::llm::ChatCompletion

mod gateway;
mod prompt;
mod reply;

pub use gateway::{ClassificationGateway, HEALTH_MESSAGE};
pub use prompt::{build_messages, build_prompt, INSTRUCTION};
pub use reply::{parse_reply, AnalysisResult};
