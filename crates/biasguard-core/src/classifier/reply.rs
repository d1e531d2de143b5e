//! Two-line reply parsing.

use serde::{Deserialize, Serialize};

use crate::error::{ClassifyError, Result};

/// Structured classification returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Short category label chosen by the model (open-ended).
    pub classification: String,
    /// Model's explanation of the label.
    pub explanation: String,
}

/// Parses a raw model reply into an [`AnalysisResult`].
///
/// The reply is trimmed, split into lines, and blank lines are skipped. The
/// first remaining line is the classification, the second the explanation;
/// anything after that is dropped.
pub fn parse_reply(raw: &str) -> Result<AnalysisResult> {
    let mut lines = raw
        .trim()
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty());

    match (lines.next(), lines.next()) {
        (Some(classification), Some(explanation)) => Ok(AnalysisResult {
            classification: classification.to_string(),
            explanation: explanation.to_string(),
        }),
        _ => Err(ClassifyError::MalformedReply),
    }
}
