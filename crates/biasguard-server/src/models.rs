//! API request and response models.

use serde::{Deserialize, Serialize};

pub use biasguard_core::AnalysisResult as AnalyzeResponse;

/// Request body for POST /analyze.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Text to classify.
    pub text: String,
}

/// Response body for GET /.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: String,
}
