//! API route handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::debug;

use crate::error::Result;
use crate::models::{AnalyzeRequest, AnalyzeResponse, HealthResponse};
use crate::state::AppState;

/// POST /analyze - Classify text for discriminatory content.
pub async fn analyze(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>> {
    let Json(req) = payload?;

    debug!(text_len = req.text.len(), "Analyzing text");

    let result = state.gateway.analyze(&req.text).await?;

    Ok(Json(result))
}

/// GET / - Fixed greeting confirming the process is reachable.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        message: state.gateway.health().to_string(),
    })
}
