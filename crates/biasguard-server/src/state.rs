//! Application state for the API server.

use std::sync::Arc;

use biasguard_core::{ChatCompletion, ClassificationGateway, GatewayConfig};

/// Shared application state.
///
/// Read-only after startup; cloned into every request.
#[derive(Clone)]
pub struct AppState {
    /// Classification gateway.
    pub gateway: Arc<ClassificationGateway>,
}

impl AppState {
    /// Creates application state around an existing gateway.
    pub fn new(gateway: ClassificationGateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }

    /// Creates application state for the given provider and config.
    pub fn with_provider(provider: Arc<dyn ChatCompletion>, config: GatewayConfig) -> Self {
        Self::new(ClassificationGateway::new(provider, config))
    }
}
