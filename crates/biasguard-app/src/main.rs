//! BiasGuard - classifies text for discriminatory content through an LLM.
//!
//! Runs the HTTP API server in front of the Groq chat completions API.

use std::path::Path;
use std::sync::Arc;

use biasguard_app::{init_logging, load_env_file, Args};
use biasguard_core::GroqClient;
use biasguard_server::{AppState, Server};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Environment first so clap's `env` fallbacks see it.
    let env_loaded = load_env_file(Path::new(".env"));
    let args = Args::parse();

    // Keep the guard alive for the duration of the program
    let _log_guard = init_logging(&args);

    tracing::info!("Starting BiasGuard...");
    if env_loaded {
        tracing::debug!("Loaded environment from .env");
    }

    let gateway_config = args.gateway_config()?;
    let server_config = args.server_config();
    tracing::info!(?gateway_config, ?server_config, "Configuration loaded");

    let client = GroqClient::new(&gateway_config)
        .map_err(|e| anyhow::anyhow!("LLM client error: {}", e))?;
    let state = AppState::with_provider(Arc::new(client), gateway_config);

    let server = Server::with_state(server_config, state)?;
    server.run().await?;

    tracing::info!("BiasGuard shutting down");
    Ok(())
}
