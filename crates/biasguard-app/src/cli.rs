//! Command-line and environment configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;

use biasguard_core::config::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT};
use biasguard_core::GatewayConfig;
use biasguard_server::{ServerConfig, DEFAULT_HOST, DEFAULT_PORT};

/// BiasGuard - classifies text for discriminatory content through an LLM
#[derive(Parser, Debug, Clone)]
#[command(name = "biasguard", version, about)]
pub struct Args {
    /// Groq API key
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model identifier sent to the provider
    #[arg(long, env = "BIASGUARD_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Provider base URL (OpenAI-compatible)
    #[arg(long, env = "BIASGUARD_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Seconds to wait for the provider before failing the request
    #[arg(long, env = "BIASGUARD_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// Host to bind to
    #[arg(long, env = "BIASGUARD_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to bind to
    #[arg(long, env = "BIASGUARD_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Allowed CORS origin (repeatable). Defaults to every origin.
    #[arg(long = "cors-origin", env = "BIASGUARD_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Also write daily-rotated log files to this directory
    #[arg(long, env = "BIASGUARD_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Args {
    /// Builds the gateway configuration. Fails without an API key.
    pub fn gateway_config(&self) -> Result<GatewayConfig> {
        let api_key = match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => bail!("missing API key: pass --api-key or set GROQ_API_KEY"),
        };

        if self.timeout_secs == 0 {
            bail!("--timeout-secs must be greater than zero");
        }

        Ok(GatewayConfig::new(api_key)
            .with_model(self.model.clone())
            .with_base_url(self.base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs)))
    }

    /// Builds the HTTP server configuration.
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig::default()
            .with_host(self.host.clone())
            .with_port(self.port)
            .with_cors_origins(
                self.cors_origins
                    .iter()
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect(),
            )
    }

    /// Returns the effective log level.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            &self.log_level
        }
    }
}

/// Loads variables from a dotenv file. Existing variables win.
///
/// Returns whether a file was loaded.
pub fn load_env_file(path: &Path) -> bool {
    dotenv::from_path(path).is_ok()
}
