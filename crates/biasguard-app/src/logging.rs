//! Logging initialisation.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Args;

/// Builds the default filter directive for a log level.
pub fn default_directive(level: &str) -> String {
    format!(
        "biasguard={level},biasguard_app={level},biasguard_core={level},biasguard_server={level},tower_http={level},warn"
    )
}

/// Initialize logging. `RUST_LOG` takes precedence over the CLI level.
///
/// Returns the file writer guard when `--log-dir` is set; keep it alive for
/// the lifetime of the process.
pub fn init_logging(args: &Args) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(args.effective_log_level())));

    if let Some(log_dir) = args.log_dir.as_ref() {
        let file_appender = std::fs::create_dir_all(log_dir).ok().and_then(|_| {
            RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .max_log_files(5)
                .filename_prefix("biasguard")
                .filename_suffix("log")
                .build(log_dir)
                .ok()
        });

        if let Some(appender) = file_appender {
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stdout))
                .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
                .init();

            tracing::info!("Logging to {:?}", log_dir);
            return Some(guard);
        }

        tracing_subscriber::fmt().with_env_filter(env_filter).init();
        tracing::warn!("File logging unavailable in {:?}, using console only", log_dir);
        return None;
    }

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_covers_workspace_crates() {
        let directive = default_directive("debug");
        assert!(directive.starts_with("biasguard=debug"));
        assert!(directive.contains("biasguard_core=debug"));
        assert!(directive.contains("biasguard_server=debug"));
        assert!(directive.ends_with(",warn"));
    }

    #[test]
    fn directive_parses_as_filter() {
        assert!(EnvFilter::try_new(default_directive("info")).is_ok());
    }
}
