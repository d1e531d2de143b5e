//! BiasGuard - discrimination classification service.
//!
//! This crate provides the application wiring for the `biasguard` binary:
//!
//! - Command-line and environment configuration
//! - Logging initialisation

pub mod cli;
pub mod logging;

pub use cli::{load_env_file, Args};
pub use logging::init_logging;
