//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the principal dashboard. Passwords never reach these helpers.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{DashboardError, Result};

/// Initialize logging based on configuration
///
/// Console output goes to stderr so rendered tables on stdout stay clean.
/// The returned guard must be held for the life of the process when a log
/// directory is configured.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| DashboardError::Config(format!("Invalid log filter {}: {}", config.level, e)))?;

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, &config.file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(|e| DashboardError::Config(format!("Failed to install logger: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log an outgoing backend request
pub fn log_request(method: &str, path: &str) {
    debug!(method = method, path = path, "Sending backend request");
}

/// Log a completed backend response
pub fn log_response(method: &str, path: &str, status: u16) {
    debug!(method = method, path = path, status = status, "Backend responded");
}

/// Log principal actions
pub fn log_principal_action(username: &str, action: &str, target: Option<&str>) {
    info!(
        principal = username,
        action = action,
        target = target,
        "Principal action performed"
    );
}

/// Log a rejected action
pub fn log_rejection(action: &str, message: &str) {
    warn!(action = action, message = message, "Backend rejected action");
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &str, context: Option<&str>) {
    error!(
        api = api,
        error = error,
        context = context,
        "API error occurred"
    );
}
