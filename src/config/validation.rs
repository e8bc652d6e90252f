//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use url::Url;

use crate::utils::errors::{DashboardError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate backend API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(DashboardError::Config(
            "API base URL is required".to_string()
        ));
    }

    let url = Url::parse(&config.base_url).map_err(|e| {
        DashboardError::Config(format!("Invalid API base URL {}: {}", config.base_url, e))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(DashboardError::Config(
            format!("API base URL must use http or https, got {}", url.scheme())
        ));
    }

    if config.timeout_seconds == Some(0) {
        return Err(DashboardError::Config(
            "API timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(DashboardError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(DashboardError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if config.directory.is_some() && config.file_name.is_empty() {
        return Err(DashboardError::Config(
            "Log file name is required when a log directory is set".to_string()
        ));
    }

    Ok(())
}
