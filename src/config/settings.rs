//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from config files and environment variables.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, e.g. `PRINCIPAL_DASHBOARD__API__BASE_URL`
pub const ENV_PREFIX: &str = "PRINCIPAL_DASHBOARD";

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub principal: PrincipalConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// `None` leaves the transport default in place
    pub timeout_seconds: Option<u64>,
    pub user_agent: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the rolling log file; stderr only when unset
    pub directory: Option<String>,
    pub file_name: String,
}

/// Default principal credentials for non-interactive runs
#[derive(Clone, Default, Deserialize, Serialize)]
pub struct PrincipalConfig {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl std::fmt::Debug for PrincipalConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrincipalConfig")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Settings {
    /// Load settings from the default `config` file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load(None)
    }

    /// Load settings, reading `path` instead of the default `config` file
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let defaults = config::Config::try_from(&Settings::default())?;

        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::DashboardError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://127.0.0.1:8000".to_string(),
                timeout_seconds: None,
                user_agent: format!("PrincipalDashboard/{}", env!("CARGO_PKG_VERSION")),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                directory: None,
                file_name: "principal-dashboard.log".to_string(),
            },
            principal: PrincipalConfig::default(),
        }
    }
}
