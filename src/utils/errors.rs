//! Error handling for the principal dashboard
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the principal dashboard
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Backend API error: {0}")]
    Api(#[from] ApiError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{kind} not found: {id}")]
    RecordNotFound { kind: &'static str, id: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Backend API specific errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("request timed out")]
    Timeout,

    #[error("backend unreachable")]
    ServiceUnavailable,

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("rejected by backend (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;

impl DashboardError {
    /// Transport-level failure: network, timeout or an undecodable body
    pub fn is_transport(&self) -> bool {
        match self {
            DashboardError::Http(_) => true,
            DashboardError::Api(ApiError::Rejected { .. }) => false,
            DashboardError::Api(_) => true,
            _ => false,
        }
    }

    /// Check if the error is recoverable by simply repeating the action
    pub fn is_recoverable(&self) -> bool {
        match self {
            DashboardError::Api(ApiError::InvalidResponse(_)) => false,
            DashboardError::Api(_) => true,
            DashboardError::Http(_) => true,
            DashboardError::Serialization(_) => false,
            DashboardError::UrlParse(_) => false,
            DashboardError::Config(_) => false,
            DashboardError::Authentication(_) => true,
            DashboardError::NotLoggedIn => true,
            DashboardError::InvalidInput(_) => true,
            DashboardError::RecordNotFound { .. } => true,
            DashboardError::Io(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DashboardError::Config(_) => ErrorSeverity::Critical,
            DashboardError::UrlParse(_) => ErrorSeverity::Critical,
            DashboardError::Authentication(_) => ErrorSeverity::Warning,
            DashboardError::NotLoggedIn => ErrorSeverity::Warning,
            DashboardError::Api(ApiError::Rejected { .. }) => ErrorSeverity::Warning,
            DashboardError::InvalidInput(_) => ErrorSeverity::Info,
            DashboardError::RecordNotFound { .. } => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }

    /// Text shown to the principal, without the error-kind prefix for
    /// backend rejections
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::Api(ApiError::Rejected { message, .. }) => message.clone(),
            DashboardError::Authentication(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
