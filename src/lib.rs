//! Principal Dashboard
//!
//! Client for the school principal's admin backend. It manages students,
//! leave requests, event requests and emergency requests through the
//! backend's form-encoded HTTP API and renders the returned records as
//! text tables.

pub mod config;
pub mod dashboard;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{DashboardError, ApiError, Result};

// Re-export main components for easy access
pub use dashboard::Dashboard;
pub use services::{ApiClient, DashboardClient, Session};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
