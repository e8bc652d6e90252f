//! Services module
//!
//! This module contains the HTTP layer, the principal session and the typed
//! dashboard operations built on them.

pub mod api;
pub mod dashboard_client;
pub mod session;

// Re-export commonly used services
pub use api::{ApiClient, Reply};
pub use dashboard_client::DashboardClient;
pub use session::Session;
