//! Test helpers module
//!
//! Mock backend, fixtures and logging setup shared by the integration tests.

#![allow(dead_code)]

pub mod backend_mock;
pub mod test_data;

pub use backend_mock::*;
pub use test_data::*;

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("principal_dashboard=debug")
            .with_test_writer()
            .try_init();
    });
}
