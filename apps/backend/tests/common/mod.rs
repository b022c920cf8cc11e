//! Common test utilities for integration tests.
//!
//! The API is stateless, so every test gets its own router built from a
//! fixed configuration and no outside services are needed.

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;

use verse_practice_backend::config::Config;
use verse_practice_backend::{build_router, AppState};

/// Test context holding the router under test.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Create a context with default settings.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a context with a custom configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            app: build_router(AppState::new(config)),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }
}
