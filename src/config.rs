// Test-run configuration
//
// Mirrors the suite's environment-adaptive settings: CI tightens timeouts and
// runs single-worker, development loosens timeouts and runs headed, everything
// else gets the plain defaults.

use std::time::Duration;

use serde::Deserialize;

/// Settings shared by page objects, fixtures, and the browser backend.
///
/// Timeouts are stored in milliseconds so the struct stays trivially
/// deserializable; use the `Duration` accessors from code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestConfig {
    /// Named environment the fixture files are resolved against
    /// (`users-<environment>.json`)
    pub environment: String,
    /// Base URL of the ERP under test
    pub base_url: String,
    pub action_timeout_ms: u64,
    pub navigation_timeout_ms: u64,
    pub expect_timeout_ms: u64,
    pub retries: u32,
    pub workers: u32,
    pub headless: bool,
    pub slow_mo_ms: u64,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            environment: "test".to_string(),
            base_url: "http://localhost:3000".to_string(),
            action_timeout_ms: 10_000,
            navigation_timeout_ms: 15_000,
            expect_timeout_ms: 5_000,
            retries: 0,
            workers: 4,
            headless: true,
            slow_mo_ms: 0,
        }
    }
}

impl TestConfig {
    /// Builds a configuration from the process environment.
    ///
    /// Reads `BASE_URL`, `TEST_ENV`, and `CI`. CI takes precedence over a
    /// `development` environment when both apply.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("BASE_URL") {
            config.base_url = url;
        }
        if let Ok(env) = std::env::var("TEST_ENV") {
            config.environment = env;
        }

        if std::env::var("CI").is_ok() {
            config.retries = 2;
            config.workers = 1;
            config.action_timeout_ms = 12_000;
            config.navigation_timeout_ms = 20_000;
            config.expect_timeout_ms = 8_000;
        } else if config.environment == "development" {
            config.headless = false;
            config.slow_mo_ms = 100;
            config.workers = 1;
            config.action_timeout_ms = 15_000;
            config.navigation_timeout_ms = 30_000;
            config.expect_timeout_ms = 10_000;
        }

        config
    }

    pub fn action_timeout(&self) -> Duration {
        Duration::from_millis(self.action_timeout_ms)
    }

    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_millis(self.navigation_timeout_ms)
    }

    pub fn expect_timeout(&self) -> Duration {
        Duration::from_millis(self.expect_timeout_ms)
    }
}
