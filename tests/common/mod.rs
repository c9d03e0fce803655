//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use browser_relay::{config::Settings, session::BrowserManager, types::*};

/// Test helper functions
pub mod helpers {
    use super::*;

    /// Create a test browser manager with default settings
    pub fn create_test_manager() -> BrowserManager {
        let settings = Settings::default();
        BrowserManager::new(settings).expect("default settings are valid")
    }

    /// Create test settings with custom values
    pub fn create_test_settings(port: u16) -> Settings {
        let mut settings = Settings::default();
        settings.server.port = port;
        settings
    }
}

/// Test configuration factory
pub struct TestConfig;

impl TestConfig {
    /// Create minimal test configuration
    pub fn minimal() -> Settings {
        let mut settings = Settings::default();
        settings.server.port = 0; // Use random port
        settings.logging.level = "debug".to_string();
        settings.browser.navigation_timeout_secs = 5;
        settings.browser.close_timeout_secs = 1; // Short deadline for testing
        settings
    }

    /// Create configuration with proxy rotation
    pub fn with_proxies(servers: &[&str]) -> Settings {
        let mut settings = Self::minimal();
        settings.proxy.servers = servers.iter().map(|s| s.to_string()).collect();
        settings
    }

    /// Create configuration that recycles after a handful of requests
    pub fn with_request_budget(requests_per_session: u64) -> Settings {
        let mut settings = Self::minimal();
        settings.limits.requests_per_session = requests_per_session;
        settings.limits.recycle_wait_secs = 1;
        settings
    }
}

/// Test data factory
pub struct MockData;

impl MockData {
    /// Generate sample navigation request
    pub fn navigate_request() -> NavigateRequest {
        NavigateRequest::new("https://example.com/")
    }

    /// Generate sample navigation response
    pub fn navigate_response() -> NavigateResponse {
        NavigateResponse::new(
            "https://example.com/",
            "<html><body>example</body></html>",
            128,
        )
    }
}

/// Test utilities
pub struct TestUtils;

impl TestUtils {
    /// Initialize test logging
    pub fn init_logger() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("debug")
            .try_init();
    }

    /// Wait for async condition
    pub async fn wait_for_condition<F, Fut>(
        condition: F,
        timeout: std::time::Duration,
    ) -> anyhow::Result<()>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = bool>,
    {
        use tokio::time::{sleep, timeout as tokio_timeout};

        tokio_timeout(timeout, async {
            loop {
                if condition().await {
                    return Ok(());
                }
                sleep(std::time::Duration::from_millis(100)).await;
            }
        })
        .await
        .map_err(|_| anyhow::anyhow!("Wait condition timeout"))?
    }
}
