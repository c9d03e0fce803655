//! Request type definitions
//!
//! Defines the structure for page fetch requests.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request for fetching a page through the managed browser
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigateRequest {
    /// Target URL to navigate to
    pub url: String,

    /// Optional per-request navigation deadline in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl NavigateRequest {
    /// Create a new request for the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_ms: None,
        }
    }

    /// Set a per-request navigation deadline
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Parse and validate the target URL
    ///
    /// Only http and https targets are accepted; anything else would hand
    /// the browser a scheme it cannot navigate.
    pub fn parse_target(&self) -> crate::Result<url::Url> {
        if self.url.trim().is_empty() {
            return Err(crate::Error::validation("url", "URL must not be empty"));
        }

        let parsed = url::Url::parse(&self.url).map_err(|e| {
            crate::Error::validation_with_value(
                "url",
                &format!("Invalid URL: {}", e),
                &self.url,
            )
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            other => Err(crate::Error::validation_with_value(
                "url",
                &format!("Unsupported URL scheme: {}", other),
                &self.url,
            )),
        }
    }

    /// Resolve the navigation deadline, falling back to the configured default
    pub fn navigation_timeout(&self, default_secs: u64) -> Duration {
        self.timeout_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| Duration::from_secs(default_secs))
    }
}
