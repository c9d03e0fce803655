//! Response type definitions
//!
//! Defines the structure for page fetch responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response for a completed page fetch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigateResponse {
    /// Final URL after redirects
    pub url: String,

    /// Rendered page content
    pub content: String,

    /// Wall-clock time the fetch took, in milliseconds
    pub elapsed_ms: u64,
}

impl NavigateResponse {
    /// Create a new navigate response
    pub fn new(url: impl Into<String>, content: impl Into<String>, elapsed_ms: u64) -> Self {
        Self {
            url: url.into(),
            content: content.into(),
            elapsed_ms,
        }
    }
}

/// Response for a browser cleanup request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupResponse {
    /// Outcome message
    pub message: String,
}

impl CleanupResponse {
    /// Create a cleanup response with a custom message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The standard response after a close, whether or not a browser was running
    pub fn closed() -> Self {
        Self::new("Browser closed or already closed")
    }
}

/// Ping response for health checks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingResponse {
    /// Server uptime in seconds
    pub server_uptime: u64,

    /// Server version
    pub version: String,

    /// Whether a browser session is currently running
    pub browser_active: bool,
}

impl PingResponse {
    /// Create a new ping response
    pub fn new(server_uptime: u64, version: impl Into<String>, browser_active: bool) -> Self {
        Self {
            server_uptime,
            version: version.into(),
            browser_active,
        }
    }
}

/// Error response for API errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Optional error context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    /// Optional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,

    /// Error timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    /// Service version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            context: None,
            details: None,
            timestamp: Some(Utc::now()),
            version: Some(crate::utils::version::get_version().to_string()),
        }
    }

    /// Create error response with context
    pub fn with_context(error: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            context: Some(context.into()),
            details: None,
            timestamp: Some(Utc::now()),
            version: Some(crate::utils::version::get_version().to_string()),
        }
    }

    /// Create error response with details
    pub fn with_details(error: impl Into<String>, details: serde_json::Value) -> Self {
        Self {
            error: error.into(),
            context: None,
            details: Some(details),
            timestamp: Some(Utc::now()),
            version: Some(crate::utils::version::get_version().to_string()),
        }
    }
}
