//! Error types for the relay service
//!
//! Provides error classification for configuration loading, browser
//! lifecycle management, and the HTTP surface.

use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error)]
pub enum Error {
    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error in {field}: {message}")]
    Config {
        /// The configuration field that has an error
        field: String,
        /// Error message describing the issue
        message: String,
    },

    /// Proxy descriptor errors
    #[error("Proxy error with descriptor '{descriptor}': {message}")]
    Proxy {
        /// The proxy descriptor that caused the error
        descriptor: String,
        /// Error message describing the proxy issue
        message: String,
    },

    /// Browser launch errors
    #[error("Browser launch failed: {message}")]
    Launch {
        /// The reason why the browser failed to start
        message: String,
    },

    /// Browser teardown errors
    #[error("Browser teardown failed during {stage}: {message}")]
    Teardown {
        /// The teardown stage that failed
        stage: String,
        /// Detailed error description
        message: String,
    },

    /// Page navigation errors
    #[error("Navigation to '{url}' failed: {message}")]
    Navigation {
        /// The URL that was being visited
        url: String,
        /// Error message describing what went wrong
        message: String,
    },

    /// Timeout errors
    #[error("Operation timed out after {duration_secs} seconds: {operation}")]
    Timeout {
        /// The operation that timed out
        operation: String,
        /// Duration in seconds before timing out
        duration_secs: u64,
    },

    /// Validation errors
    #[error("Validation failed for {field}: {message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Error message describing the validation failure
        message: String,
        /// The invalid value that caused the validation to fail
        value: Option<String>,
    },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal {
        /// Error message describing the internal issue
        message: String,
        /// Additional context about where the error occurred
        context: Option<String>,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(field: S, message: S) -> Self {
        Self::Config {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a proxy error
    pub fn proxy<S: Into<String>>(descriptor: S, message: S) -> Self {
        Self::Proxy {
            descriptor: descriptor.into(),
            message: message.into(),
        }
    }

    /// Create a browser launch error
    pub fn launch<S: Into<String>>(message: S) -> Self {
        Self::Launch {
            message: message.into(),
        }
    }

    /// Create a browser teardown error
    pub fn teardown<S: Into<String>>(stage: S, message: S) -> Self {
        Self::Teardown {
            stage: stage.into(),
            message: message.into(),
        }
    }

    /// Create a navigation error
    pub fn navigation<S: Into<String>>(url: S, message: S) -> Self {
        Self::Navigation {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a timeout error
    pub fn timeout<S: Into<String>>(operation: S, duration_secs: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            duration_secs,
        }
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
            value: None,
        }
    }

    /// Create a validation error recording the offending value
    pub fn validation_with_value<S: Into<String>>(field: S, message: S, value: S) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
            value: Some(value.into()),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
            context: None,
        }
    }

    /// Check if this is a retryable error
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Launch { .. } => true,
            Error::Navigation { .. } => true,
            Error::Timeout { .. } => true,
            _ => false,
        }
    }

    /// Get error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Error::Json(..) => "json",
            Error::Toml(..) => "toml",
            Error::Url(..) => "url",
            Error::Io(..) => "io",
            Error::Config { .. } => "config",
            Error::Proxy { .. } => "proxy",
            Error::Launch { .. } => "launch",
            Error::Teardown { .. } => "teardown",
            Error::Navigation { .. } => "navigation",
            Error::Timeout { .. } => "timeout",
            Error::Validation { .. } => "validation",
            Error::Internal { .. } => "internal",
        }
    }
}
