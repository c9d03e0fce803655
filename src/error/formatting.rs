//! Error formatting utilities
//!
//! Provides consistent error message formatting for log lines and API
//! responses, including nested error causes.

use crate::Error;
use serde_json;
use std::error::Error as StdError;

/// Format error for display
///
/// Provides detailed error formatting with nested error causes appended.
pub fn format_error(error: &Error) -> String {
    let formatted = match error {
        Error::Config { field, message } => {
            format!("Configuration error in {}: {}", field, message)
        }

        Error::Proxy {
            descriptor,
            message,
        } => {
            format!("Proxy error with descriptor '{}': {}", descriptor, message)
        }

        Error::Launch { message } => {
            format!("Browser launch failed: {}", message)
        }

        Error::Teardown { stage, message } => {
            format!("Teardown step '{}' failed: {}", stage, message)
        }

        Error::Navigation { url, message } => {
            format!("Navigation to '{}' failed: {}", url, message)
        }

        Error::Timeout {
            operation,
            duration_secs,
        } => {
            format!(
                "Operation '{}' timed out after {} seconds",
                operation, duration_secs
            )
        }

        Error::Validation {
            field,
            message,
            value,
        } => match value {
            Some(val) => format!(
                "Validation failed for {} (value: '{}'): {}",
                field, val, message
            ),
            None => format!("Validation failed for {}: {}", field, message),
        },

        // For standard errors, use their Display implementation
        _ => error.to_string(),
    };

    // Append nested error causes not already part of the message
    let mut result = formatted;
    let mut source = error.source();

    while let Some(cause) = source {
        if !result.contains(&cause.to_string()) {
            result = format!("{} (caused by {})", result, cause);
        }
        source = cause.source();
    }

    result
}

/// Format error for JSON API responses
pub fn format_error_for_api(error: &Error) -> serde_json::Value {
    serde_json::json!({
        "error": format_error(error),
        "category": error.category(),
        "retryable": error.is_retryable(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })
}

/// Format error for logging with structured data
pub fn format_error_for_logging(error: &Error) -> serde_json::Value {
    let mut log_data = serde_json::json!({
        "message": format_error(error),
        "category": error.category(),
        "retryable": error.is_retryable(),
    });

    // Add specific error details
    match error {
        Error::Proxy { descriptor, .. } => {
            log_data["proxy_descriptor"] = serde_json::Value::String(descriptor.clone());
        }
        Error::Teardown { stage, .. } => {
            log_data["teardown_stage"] = serde_json::Value::String(stage.clone());
        }
        Error::Navigation { url, .. } => {
            log_data["url"] = serde_json::Value::String(url.clone());
        }
        Error::Timeout { duration_secs, .. } => {
            log_data["timeout_duration"] = serde_json::Value::Number((*duration_secs).into());
        }
        Error::Validation {
            value: Some(val), ..
        } => {
            log_data["value"] = serde_json::Value::String(val.clone());
        }
        _ => {}
    }

    log_data
}
