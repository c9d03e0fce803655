//! HTTP request handlers
//!
//! Implementation of HTTP endpoints for the relay server.

use crate::{
    server::app::AppState,
    session::{EngineHandle, PageVisit},
    types::{CleanupResponse, ErrorResponse, NavigateRequest, NavigateResponse, PingResponse},
    utils::version,
};
use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Duration;

/// Middleware enforcing the `x-api-key` header
///
/// Routes registered after this layer are not guarded. When no API key is
/// configured every caller is accepted.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    let Some(expected) = state.settings.server.api_key.as_deref() else {
        return Ok(next.run(request).await);
    };

    let provided = request
        .headers()
        .get("x-api-key")
        .and_then(|value| value.to_str().ok());

    if provided == Some(expected) {
        return Ok(next.run(request).await);
    }

    tracing::warn!(
        "Rejected {} {} with missing or invalid API key",
        request.method(),
        request.uri().path()
    );
    Err((
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse::with_context(
            "Invalid or missing API key",
            "authentication",
        )),
    ))
}

/// Fetch a page through the managed browser
///
/// POST /navigate
///
/// Admits the request against the session budget, acquires the shared
/// browser and returns the rendered page.
pub async fn navigate(
    State(state): State<AppState>,
    body: axum::body::Bytes,
) -> axum::response::Response {
    // Parse JSON with detailed error logging
    let request: NavigateRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(e) => {
            let body_preview = if body.len() > 1000 {
                format!(
                    "{}... (truncated, total {} bytes)",
                    String::from_utf8_lossy(&body[..1000]),
                    body.len()
                )
            } else {
                String::from_utf8_lossy(&body).to_string()
            };

            tracing::error!(
                "Failed to deserialize JSON request: {}\nBody preview: {}",
                e,
                body_preview
            );

            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::with_context(
                    format!("Invalid JSON: {}", e),
                    "json_deserialization",
                )),
            )
                .into_response();
        }
    };

    let target = match request.parse_target() {
        Ok(target) => target,
        Err(e) => {
            tracing::warn!("Rejected navigation request: {}", format_error(&e));
            return error_response(&e, "request_validation");
        }
    };

    let timeout = request.navigation_timeout(state.settings.browser.navigation_timeout_secs);
    tracing::debug!("Received navigation request for {}", target);

    let started = std::time::Instant::now();
    match fetch_page(&state, target.as_str(), timeout).await {
        Ok(visit) => {
            let elapsed_ms = started.elapsed().as_millis() as u64;
            tracing::info!("Fetched {} in {}ms", visit.url, elapsed_ms);
            (
                StatusCode::OK,
                Json(NavigateResponse::new(visit.url, visit.content, elapsed_ms)),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to fetch {}: {}", target, format_error(&e));
            error_response(&e, "navigation")
        }
    }
}

/// Run one fetch through the admission and acquisition sequence
async fn fetch_page(state: &AppState, url: &str, timeout: Duration) -> crate::Result<PageVisit> {
    state.manager.admit().await?;
    let handle = state.manager.acquire().await?;
    handle.visit(url, timeout).await
}

/// Close the shared browser endpoint
///
/// POST /cleanup
///
/// Tears down the running browser session if there is one. Always succeeds.
pub async fn cleanup(State(state): State<AppState>) -> (StatusCode, Json<CleanupResponse>) {
    tracing::info!("Cleanup requested, closing browser session");
    state.manager.close().await;
    (StatusCode::OK, Json(CleanupResponse::closed()))
}

/// Ping endpoint for health checks
///
/// GET /ping
///
/// Returns server status and uptime information.
pub async fn ping(State(state): State<AppState>) -> Json<PingResponse> {
    let uptime = state.start_time.elapsed().as_secs();
    let status = state.manager.status().await;
    let response = PingResponse::new(uptime, version::get_version(), status.browser_active);

    tracing::debug!(
        "Ping response: uptime={}s, version={}, browser_active={}",
        uptime,
        version::get_version(),
        status.browser_active
    );
    Json(response)
}

/// Format error for HTTP response
fn format_error(error: &crate::Error) -> String {
    crate::error::format_error(error)
}

/// Build the error response body for a failed request
fn error_response(error: &crate::Error, context: &str) -> Response {
    (
        error_status(error),
        Json(ErrorResponse::with_context(format_error(error), context)),
    )
        .into_response()
}

/// Map an error to the HTTP status reported to the caller
fn error_status(error: &crate::Error) -> StatusCode {
    match error {
        crate::Error::Config { .. } | crate::Error::Validation { .. } => StatusCode::BAD_REQUEST,
        crate::Error::Url(_) => StatusCode::BAD_REQUEST,
        crate::Error::Launch { .. }
        | crate::Error::Navigation { .. }
        | crate::Error::Proxy { .. } => StatusCode::BAD_GATEWAY,
        crate::Error::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
