//! Fetch mode CLI logic
//!
//! Contains the core logic for the script mode one-shot page fetch.

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    Settings,
    config::ConfigLoader,
    session::{BrowserManager, EngineHandle},
    types::{NavigateRequest, NavigateResponse},
    utils::VERSION,
};

/// Arguments for fetch mode
#[derive(Debug)]
pub struct FetchArgs {
    pub url: Option<String>,
    pub proxy: Option<String>,
    pub timeout_ms: Option<u64>,
    pub config: Option<String>,
    pub version: bool,
    pub verbose: bool,
}

/// Run fetch mode with the given arguments
pub async fn run_fetch_mode(args: FetchArgs) -> Result<()> {
    // Handle version flag early
    if args.version {
        println!("{}", VERSION);
        return Ok(());
    }

    // Initialize logging (minimal for script mode, stderr keeps stdout clean
    // for the JSON result)
    if args.verbose {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "error".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    let Some(url) = args.url else {
        eprintln!("A URL is required, e.g. browser-relay https://example.com");
        std::process::exit(1);
    };

    debug!(
        "Starting fetch with parameters: url={}, proxy={:?}, timeout_ms={:?}",
        url, args.proxy, args.timeout_ms
    );

    // Load configuration from file or defaults
    let config_path = if let Some(config) = &args.config {
        Some(std::path::PathBuf::from(config))
    } else {
        ConfigLoader::get_config_path()
    };

    let mut settings = ConfigLoader::new()
        .load(config_path.as_deref())
        .unwrap_or_else(|e| {
            eprintln!(
                "Warning: Failed to load configuration: {}. Using defaults.",
                e
            );
            Settings::default()
        });

    // A proxy given on the command line replaces the configured rotation
    if let Some(proxy) = args.proxy {
        settings.proxy.servers = vec![proxy];
    }

    let request = build_navigate_request(&url, args.timeout_ms);
    let target = request.parse_target()?;
    let timeout = request.navigation_timeout(settings.browser.navigation_timeout_secs);

    let manager = BrowserManager::new(settings)?;

    let started = std::time::Instant::now();
    let result = async {
        manager.admit().await?;
        let handle = manager.acquire().await?;
        handle.visit(target.as_str(), timeout).await
    }
    .await;

    match result {
        Ok(visit) => {
            let elapsed_ms = started.elapsed().as_millis() as u64;
            let response = NavigateResponse::new(visit.url, visit.content, elapsed_ms);

            // Output result as JSON
            let output = serde_json::to_string(&response)?;
            println!("{}", output);

            info!("Successfully fetched {} in {}ms", response.url, elapsed_ms);

            // Shut down the browser before exiting so no orphan process is left
            manager.close().await;
        }
        Err(e) => {
            // Close the browser before exiting on error
            manager.close().await;

            eprintln!(
                "Failed while fetching page. Error: {}",
                crate::error::format_error(&e)
            );

            // Output empty JSON on error so callers always get parseable output
            println!("{{}}");
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Build the navigation request from CLI arguments
fn build_navigate_request(url: &str, timeout_ms: Option<u64>) -> NavigateRequest {
    let mut request = NavigateRequest::new(url);

    if let Some(timeout_ms) = timeout_ms {
        request = request.with_timeout_ms(timeout_ms);
    }

    request
}
