//! Unified CLI for Browser Relay
//!
//! This is the main binary that provides both server and fetch modes
//! through a unified command-line interface using subcommands.
//!
//! # Usage
//!
//! ## Server Mode
//! ```bash
//! browser-relay server --port 3000 --host ::
//! ```
//!
//! ## Fetch Mode
//! ```bash
//! browser-relay https://example.com --verbose
//! ```
//!
//! ## Help and Version
//! ```bash
//! browser-relay --version
//! browser-relay --help
//! browser-relay server --help
//! ```

use clap::{Parser, Subcommand};

use browser_relay::cli::{
    fetch::{FetchArgs, run_fetch_mode},
    server::{ServerArgs, run_server_mode},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "browser-relay")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    // Fetch mode options (when no subcommand is provided)
    /// URL to fetch
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Proxy server URL replacing the configured rotation
    /// (http://host:port, socks5://host:port, etc.)
    #[arg(short, long, value_name = "PROXY")]
    proxy: Option<String>,

    /// Navigation deadline in milliseconds
    #[arg(short, long, value_name = "TIMEOUT_MS")]
    timeout_ms: Option<u64>,

    /// Configuration file path
    #[arg(long)]
    config: Option<String>,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server mode
    Server {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Configuration file path
        #[arg(long)]
        config: Option<String>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Server {
            port,
            host,
            config,
            verbose,
        }) => {
            // Server mode logic
            let args = ServerArgs {
                port,
                host,
                config,
                verbose,
            };
            run_server_mode(args).await
        }
        None => {
            // Fetch mode logic (default when no subcommand)
            let args = FetchArgs {
                url: cli.url,
                proxy: cli.proxy,
                timeout_ms: cli.timeout_ms,
                config: cli.config,
                version: false, // Version is handled by clap itself
                verbose: cli.verbose,
            };
            run_fetch_mode(args).await
        }
    }
}
