//! Browser Relay
//!
//! A proxy-rotating shared-browser relay for fetching rendered pages. One
//! headless browser is shared across all callers, recycled after a configured
//! number of requests and relaunched through the next proxy in the rotation.
//!
//! # Features
//!
//! - **Shared Browser Session**: A single browser serves every request until recycled
//! - **Proxy Rotation**: Each launch goes through the next configured proxy
//! - **Request Budget**: Sessions are recycled after a fixed number of requests
//! - **Crash Recovery**: Unexpected browser exits reset state for the next caller
//! - **HTTP Server Mode**: Always-running REST API for page fetching
//! - **Script Mode**: Command-line interface for one-shot fetches
//!
//! # Architecture
//!
//! The project consists of two main operation modes:
//! - **HTTP Server Mode**: An always-running REST API service for page fetching
//! - **Script Mode**: A command-line tool for single fetches
//!
//! # Usage
//!
//! ## HTTP Server Mode
//!
//! ```bash
//! browser-relay server --port 3000 --host ::
//! ```
//!
//! ## Script Mode
//!
//! ```bash
//! browser-relay https://example.com
//! ```
//!
//! # Examples
//!
//! ```rust
//! use browser_relay::{BrowserManager, Settings};
//!
//! # fn example() -> browser_relay::Result<()> {
//! let manager = BrowserManager::new(Settings::default())?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod session;
pub mod types;
pub mod utils;

pub use config::{ConfigLoader, Settings};
pub use error::{Error, Result};
pub use session::{BrowserManager, ProxyRotator, SessionStatus};
pub use types::{ErrorResponse, NavigateRequest, NavigateResponse, PingResponse};
