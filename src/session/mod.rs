//! Browser session management
//!
//! This module handles the shared browser lifecycle: proxy rotation, the
//! engine abstraction over the DevTools client, and the manager that
//! coordinates launch, reuse, recycling and teardown under concurrency.

pub mod chrome;
pub mod engine;
pub mod manager;
pub mod rotator;

pub use chrome::{ChromeEngine, ChromeHandle};
pub use engine::{BrowserEngine, DisconnectSignal, EngineHandle, LaunchPlan, PageVisit};
pub use manager::{BrowserManager, BrowserManagerGeneric, SessionStatus};
pub use rotator::{ProxyCredentials, ProxyEndpoint, ProxyRotator};
