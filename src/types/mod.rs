//! Type definitions for the relay service
//!
//! This module contains the main data structures used for requests and responses.

pub mod request;
pub mod response;

pub use request::NavigateRequest;
pub use response::{CleanupResponse, ErrorResponse, NavigateResponse, PingResponse};
