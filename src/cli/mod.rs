//! Command-line interface logic
//!
//! This module contains the logic for the server and fetch modes of the
//! unified CLI binary.

pub mod fetch;
pub mod server;

pub use fetch::{FetchArgs, run_fetch_mode};
pub use server::{ServerArgs, run_server_mode};
