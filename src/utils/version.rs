//! Version information utilities
//!
//! Provides version information for the application.

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the current application version
pub fn get_version() -> &'static str {
    VERSION
}

/// Get detailed version information including git commit
pub fn get_detailed_version() -> String {
    let version = get_version();
    let git_hash = option_env!("GIT_HASH").unwrap_or("unknown");
    let build_date = option_env!("BUILD_DATE").unwrap_or("unknown");

    format!("{} ({}@{})", version, git_hash, build_date)
}
