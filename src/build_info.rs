//! Build information module
//!
//! Package metadata embedded at compile time.

use serde::Serialize;

/// Package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Package description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Git commit the binary was built from, when the build environment sets it
pub const GIT_SHA: Option<&str> = option_env!("SAVEUS_GIT_SHA");

/// Build information structure for serialization
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub git_sha: Option<&'static str>,
    pub description: &'static str,
}

impl BuildInfo {
    /// Get the current build info
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            git_sha: GIT_SHA,
            description: DESCRIPTION,
        }
    }
}

/// Log the startup banner
pub fn print_startup_banner() {
    let info = BuildInfo::current();
    tracing::info!(
        name = info.name,
        version = info.version,
        git_sha = info.git_sha.unwrap_or("unknown"),
        "{}",
        info.description
    );
}
