//! Centralized branding constants
//!
//! The registry namespace and default output file come from this module.
//! Generated from branding.toml at build time.
//!
//! # Usage
//!
//! ```rust
//! use mcpseed_core::branding;
//!
//! let name = branding::server_name("github");
//! assert_eq!(name, format!("{}/github", branding::REGISTRY_NAMESPACE));
//! ```

// Include generated constants from build.rs
include!(concat!(env!("OUT_DIR"), "/branding_generated.rs"));

/// Get the registry server name for a catalog entry key
///
/// # Example
/// ```ignore
/// let name = branding::server_name("github");
/// // Returns: "com.docker.mcp/github"
/// ```
pub fn server_name(entry_key: &str) -> String {
    format!("{}/{}", REGISTRY_NAMESPACE, entry_key)
}
