//! Build script that generates branding constants from branding.toml
//!
//! Reads the workspace-level branding.toml and generates Rust constants
//! that are included at compile time.

use std::env;
use std::fs;
use std::path::Path;

const DEFAULT_NAMESPACE: &str = "com.docker.mcp";
const DEFAULT_OUTPUT: &str = "seed.json";

fn main() {
    println!("cargo:rerun-if-changed=../../branding.toml");

    // branding.toml lives two levels up, at the workspace root
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir).parent().unwrap().parent().unwrap();
    let branding_path = workspace_root.join("branding.toml");

    let content = fs::read_to_string(&branding_path).unwrap_or_default();

    // Simple TOML parsing without external dependency
    let namespace = extract_toml_string(&content, "namespace").unwrap_or(DEFAULT_NAMESPACE);
    let default_output = extract_toml_string(&content, "default_output").unwrap_or(DEFAULT_OUTPUT);

    let out_dir = env::var("OUT_DIR").unwrap();
    let rust_path = Path::new(&out_dir).join("branding_generated.rs");

    let rust_code = format!(
        r#"// Auto-generated branding constants from branding.toml
// DO NOT EDIT - regenerate with `cargo build`

/// Reverse-domain registry namespace prepended to catalog entry names
pub const REGISTRY_NAMESPACE: &str = {namespace:?};

/// Seed file written when no output path is configured
pub const DEFAULT_OUTPUT_FILE: &str = {default_output:?};
"#,
    );

    fs::write(&rust_path, rust_code).expect("Failed to write branding_generated.rs");
}

/// Extract a string value from TOML content (simple parser, no dependencies)
fn extract_toml_string<'a>(content: &'a str, key: &str) -> Option<&'a str> {
    for line in content.lines() {
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }
        if let Some((name, value)) = line.split_once('=') {
            if name.trim() != key {
                continue;
            }
            let value = value.trim();
            if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
                return Some(&value[1..value.len() - 1]);
            }
        }
    }
    None
}
