//! Seed file output.

use std::path::Path;
use tracing::info;

use crate::error::{Result, SeedError};
use crate::registry::ServerDescriptor;

/// Encode descriptors as a pretty-printed (2-space) JSON array
pub fn encode_seed(servers: &[ServerDescriptor]) -> Result<String> {
    serde_json::to_string_pretty(servers).map_err(|source| SeedError::SeedEncode { source })
}

/// Write the seed file, creating parent directories as needed.
///
/// Returns the number of bytes written.
pub async fn write_seed(path: &Path, servers: &[ServerDescriptor]) -> Result<usize> {
    let json = encode_seed(servers)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| SeedError::io(parent, e))?;
    }

    tokio::fs::write(path, &json)
        .await
        .map_err(|e| SeedError::io(path, e))?;

    info!(
        path = %path.display(),
        servers = servers.len(),
        bytes = json.len(),
        "Wrote registry seed"
    );
    Ok(json.len())
}
