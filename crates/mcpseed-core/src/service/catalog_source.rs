//! Sources the Docker MCP catalog can be loaded from.
//!
//! The catalog normally comes from the docker CLI's MCP plugin. A file
//! source reads the same document for offline runs and tests.

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

use crate::catalog::DockerCatalog;
use crate::error::{Result, SeedError};

/// Default program providing `mcp catalog show`
pub const DEFAULT_DOCKER_PROGRAM: &str = "docker";

/// Arguments printing the active catalog as JSON
pub const CATALOG_SHOW_ARGS: [&str; 5] = ["mcp", "catalog", "show", "--format", "json"];

/// Somewhere a catalog document can be obtained from
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load and decode the full catalog
    async fn load(&self) -> Result<DockerCatalog>;

    /// Human-readable description for logs and errors
    fn describe(&self) -> String;
}

/// Decode a catalog JSON document
pub fn decode_catalog(bytes: &[u8]) -> Result<DockerCatalog> {
    let catalog: DockerCatalog =
        serde_json::from_slice(bytes).map_err(|source| SeedError::CatalogDecode { source })?;
    debug!(
        catalog = %catalog.name,
        entries = catalog.len(),
        "Decoded catalog"
    );
    Ok(catalog)
}

/// Runs `<program> mcp catalog show --format json`
#[derive(Debug, Clone)]
pub struct DockerCliCatalogSource {
    program: String,
}

impl DockerCliCatalogSource {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for DockerCliCatalogSource {
    fn default() -> Self {
        Self::new(DEFAULT_DOCKER_PROGRAM)
    }
}

#[async_trait]
impl CatalogSource for DockerCliCatalogSource {
    async fn load(&self) -> Result<DockerCatalog> {
        let command = self.describe();
        info!("Running {}", command);

        let output = Command::new(&self.program)
            .args(CATALOG_SHOW_ARGS)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| SeedError::CatalogCommand {
                command: command.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SeedError::CatalogCommand {
                command,
                message: format!("{}: {}", output.status, stderr.trim()),
            });
        }

        debug!(bytes = output.stdout.len(), "Catalog command succeeded");
        decode_catalog(&output.stdout)
    }

    fn describe(&self) -> String {
        format!("{} {}", self.program, CATALOG_SHOW_ARGS.join(" "))
    }
}

/// Reads a catalog document from disk
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn load(&self) -> Result<DockerCatalog> {
        info!("Reading catalog from {}", self.path.display());
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| SeedError::io(&self.path, e))?;
        decode_catalog(&bytes)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
