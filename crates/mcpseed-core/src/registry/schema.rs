//! MCP Server Registry descriptor
//!
//! One `ServerDescriptor` is produced per catalog entry and written to the
//! seed file consumed by the registry server. The registry adds its own
//! `io.modelcontextprotocol.registry/official` metadata on import, so seed
//! data only ever carries the publisher-provided bag.

use super::types::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Server schema every descriptor declares
pub const SERVER_SCHEMA_URL: &str =
    "https://static.modelcontextprotocol.io/schemas/2025-10-17/server.schema.json";

/// Version assigned to every seeded server
pub const SEED_SERVER_VERSION: &str = "v0.1.0";

/// `_meta` key holding catalog-derived attributes
pub const PUBLISHER_PROVIDED_META_KEY: &str = "io.modelcontextprotocol.registry/publisher-provided";

/// Maximum description length accepted by the registry
pub const MAX_DESCRIPTION_LEN: usize = 100;

/// Complete server definition in registry schema form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServerDescriptor {
    #[serde(rename = "$schema")]
    pub schema: String,

    /// Reverse-domain name, e.g. "com.docker.mcp/github"
    pub name: String,

    pub description: String,

    pub version: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub packages: Vec<Package>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remotes: Vec<Transport>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<Repository>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,

    /// Opaque metadata bag keyed by namespace
    #[serde(rename = "_meta", default, skip_serializing_if = "Map::is_empty")]
    pub meta: Map<String, Value>,
}

impl ServerDescriptor {
    /// A descriptor with the fixed schema and version and no transports yet
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            schema: SERVER_SCHEMA_URL.to_string(),
            name: name.into(),
            description: description.into(),
            version: SEED_SERVER_VERSION.to_string(),
            packages: Vec::new(),
            remotes: Vec::new(),
            repository: None,
            website_url: None,
            meta: Map::new(),
        }
    }

    /// Whether this server is reached over a network transport
    pub fn is_remote(&self) -> bool {
        !self.remotes.is_empty()
    }

    /// Publisher-provided metadata, if any
    pub fn publisher_provided(&self) -> Option<&Map<String, Value>> {
        self.meta
            .get(PUBLISHER_PROVIDED_META_KEY)
            .and_then(Value::as_object)
    }
}

/// Truncate to the registry limit: 97 characters plus "..."
pub fn truncate_description(description: &str) -> String {
    if description.chars().count() <= MAX_DESCRIPTION_LEN {
        return description.to_string();
    }
    let mut truncated: String = description.chars().take(MAX_DESCRIPTION_LEN - 3).collect();
    truncated.push_str("...");
    truncated
}
