//! Docker MCP catalog types (input side)
//!
//! These mirror the JSON printed by `docker mcp catalog show --format json`.
//! Decoding is deliberately lenient: every field is optional and an explicit
//! `null` decodes to the empty value, so sparse catalog entries still load.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Entry type marking a hosted (non-containerized) server
pub const REMOTE_ENTRY_TYPE: &str = "remote";

/// Decode `null` as `T::default()`
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Complete catalog document
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct DockerCatalog {
    /// Catalog identifier (e.g. "docker-mcp")
    #[serde(deserialize_with = "nullable")]
    pub name: String,

    /// Human-readable catalog name
    #[serde(deserialize_with = "nullable")]
    pub display_name: String,

    /// Entries keyed by entry name, iterated in name order
    #[serde(deserialize_with = "nullable")]
    pub registry: BTreeMap<String, CatalogEntry>,
}

impl DockerCatalog {
    /// Number of entries in the catalog
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Get an entry by name
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.registry.get(name)
    }
}

/// One catalog record describing a packaged MCP server
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogEntry {
    #[serde(deserialize_with = "nullable")]
    pub description: String,

    #[serde(deserialize_with = "nullable")]
    pub title: String,

    /// Entry kind; "remote" for hosted servers, anything else is containerized
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub entry_type: String,

    #[serde(deserialize_with = "nullable")]
    pub date_added: String,

    /// Full image reference including tag or digest
    #[serde(deserialize_with = "nullable")]
    pub image: String,

    /// Source git ref the image was built from
    #[serde(rename = "ref", deserialize_with = "nullable")]
    pub git_ref: String,

    #[serde(deserialize_with = "nullable")]
    pub readme: String,

    #[serde(deserialize_with = "nullable")]
    pub tools_url: String,

    #[serde(deserialize_with = "nullable")]
    pub source: String,

    /// Upstream repository URL
    #[serde(deserialize_with = "nullable")]
    pub upstream: String,

    #[serde(deserialize_with = "nullable")]
    pub icon: String,

    #[serde(deserialize_with = "nullable")]
    pub tools: Vec<Tool>,

    #[serde(deserialize_with = "nullable")]
    pub prompts: i64,

    /// Open attribute bag, passed through untouched
    #[serde(deserialize_with = "nullable")]
    pub resources: Map<String, Value>,

    #[serde(deserialize_with = "nullable")]
    pub metadata: CatalogMetadata,

    #[serde(deserialize_with = "nullable")]
    pub secrets: Vec<Secret>,

    #[serde(deserialize_with = "nullable")]
    pub env: Vec<EnvVar>,

    /// Command tokens appended to the container entrypoint
    #[serde(deserialize_with = "nullable")]
    pub command: Vec<String>,

    /// Volume specs (`host:container[:mode]`), possibly templated
    #[serde(deserialize_with = "nullable")]
    pub volumes: Vec<String>,

    #[serde(deserialize_with = "nullable")]
    pub config: Vec<ConfigBlock>,

    pub remote: Option<RemoteDescriptor>,

    /// Container user (`uid[:gid]`), possibly templated
    pub user: Option<String>,

    #[serde(deserialize_with = "nullable")]
    pub long_lived: bool,

    #[serde(deserialize_with = "nullable")]
    pub allow_hosts: Vec<String>,

    pub oauth: Option<OAuthConfig>,
}

impl CatalogEntry {
    /// Whether this entry describes a hosted server
    pub fn is_remote(&self) -> bool {
        self.entry_type == REMOTE_ENTRY_TYPE
    }

    /// Container user, treating an empty string as absent
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref().filter(|u| !u.is_empty())
    }

    /// Upstream URL, treating an empty string as absent
    pub fn upstream(&self) -> Option<&str> {
        Some(self.upstream.as_str()).filter(|u| !u.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Tool {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
}

/// Popularity and classification metadata
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogMetadata {
    #[serde(deserialize_with = "nullable")]
    pub pulls: i64,

    #[serde(deserialize_with = "nullable")]
    pub stars: i64,

    #[serde(deserialize_with = "nullable")]
    pub github_stars: i64,

    #[serde(deserialize_with = "nullable")]
    pub category: String,

    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<String>,

    #[serde(deserialize_with = "nullable")]
    pub license: String,

    #[serde(deserialize_with = "nullable")]
    pub owner: String,
}

/// A secret the server needs, injected through an environment variable
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Secret {
    /// Secret identifier (e.g. "github.personal_access_token")
    #[serde(deserialize_with = "nullable")]
    pub name: String,

    /// Environment variable receiving the secret
    #[serde(deserialize_with = "nullable")]
    pub env: String,

    #[serde(deserialize_with = "nullable")]
    pub example: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EnvVar {
    #[serde(deserialize_with = "nullable")]
    pub name: String,

    /// Literal or `{{placeholder}}` templated value
    #[serde(deserialize_with = "nullable")]
    pub value: String,
}

/// Named group of property schemas
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConfigBlock {
    #[serde(deserialize_with = "nullable")]
    pub name: String,

    #[serde(deserialize_with = "nullable")]
    pub description: String,

    #[serde(rename = "type", deserialize_with = "nullable")]
    pub block_type: String,

    /// Property name to schema (description, type, ...)
    #[serde(deserialize_with = "nullable")]
    pub properties: Map<String, Value>,

    #[serde(deserialize_with = "nullable")]
    pub required: Vec<String>,
}

/// Connection details for a hosted server
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RemoteDescriptor {
    #[serde(deserialize_with = "nullable")]
    pub transport_type: String,

    #[serde(deserialize_with = "nullable")]
    pub url: String,

    /// Header name to value, ordered by name
    #[serde(deserialize_with = "nullable")]
    pub headers: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OAuthConfig {
    #[serde(deserialize_with = "nullable")]
    pub providers: Vec<OAuthProvider>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OAuthProvider {
    #[serde(deserialize_with = "nullable")]
    pub provider: String,

    #[serde(deserialize_with = "nullable")]
    pub secret: String,

    #[serde(deserialize_with = "nullable")]
    pub env: String,
}
