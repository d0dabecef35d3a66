//! Core types for the MCP server registry schema (output side)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Registry type for containerized packages
pub const OCI_REGISTRY_TYPE: &str = "oci";

/// Transport type for containerized packages
pub const STDIO_TRANSPORT_TYPE: &str = "stdio";

/// Runtime hint set when a package carries container runtime arguments
pub const DOCKER_RUNTIME_HINT: &str = "docker";

/// Format declared for every variable extracted from a template
pub const STRING_FORMAT: &str = "string";

/// Variable name to its input schema, ordered by name
pub type Variables = BTreeMap<String, InputSchema>;

fn is_false(value: &bool) -> bool {
    !*value
}

/// Metadata for one variable referenced by a templated value
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InputSchema {
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_secret: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub is_required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl InputSchema {
    /// Schema for a variable found in a template: a plain, optional string
    pub fn string(description: Option<String>) -> Self {
        Self {
            is_secret: false,
            is_required: false,
            format: Some(STRING_FORMAT.to_string()),
            description,
        }
    }

    /// Schema for a secret: always sensitive and always required
    pub fn secret() -> Self {
        Self {
            is_secret: true,
            is_required: true,
            format: None,
            description: None,
        }
    }
}

/// A named value, used for environment variables and transport headers
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KeyValueInput {
    pub name: String,

    /// Literal value or canonical `{variable}` template
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub is_required: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub is_secret: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub is_repeated: bool,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub variables: Variables,
}

impl KeyValueInput {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn with_variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }
}

/// How an argument is rendered on the command line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentType {
    /// Bare value (`serve`)
    #[default]
    Positional,
    /// Flag with optional value (`--port 8080`, `-v a:b`)
    Named,
}

/// A package or runtime argument
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Argument {
    #[serde(rename = "type")]
    pub arg_type: ArgumentType,

    /// Flag name for named arguments
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub is_required: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub is_secret: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub is_repeated: bool,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub variables: Variables,
}

impl Argument {
    pub fn positional(value: impl Into<String>) -> Self {
        Self {
            arg_type: ArgumentType::Positional,
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn named(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            arg_type: ArgumentType::Named,
            name: name.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn with_variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }
}

/// Communication mechanism of a package or remote
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Transport {
    /// "stdio", "sse", "streamable-http", ...
    #[serde(rename = "type")]
    pub transport_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<KeyValueInput>,
}

impl Transport {
    pub fn stdio() -> Self {
        Self {
            transport_type: STDIO_TRANSPORT_TYPE.to_string(),
            url: None,
            headers: Vec::new(),
        }
    }
}

/// An installable artifact of a server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub registry_type: String,

    pub transport: Transport,

    /// Full artifact reference; for OCI this includes the tag or digest
    pub identifier: String,

    /// Never set for OCI packages, the identifier is self-describing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub environment_variables: Vec<KeyValueInput>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub package_arguments: Vec<Argument>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub runtime_arguments: Vec<Argument>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_hint: Option<String>,
}

impl Package {
    /// An empty OCI package over stdio for the given image reference
    pub fn oci(identifier: impl Into<String>) -> Self {
        Self {
            registry_type: OCI_REGISTRY_TYPE.to_string(),
            transport: Transport::stdio(),
            identifier: identifier.into(),
            version: None,
            environment_variables: Vec::new(),
            package_arguments: Vec::new(),
            runtime_arguments: Vec::new(),
            runtime_hint: None,
        }
    }
}

/// Source code location of a server
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Repository {
    pub url: String,

    /// "github", "gitlab", or empty when unknown
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subfolder: Option<String>,
}

impl Repository {
    /// Build a repository reference, inferring the hosting source from the URL
    pub fn from_url(url: impl Into<String>) -> Self {
        let url = url.into();
        let source = infer_repository_source(&url).to_string();
        Self {
            url,
            source,
            subfolder: None,
        }
    }
}

/// Hosting source by substring match; no URL validation is done
pub fn infer_repository_source(url: &str) -> &'static str {
    if url.contains("github.com") {
        "github"
    } else if url.contains("gitlab.com") {
        "gitlab"
    } else {
        ""
    }
}
