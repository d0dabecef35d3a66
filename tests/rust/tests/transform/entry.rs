//! Tests for EntryTransformer against the sample catalog

use pretty_assertions::assert_eq;
use serde_json::json;

use mcpseed_core::branding;
use mcpseed_core::registry::{Argument, ArgumentType, InputSchema, KeyValueInput};
use mcpseed_core::transform_entry;
use tests::assertions::{assert_single_shape, assert_variables_referenced};
use tests::fixtures::{entry, sample_entry};

#[test]
fn test_time_entry_metadata_and_description() {
    let server = transform_entry("time", &sample_entry("time"));

    assert_eq!(server.name, branding::server_name("time"));
    assert_eq!(server.description.chars().count(), 100);
    assert!(server.description.ends_with("..."));
    assert!(server
        .description
        .starts_with("Time and timezone conversion capabilities."));

    let meta = server.publisher_provided().expect("publisher metadata");
    assert_eq!(meta["pulls"], 21345);
    assert_eq!(meta["stars"], 12);
    assert_eq!(meta["githubStars"], 58000);
    assert_eq!(meta["category"], "productivity");
    assert_eq!(meta["tags"], json!(["time", "timezone"]));
    assert_eq!(
        meta["tools"],
        json!([{"name": "convert_time"}, {"name": "get_current_time"}])
    );
    assert_eq!(meta["dateAdded"], "2025-03-10T00:00:00Z");
    assert_eq!(meta["upstream"], "https://github.com/modelcontextprotocol/servers");

    let pkg = &server.packages[0];
    assert!(pkg.identifier.starts_with("mcp/time@sha256:"));
    assert!(pkg.runtime_hint.is_none());
    assert_eq!(server.repository.as_ref().unwrap().source, "github");
}

#[test]
fn test_github_env_and_secrets() {
    let server = transform_entry("github", &sample_entry("github"));
    let env = &server.packages[0].environment_variables;

    assert_eq!(env.len(), 3);

    assert_eq!(env[0].name, "GITHUB_TOOLSETS");
    assert_eq!(env[0].value, "{github.toolsets}");
    assert_eq!(
        env[0].variables["github.toolsets"],
        InputSchema::string(Some("Comma separated list of toolsets".to_string()))
    );

    assert_eq!(env[1], KeyValueInput::new("GITHUB_HOST", "https://github.com"));

    assert_eq!(env[2].name, "GITHUB_PERSONAL_ACCESS_TOKEN");
    assert_eq!(env[2].value, "{github.personal_access_token}");
    assert_eq!(
        env[2].variables["github.personal_access_token"],
        InputSchema::secret()
    );

    assert!(server.packages[0].package_arguments.is_empty());
    assert!(server.packages[0].runtime_arguments.is_empty());
}

#[test]
fn test_filesystem_arguments() {
    let server = transform_entry("filesystem", &sample_entry("filesystem"));
    let pkg = &server.packages[0];

    assert_eq!(
        pkg.package_arguments[0],
        Argument::positional("{{filesystem.paths|volume-target|into}}")
    );

    let readonly = &pkg.package_arguments[1];
    assert_eq!(readonly.arg_type, ArgumentType::Named);
    assert_eq!(readonly.name, "--readonly");
    assert_eq!(readonly.value, "{filesystem.readonly}");
    assert_eq!(readonly.variables["filesystem.readonly"], InputSchema::string(None));

    let volume = &pkg.runtime_arguments[0];
    assert_eq!(volume.name, "-v");
    assert_eq!(volume.value, "{filesystem.paths}");
    assert_eq!(
        volume.variables["filesystem.paths"].description.as_deref(),
        Some("Directories the server may access")
    );

    // uid is not an object schema, so it has no description
    let user = &pkg.runtime_arguments[1];
    assert_eq!(user.name, "-u");
    assert_eq!(user.value, "{filesystem.uid}");
    assert!(user.variables["filesystem.uid"].description.is_none());

    assert_eq!(pkg.runtime_hint.as_deref(), Some("docker"));
    assert_eq!(server.repository.as_ref().unwrap().source, "gitlab");
}

#[test]
fn test_postgres_command_and_repository() {
    let server = transform_entry("postgres", &sample_entry("postgres"));
    let pkg = &server.packages[0];

    assert_eq!(pkg.package_arguments[0], Argument::named("--transport", "stdio"));
    assert_eq!(
        pkg.package_arguments[1],
        Argument::positional("postgresql://{{postgres.user}}@{{postgres.host}}:5432/db")
    );
    assert_eq!(pkg.identifier, "mcp/postgres:latest");

    let repo = server.repository.as_ref().unwrap();
    assert_eq!(repo.url, "https://example.com/postgres-mcp");
    assert_eq!(repo.source, "");

    let meta = server.publisher_provided().unwrap();
    assert_eq!(meta["pulls"], 42);
    assert!(!meta.contains_key("stars"));
}

#[test]
fn test_remote_entry_produces_remote_only() {
    let server = transform_entry("notion-remote", &sample_entry("notion-remote"));

    assert!(server.packages.is_empty());
    assert!(server.repository.is_none());
    assert_eq!(server.remotes.len(), 1);
    assert_eq!(server.remotes[0].transport_type, "streamable-http");
    assert_eq!(
        server.remotes[0].headers,
        vec![KeyValueInput::new("Authorization", "Bearer {{notion.token}}")]
    );

    let value = serde_json::to_value(&server).unwrap();
    assert!(value.get("packages").is_none());
}

#[test]
fn test_sample_entries_respect_invariants() {
    for name in ["time", "github", "filesystem", "postgres", "notion-remote"] {
        let server = transform_entry(name, &sample_entry(name));
        assert_single_shape(&server);
        assert_variables_referenced(&server);
    }
}

#[test]
fn test_malformed_templates_degrade_silently() {
    let server = transform_entry(
        "broken",
        &entry(json!({
            "env": [{"name": "A", "value": "{{ok}} then {{never closed"}],
            "volumes": ["{{|}}:/data"],
            "command": ["--flag={{x"]
        })),
    );
    let pkg = &server.packages[0];

    assert_eq!(pkg.environment_variables[0].value, "{ok} then {never closed");
    assert_eq!(
        pkg.environment_variables[0].variables.keys().collect::<Vec<_>>(),
        vec!["ok"]
    );
    assert_eq!(pkg.runtime_arguments[0].value, "{}:/data");
    assert_eq!(
        pkg.runtime_arguments[0].variables.keys().collect::<Vec<_>>(),
        vec![""]
    );
    assert_eq!(pkg.package_arguments[0].value, "{x");
    assert!(pkg.package_arguments[0].variables.is_empty());
}

#[test]
fn test_serialized_shape_matches_registry_schema() {
    let server = transform_entry(
        "api",
        &entry(json!({
            "description": "API",
            "image": "mcp/api:1",
            "secrets": [{"name": "API_KEY", "env": "KEY_ENV"}],
            "command": ["--port=8080"]
        })),
    );
    let value = serde_json::to_value(&server).unwrap();

    assert_eq!(
        value["$schema"],
        "https://static.modelcontextprotocol.io/schemas/2025-10-17/server.schema.json"
    );
    assert_eq!(value["version"], "v0.1.0");
    assert_eq!(
        value["packages"],
        json!([{
            "registryType": "oci",
            "transport": {"type": "stdio"},
            "identifier": "mcp/api:1",
            "environmentVariables": [{
                "name": "KEY_ENV",
                "value": "{API_KEY}",
                "variables": {"API_KEY": {"isSecret": true, "isRequired": true}}
            }],
            "packageArguments": [{"type": "named", "name": "--port", "value": "8080"}]
        }])
    );
    assert!(value["_meta"]["io.modelcontextprotocol.registry/publisher-provided"].is_object());
}
