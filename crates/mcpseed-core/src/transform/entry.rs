//! Conversion of one catalog entry into a registry server descriptor.

use serde_json::{json, Map, Value};
use tracing::debug;

use super::config_index::ConfigIndex;
use super::placeholder;
use crate::branding;
use crate::catalog::{CatalogEntry, RemoteDescriptor};
use crate::registry::{
    truncate_description, Argument, InputSchema, KeyValueInput, Package, Repository,
    ServerDescriptor, Transport, Variables, DOCKER_RUNTIME_HINT, PUBLISHER_PROVIDED_META_KEY,
};

/// Flag used for each volume runtime argument
const VOLUME_FLAG: &str = "-v";

/// Flag used for the user runtime argument
const USER_FLAG: &str = "-u";

/// Builds the `ServerDescriptor` for a single catalog entry.
///
/// The config index is built from the entry's own config blocks, so
/// transformers share no state and can run independently.
pub struct EntryTransformer<'a> {
    key: &'a str,
    entry: &'a CatalogEntry,
    config: ConfigIndex,
}

impl<'a> EntryTransformer<'a> {
    pub fn new(key: &'a str, entry: &'a CatalogEntry) -> Self {
        Self {
            key,
            entry,
            config: ConfigIndex::build(&entry.config),
        }
    }

    /// Produce the descriptor.
    ///
    /// Remote entries with a remote descriptor get exactly one remote
    /// transport and nothing else; every other entry becomes one OCI package.
    pub fn transform(&self) -> ServerDescriptor {
        let mut server = ServerDescriptor::new(
            branding::server_name(self.key),
            truncate_description(&self.entry.description),
        );
        server.meta.insert(
            PUBLISHER_PROVIDED_META_KEY.to_string(),
            Value::Object(self.publisher_provided()),
        );

        if self.entry.is_remote() {
            if let Some(remote) = &self.entry.remote {
                debug!(entry = %self.key, url = %remote.url, "Transforming remote entry");
                server.remotes = vec![remote_transport(remote)];
                return server;
            }
        }

        server.packages = vec![self.package()];
        server.repository = self.entry.upstream().map(Repository::from_url);
        server
    }

    /// Catalog attributes passed through for downstream consumers.
    ///
    /// Absent lists and maps are emitted empty (`[]`, `{}`), never `null`.
    fn publisher_provided(&self) -> Map<String, Value> {
        let entry = self.entry;
        let metadata = &entry.metadata;

        let mut provided = Map::new();
        let mut put = |key: &str, value: Value| {
            provided.insert(key.to_string(), value);
        };
        put("pulls", json!(metadata.pulls));
        put("githubStars", json!(metadata.github_stars));
        put("category", json!(metadata.category));
        put("tags", json!(metadata.tags));
        put("license", json!(metadata.license));
        put("owner", json!(metadata.owner));
        put("tools", json!(entry.tools));
        put("source", json!(entry.source));
        put("icon", json!(entry.icon));
        put("prompts", json!(entry.prompts));
        put("title", json!(entry.title));
        put("readme", json!(entry.readme));
        put("toolsUrl", json!(entry.tools_url));
        put("dateAdded", json!(entry.date_added));
        put("upstream", json!(entry.upstream));
        put("resources", Value::Object(entry.resources.clone()));
        if metadata.stars > 0 {
            put("stars", json!(metadata.stars));
        }
        provided
    }

    fn package(&self) -> Package {
        let mut pkg = Package::oci(self.entry.image.as_str());
        pkg.environment_variables = self.environment_variables();
        pkg.package_arguments = self.package_arguments();
        pkg.runtime_arguments = self.runtime_arguments();
        if !pkg.runtime_arguments.is_empty() {
            pkg.runtime_hint = Some(DOCKER_RUNTIME_HINT.to_string());
        }

        debug!(
            entry = %self.key,
            env = pkg.environment_variables.len(),
            package_args = pkg.package_arguments.len(),
            runtime_args = pkg.runtime_arguments.len(),
            "Built OCI package"
        );
        pkg
    }

    /// Plain env vars first, then one templated variable per secret
    fn environment_variables(&self) -> Vec<KeyValueInput> {
        let plain = self.entry.env.iter().map(|env| {
            let parsed = placeholder::parse(&env.value, &self.config);
            KeyValueInput::new(env.name.as_str(), parsed.value).with_variables(parsed.variables)
        });

        let secrets = self.entry.secrets.iter().map(|secret| {
            let mut variables = Variables::new();
            variables.insert(secret.name.clone(), InputSchema::secret());
            KeyValueInput::new(secret.env.as_str(), format!("{{{}}}", secret.name))
                .with_variables(variables)
        });

        plain.chain(secrets).collect()
    }

    fn package_arguments(&self) -> Vec<Argument> {
        self.entry
            .command
            .iter()
            .map(|token| self.command_argument(token))
            .collect()
    }

    /// `--flag[=value]` is named, anything else is positional and kept verbatim
    fn command_argument(&self, token: &str) -> Argument {
        if !token.starts_with("--") {
            return Argument::positional(token);
        }
        match token.split_once('=') {
            Some((flag, value)) => {
                let parsed = placeholder::parse(value, &self.config);
                Argument::named(flag, parsed.value).with_variables(parsed.variables)
            }
            None => Argument::named(token, ""),
        }
    }

    /// Volume mounts followed by the container user
    fn runtime_arguments(&self) -> Vec<Argument> {
        self.entry
            .volumes
            .iter()
            .map(|volume| self.templated_flag(VOLUME_FLAG, volume))
            .chain(self.entry.user().map(|user| self.templated_flag(USER_FLAG, user)))
            .collect()
    }

    fn templated_flag(&self, flag: &str, raw: &str) -> Argument {
        let parsed = placeholder::parse(raw, &self.config);
        Argument::named(flag, parsed.value).with_variables(parsed.variables)
    }
}

/// Remote transport with headers as an ordered name/value list
fn remote_transport(remote: &RemoteDescriptor) -> Transport {
    Transport {
        transport_type: remote.transport_type.clone(),
        url: Some(remote.url.clone()).filter(|u| !u.is_empty()),
        headers: remote
            .headers
            .iter()
            .map(|(name, value)| KeyValueInput::new(name.as_str(), value.as_str()))
            .collect(),
    }
}

/// Convenience wrapper around [`EntryTransformer`]
pub fn transform_entry(key: &str, entry: &CatalogEntry) -> ServerDescriptor {
    EntryTransformer::new(key, entry).transform()
}
