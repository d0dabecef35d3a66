//! Lookup of config property schemas by dotted `<block>.<property>` key.

use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::catalog::ConfigBlock;

/// Property schemas of one entry's config blocks, keyed by `<block>.<property>`
#[derive(Debug, Clone, Default)]
pub struct ConfigIndex {
    properties: HashMap<String, Map<String, Value>>,
}

impl ConfigIndex {
    /// Index every object-valued property of every block.
    ///
    /// Non-object property values are skipped. When two blocks produce the same
    /// key the later block wins.
    pub fn build(blocks: &[ConfigBlock]) -> Self {
        let mut properties = HashMap::new();

        for block in blocks {
            for (key, value) in &block.properties {
                let Value::Object(schema) = value else {
                    tracing::debug!(
                        block = %block.name,
                        property = %key,
                        "Skipping non-object config property"
                    );
                    continue;
                };
                let full_key = format!("{}.{}", block.name, key);
                if properties.insert(full_key, schema.clone()).is_some() {
                    tracing::warn!(
                        block = %block.name,
                        property = %key,
                        "Config property redefined, keeping the later definition"
                    );
                }
            }
        }

        Self { properties }
    }

    /// Raw schema attributes for a dotted key
    pub fn get(&self, key: &str) -> Option<&Map<String, Value>> {
        self.properties.get(key)
    }

    /// The property's description, when it is a non-empty string
    pub fn description(&self, key: &str) -> Option<&str> {
        self.get(key)?
            .get("description")
            .and_then(Value::as_str)
            .filter(|d| !d.is_empty())
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
