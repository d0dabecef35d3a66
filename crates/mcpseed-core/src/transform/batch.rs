//! Whole-catalog conversion.

use tracing::{debug, info};

use super::entry::EntryTransformer;
use crate::catalog::DockerCatalog;
use crate::registry::ServerDescriptor;

/// Converts every eligible catalog entry, in entry-name order.
///
/// Remote entries are skipped before transformation unless explicitly opted
/// in with [`BatchBuilder::include_remote`].
#[derive(Debug, Clone, Default)]
pub struct BatchBuilder {
    include_remote: bool,
}

impl BatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Let remote entries through to the transformer's remote branch
    pub fn include_remote(mut self, include: bool) -> Self {
        self.include_remote = include;
        self
    }

    pub fn build(&self, catalog: &DockerCatalog) -> Vec<ServerDescriptor> {
        let mut servers = Vec::with_capacity(catalog.len());
        let mut skipped = 0usize;

        for (name, entry) in &catalog.registry {
            if entry.is_remote() && !self.include_remote {
                debug!(entry = %name, "Skipping remote entry");
                skipped += 1;
                continue;
            }
            servers.push(EntryTransformer::new(name, entry).transform());
        }

        info!(
            catalog = %catalog.name,
            transformed = servers.len(),
            skipped,
            "Built registry seed batch"
        );
        servers
    }
}
