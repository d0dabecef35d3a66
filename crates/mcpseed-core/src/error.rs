//! Error types for the seed pipeline boundary.
//!
//! Only loading the catalog and encoding the seed can fail. The transformation
//! engine itself is infallible: malformed templates degrade to fewer declared
//! variables instead of aborting the batch.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while obtaining the catalog or persisting the seed.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The catalog command could not be spawned or exited unsuccessfully.
    #[error("catalog command `{command}` failed: {message}")]
    CatalogCommand {
        /// Command line that was executed.
        command: String,
        /// Exit status or spawn failure, plus captured stderr.
        message: String,
    },

    /// The catalog document is not valid catalog JSON.
    #[error("failed to parse catalog JSON: {source}")]
    CatalogDecode {
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// The server descriptors could not be encoded.
    #[error("failed to encode seed JSON: {source}")]
    SeedEncode {
        /// Underlying encode error.
        #[source]
        source: serde_json::Error,
    },

    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl SeedError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SeedError>;
