//! Errors surfaced by the page generator.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a page from being written.
#[derive(Debug, Error)]
pub enum PageGenError {
    /// An explicitly requested config file could not be read
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// A config file is not valid TOML for [`crate::PageGenConfig`]
    #[error("failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        /// Config file path
        path: PathBuf,
        /// Parser diagnostic
        #[source]
        source: toml::de::Error,
    },

    /// The rendered page could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Destination (`-` for stdout)
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The feature table could not be serialized
    #[error("failed to serialize feature table: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result alias for generator operations.
pub type Result<T> = std::result::Result<T, PageGenError>;
