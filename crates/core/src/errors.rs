//! Error types for the note store.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while operating on the note store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Operation target (note file or index entry) does not exist.
    #[error("note not found: {0}")]
    NotFound(String),

    /// An index file exists but cannot be parsed. This is never recovered
    /// locally: treating a corrupt index as empty would overwrite existing
    /// entries on the next save.
    #[error("failed to parse index file {path}: {source}")]
    CorruptIndex {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An index could not be serialized for writing.
    #[error("failed to encode index file {path}: {source}")]
    EncodeIndex {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Filesystem failure with path context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
