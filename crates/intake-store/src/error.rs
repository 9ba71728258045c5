use std::path::PathBuf;

use thiserror::Error;

use intake_core::error::CoreError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("assessment type not found: {0}")]
    TypeNotFound(String),

    #[error("response not found: {0}")]
    ResponseNotFound(String),

    #[error("{action} requires the admin role")]
    Forbidden { action: &'static str },

    /// Invariant violation in identifier assignment. Not retryable —
    /// surfacing it means the generator is broken.
    #[error("identifier already in use: {0}")]
    DuplicateId(String),

    #[error("invalid assessment type: {0}")]
    InvalidType(#[from] CoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
