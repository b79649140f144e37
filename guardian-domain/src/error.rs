//! Error types for domain persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or saving domains.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Reading or writing a record file failed.
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record file is not valid TOML or has the wrong shape.
    #[error("failed to parse domain record: {0}")]
    Parse(#[from] toml::de::Error),

    /// A record could not be encoded.
    #[error("failed to encode domain record: {0}")]
    Encode(#[from] toml::ser::Error),

    /// A record lists a unique ID that is not a UUID.
    #[error("invalid unique id {value:?}: {source}")]
    InvalidUuid {
        value: String,
        #[source]
        source: uuid::Error,
    },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
