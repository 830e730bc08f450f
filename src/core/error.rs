//! Centralised error types used across the crate.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::core::record::ParseRecordError;

/// Precise parameter faults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("parameters missing field `{0}`")]
    MissingField(&'static str),
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: ParseRecordError,
    },
    #[error("failed to serialize chart: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
