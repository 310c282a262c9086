//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

use super::loader::DocumentFormat;
use crate::value::{ValueError, ValueKind};

/// Errors raised while building or querying a [`super::ConfigStore`].
///
/// Missing documents are not errors; they are logged and treated as empty.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base document name was empty.
    #[error("Config name must not be empty")]
    EmptyName,

    /// Failed to create the configuration directory.
    #[error("Failed to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A document exists but could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A document has malformed syntax.
    #[error("Invalid {format} syntax in {path}: {message}")]
    Parse {
        path: PathBuf,
        format: DocumentFormat,
        message: String,
    },

    /// The top level of a document is not a mapping.
    #[error("Config file {path} must contain a mapping at the top level, found {found}")]
    NotAMapping { path: PathBuf, found: ValueKind },

    /// A mapping key that cannot be represented as a string.
    #[error("Invalid key in config file {path}: {key}")]
    InvalidKey { path: PathBuf, key: String },

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Config value at '{key}' has the wrong kind: expected {expected}, found {found}")]
    WrongKind {
        key: String,
        expected: ValueKind,
        found: ValueKind,
    },
}

impl ConfigError {
    /// Attach a key to a [`ValueError`] raised by a typed accessor.
    pub(crate) fn from_value_error(key: &str, err: ValueError) -> Self {
        match err {
            ValueError::WrongKind { expected, found } => {
                ConfigError::WrongKind { key: key.to_string(), expected, found }
            }
        }
    }
}
