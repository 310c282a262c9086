//! layered-config: base + environment configuration documents
//!
//! Loads `{name}.yaml` and an optional `{name}.{env}.yaml` override from a
//! config directory, deep-merges them, and answers flat and dotted-path
//! lookups over the merged tree.

pub mod cli;
pub mod config;
pub mod render;
pub mod value;

pub use config::{ConfigError, ConfigStore, ConfigStoreBuilder, DocumentFormat};
pub use value::{InvalidKey, Map, Value, ValueError, ValueKind};
