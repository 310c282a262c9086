//! Layered configuration loading and merging
//!
//! A base document `{dir}/{name}.{ext}` is loaded first, then an optional
//! `{dir}/{name}.{env}.{ext}` override is deep-merged on top of it.

pub mod error;
pub mod loader;
pub mod merge;
pub mod store;

pub use error::ConfigError;
pub use loader::{default_config_dir, DocumentFormat, CONFIG_DIR_NAME, LOG_TARGET};
pub use merge::deep_merge;
pub use store::{ConfigStore, ConfigStoreBuilder};
