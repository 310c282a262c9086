//! Layered configuration store

use super::error::ConfigError;
use super::loader::{self, DocumentFormat, LOG_TARGET};
use super::merge::deep_merge;
use crate::value::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::Dispatch;

/// Merged view of a base document and an optional environment override.
///
/// Built once, never reloaded. All lookups borrow from the store.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    name: String,
    environment: Option<String>,
    config_dir: PathBuf,
    format: DocumentFormat,
    data: Map,
}

/// Builder for [`ConfigStore`].
pub struct ConfigStoreBuilder {
    name: String,
    environment: Option<String>,
    config_dir: Option<PathBuf>,
    format: DocumentFormat,
    logger: Option<Dispatch>,
}

impl ConfigStoreBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            environment: None,
            config_dir: None,
            format: DocumentFormat::default(),
            logger: None,
        }
    }

    /// Environment override to layer on top of the base document.
    /// An empty string means no override.
    pub fn environment(mut self, environment: Option<impl Into<String>>) -> Self {
        self.environment = environment.map(Into::into).filter(|env| !env.is_empty());
        self
    }

    pub fn config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    pub fn format(mut self, format: DocumentFormat) -> Self {
        self.format = format;
        self
    }

    /// Route construction diagnostics through `dispatch`. Without one,
    /// diagnostics are discarded.
    pub fn logger(mut self, dispatch: Dispatch) -> Self {
        self.logger = Some(dispatch);
        self
    }

    pub fn build(self) -> Result<ConfigStore, ConfigError> {
        let dispatch = self.logger.clone().unwrap_or_else(Dispatch::none);
        tracing::dispatcher::with_default(&dispatch, || self.load())
    }

    fn load(self) -> Result<ConfigStore, ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::EmptyName);
        }

        let config_dir = self.config_dir.unwrap_or_else(loader::default_config_dir);
        loader::ensure_config_dir(&config_dir)?;

        let base_path = loader::document_path(&config_dir, &self.name, None, self.format);
        let mut data = loader::load_layer(&base_path, self.format, "config")?.unwrap_or_default();

        if let Some(env) = &self.environment {
            let env_path = loader::document_path(&config_dir, &self.name, Some(env), self.format);
            let overlay = loader::load_layer(&env_path, self.format, "environment config")?;
            if let Some(overlay) = overlay {
                deep_merge(&mut data, overlay);
            }
        }

        match &self.environment {
            Some(env) => tracing::info!(
                target: LOG_TARGET,
                "Loaded configuration: {} with env: {}",
                self.name,
                env
            ),
            None => tracing::info!(target: LOG_TARGET, "Loaded configuration: {}", self.name),
        }

        Ok(ConfigStore {
            name: self.name,
            environment: self.environment,
            config_dir,
            format: self.format,
            data,
        })
    }
}

impl ConfigStore {
    pub fn builder(name: impl Into<String>) -> ConfigStoreBuilder {
        ConfigStoreBuilder::new(name)
    }

    /// Load `name` from the default config directory, with an optional
    /// environment override.
    pub fn new(name: &str, environment: Option<&str>) -> Result<Self, ConfigError> {
        Self::builder(name).environment(environment).build()
    }

    /// Wrap an already merged mapping.
    pub fn from_map(name: impl Into<String>, environment: Option<String>, data: Map) -> Self {
        Self {
            name: name.into(),
            environment,
            config_dir: PathBuf::new(),
            format: DocumentFormat::default(),
            data,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    /// Top-level lookup. Dots are not interpreted.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.get(key).unwrap_or(default)
    }

    /// Walk a dot-separated path from the root. Any miss, including a
    /// non-mapping intermediate or an empty path, yields `None`.
    pub fn get_path(&self, key_path: &str) -> Option<&Value> {
        if key_path.is_empty() {
            return None;
        }

        let mut segments = key_path.split('.');
        let first = segments.next()?;
        let mut current = self.data.get(first);
        for segment in segments {
            current = match current {
                Some(Value::Map(map)) => map.get(segment),
                _ => None,
            };
        }

        if current.is_none() {
            tracing::debug!(target: LOG_TARGET, "Key path not found: {}", key_path);
        }
        current
    }

    pub fn get_path_or<'a>(&'a self, key_path: &str, default: &'a Value) -> &'a Value {
        self.get_path(key_path).unwrap_or(default)
    }

    /// Strict lookup.
    ///
    /// Dotted keys resolve through [`ConfigStore::get_path`] and treat a
    /// `null` leaf as missing. Plain keys must exist at the top level; a
    /// stored `null` is returned as is.
    pub fn require(&self, key: &str) -> Result<&Value, ConfigError> {
        let found = if key.contains('.') {
            self.get_path(key).filter(|value| !value.is_null())
        } else {
            self.data.get(key)
        };
        found.ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))
    }

    /// Whether `key` exists, dotted or not. A `null` value still counts.
    pub fn contains(&self, key: &str) -> bool {
        if key.contains('.') {
            self.get_path(key).is_some()
        } else {
            self.data.contains_key(key)
        }
    }

    pub fn get_str(&self, key_path: &str) -> Result<&str, ConfigError> {
        self.typed(key_path, Value::as_str)
    }

    pub fn get_i64(&self, key_path: &str) -> Result<i64, ConfigError> {
        self.typed(key_path, Value::as_i64)
    }

    pub fn get_f64(&self, key_path: &str) -> Result<f64, ConfigError> {
        self.typed(key_path, Value::as_f64)
    }

    pub fn get_bool(&self, key_path: &str) -> Result<bool, ConfigError> {
        self.typed(key_path, Value::as_bool)
    }

    fn typed<'a, T>(
        &'a self,
        key_path: &str,
        accessor: impl FnOnce(&'a Value) -> Result<T, crate::value::ValueError>,
    ) -> Result<T, ConfigError> {
        let value =
            self.get_path(key_path).ok_or_else(|| ConfigError::KeyNotFound(key_path.to_string()))?;
        accessor(value).map_err(|err| ConfigError::from_value_error(key_path, err))
    }

    /// Owned copy of the top-level mapping.
    pub fn all(&self) -> Map {
        self.data.clone()
    }

    pub(crate) fn data(&self) -> &Map {
        &self.data
    }
}
