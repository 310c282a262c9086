//! Config document discovery and loading

use super::error::ConfigError;
use crate::value::{InvalidKey, Map, Value};
use clap::ValueEnum;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Directory holding config documents, next to the running executable.
pub const CONFIG_DIR_NAME: &str = "configs";

/// Log target shared by every diagnostic the loader and store emit.
pub const LOG_TARGET: &str = "config";

/// Syntax of the base and override documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DocumentFormat {
    #[default]
    Yaml,
    Toml,
    Json,
}

impl DocumentFormat {
    pub fn extension(self) -> &'static str {
        match self {
            DocumentFormat::Yaml => "yaml",
            DocumentFormat::Toml => "toml",
            DocumentFormat::Json => "json",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DocumentFormat::Yaml => "YAML",
            DocumentFormat::Toml => "TOML",
            DocumentFormat::Json => "JSON",
        })
    }
}

/// `configs/` beside the current executable, or relative to the working
/// directory when the executable path is unavailable.
pub fn default_config_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(CONFIG_DIR_NAME)))
        .unwrap_or_else(|| PathBuf::from(CONFIG_DIR_NAME))
}

pub fn ensure_config_dir(dir: &Path) -> Result<(), ConfigError> {
    fs::create_dir_all(dir)
        .map_err(|source| ConfigError::CreateDir { path: dir.to_path_buf(), source })
}

/// `{dir}/{name}.{ext}` or `{dir}/{name}.{environment}.{ext}`.
pub fn document_path(
    dir: &Path,
    name: &str,
    environment: Option<&str>,
    format: DocumentFormat,
) -> PathBuf {
    let file_name = match environment {
        Some(env) => format!("{}.{}.{}", name, env, format.extension()),
        None => format!("{}.{}", name, format.extension()),
    };
    dir.join(file_name)
}

/// Read and parse one document.
///
/// Returns `Ok(None)` when the file does not exist. An empty or null
/// document yields an empty mapping.
pub fn load_document(path: &Path, format: DocumentFormat) -> Result<Option<Map>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(ConfigError::Read { path: path.to_path_buf(), source }),
    };

    parse_document(&content, path, format).map(Some)
}

/// Load one layer, logging whether it was found.
pub(crate) fn load_layer(
    path: &Path,
    format: DocumentFormat,
    label: &str,
) -> Result<Option<Map>, ConfigError> {
    let loaded = load_document(path, format)?;
    match &loaded {
        Some(map) => tracing::info!(
            target: LOG_TARGET,
            keys = map.len(),
            "Loaded {} from {}",
            label,
            path.display()
        ),
        None => tracing::warn!(target: LOG_TARGET, "{} file not found: {}", label, path.display()),
    }
    Ok(loaded)
}

pub fn parse_document(
    content: &str,
    path: &Path,
    format: DocumentFormat,
) -> Result<Map, ConfigError> {
    let parse_error =
        |message: String| ConfigError::Parse { path: path.to_path_buf(), format, message };

    if content.trim().is_empty() {
        return Ok(Map::new());
    }

    let value = match format {
        DocumentFormat::Yaml => {
            let mut raw: serde_yaml::Value =
                serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
            // `<<: *anchor` merge keys
            raw.apply_merge().map_err(|e| parse_error(e.to_string()))?;
            Value::from_yaml(raw).map_err(|InvalidKey(key)| ConfigError::InvalidKey {
                path: path.to_path_buf(),
                key,
            })?
        }
        DocumentFormat::Toml => {
            let raw: toml::Value =
                toml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
            Value::from_toml(raw)
        }
        DocumentFormat::Json => {
            let raw: serde_json::Value =
                serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;
            Value::from_json(raw)
        }
    };

    match value {
        Value::Null => Ok(Map::new()),
        Value::Map(map) => Ok(map),
        other => Err(ConfigError::NotAMapping { path: path.to_path_buf(), found: other.kind() }),
    }
}
