//! Format-agnostic configuration loading and saving

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Result, io};

/// Serialization format of a configuration file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Detect the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(Error::UnsupportedFormat { extension }),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

/// Loads and saves serde types, picking the format from the file extension.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let format = ConfigFormat::from_path(path)?;
        let content = io::read_text(path)?;

        let parse_error = |message: String| Error::ConfigParse {
            path: path.to_path_buf(),
            format: format.name().into(),
            message,
        };

        match format {
            ConfigFormat::Toml => toml::from_str(&content).map_err(|e| parse_error(e.to_string())),
            ConfigFormat::Json => {
                serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))
            }
            ConfigFormat::Yaml => {
                serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string()))
            }
        }
    }

    /// Load configuration, falling back to `T::default()` when the file is absent.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, path: &Path) -> Result<T> {
        match self.load(path) {
            Err(err) if err.is_not_found() => {
                tracing::debug!(path = %path.display(), "config file absent, using defaults");
                Ok(T::default())
            }
            other => other,
        }
    }

    /// Save configuration to a file atomically.
    pub fn save<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let format = ConfigFormat::from_path(path)?;

        let serialize_error = |message: String| Error::ConfigSerialize {
            path: path.to_path_buf(),
            format: format.name().into(),
            message,
        };

        let content = match format {
            ConfigFormat::Toml => {
                toml::to_string_pretty(value).map_err(|e| serialize_error(e.to_string()))?
            }
            ConfigFormat::Json => {
                serde_json::to_string_pretty(value).map_err(|e| serialize_error(e.to_string()))?
            }
            ConfigFormat::Yaml => {
                serde_yaml::to_string(value).map_err(|e| serialize_error(e.to_string()))?
            }
        };

        io::write_text(path, &content)
    }
}
