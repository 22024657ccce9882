//! User configuration for the IDE support layer
//!
//! Read from `<config dir>/elm-ide/config.toml` by default, or from any
//! TOML, JSON or YAML file given explicitly:
//!
//! ```toml
//! elm_home = "/opt/elm-home"
//! parallel_reads = false
//! ```

use std::path::{Path, PathBuf};

use ide_fs::ConfigStore;
use ide_project::{DependencyCache, ProjectIndexer};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Directory under the platform config dir holding IDE settings.
pub const CONFIG_DIR: &str = "elm-ide";

/// Settings file inside [`CONFIG_DIR`].
pub const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdeConfig {
    /// Package store used as-is. Takes precedence over `elm_home`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependency_cache_root: Option<PathBuf>,

    /// Elm home to use instead of `$ELM_HOME` or `~/.elm`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elm_home: Option<PathBuf>,

    /// Read index file contents concurrently.
    pub parallel_reads: bool,
}

impl Default for IdeConfig {
    fn default() -> Self {
        Self {
            dependency_cache_root: None,
            elm_home: None,
            parallel_reads: true,
        }
    }
}

impl IdeConfig {
    /// Load settings from `path`; the format follows the extension.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(ConfigStore::new().load(path)?)
    }

    /// Load settings from `path`, or defaults if the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        Ok(ConfigStore::new().load_or_default(path)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        Ok(ConfigStore::new().save(path, self)?)
    }

    /// `<config dir>/elm-ide/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
    }

    /// Settings from the default location, or defaults.
    pub fn discover() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_or_default(&path),
            None => {
                tracing::debug!("no platform config directory, using default settings");
                Ok(Self::default())
            }
        }
    }

    pub fn dependency_cache(&self) -> DependencyCache {
        match (&self.dependency_cache_root, &self.elm_home) {
            (Some(root), _) => DependencyCache::PackagesRoot(root.clone()),
            (None, Some(home)) => DependencyCache::ElmHome(home.clone()),
            (None, None) => DependencyCache::Discover,
        }
    }

    /// An indexer configured from these settings.
    pub fn indexer(&self) -> ProjectIndexer {
        ProjectIndexer::new(self.dependency_cache()).parallel_reads(self.parallel_reads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_root_takes_precedence_over_elm_home() {
        let config = IdeConfig {
            dependency_cache_root: Some(PathBuf::from("/cache")),
            elm_home: Some(PathBuf::from("/home/u/.elm")),
            parallel_reads: true,
        };
        assert_eq!(
            config.dependency_cache(),
            DependencyCache::PackagesRoot(PathBuf::from("/cache"))
        );
    }

    #[test]
    fn defaults_discover_the_cache() {
        let config = IdeConfig::default();
        assert_eq!(config.dependency_cache(), DependencyCache::Discover);
        assert!(config.parallel_reads);
    }
}
