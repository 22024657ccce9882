//! Project manifest parsing for `elm.json` files.
//!
//! Only the keys the IDE consumes are read; everything else in the file is
//! ignored. An application manifest looks like:
//!
//! ```json
//! {
//!     "type": "application",
//!     "source-directories": ["src"],
//!     "elm-version": "0.19.1",
//!     "dependencies": {
//!         "direct": { "elm/browser": "1.0.2", "elm/core": "1.0.5" },
//!         "indirect": { "elm/json": "1.1.3" }
//!     },
//!     "test-dependencies": {
//!         "direct": { "elm-explorations/test": "2.1.1" },
//!         "indirect": {}
//!     }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::MANIFEST_FILENAME;
use crate::dependency::DependencyId;
use crate::error::{Error, Result};

/// The parts of `elm.json` the IDE relies on.
///
/// Parsed fresh for every listing or indexing request and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestDescriptor {
    /// Declared source directories, relative to the project root, in
    /// declaration order.
    pub source_directories: Vec<PathBuf>,
    pub direct: BTreeMap<String, String>,
    pub indirect: BTreeMap<String, String>,
    pub test_direct: BTreeMap<String, String>,
    pub test_indirect: BTreeMap<String, String>,
    /// Compiler version, used to locate the package cache.
    pub elm_version: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawManifest {
    source_directories: Vec<PathBuf>,
    #[serde(default)]
    elm_version: Option<String>,
    dependencies: RawDependencies,
    test_dependencies: RawDependencies,
}

#[derive(Deserialize)]
struct RawDependencies {
    direct: BTreeMap<String, String>,
    indirect: BTreeMap<String, String>,
}

impl ManifestDescriptor {
    /// Path of the manifest belonging to `project_root`.
    pub fn path_for(project_root: &Path) -> PathBuf {
        project_root.join(MANIFEST_FILENAME)
    }

    /// Read and parse `<project_root>/elm.json`.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = Self::path_for(project_root);
        let content = ide_fs::io::read_text(&path).map_err(|err| {
            if err.is_not_found() {
                Error::ManifestMissing { path: path.clone() }
            } else {
                Error::Fs(err)
            }
        })?;
        let manifest = Self::parse(&path, &content)?;
        tracing::debug!(
            path = %path.display(),
            source_directories = manifest.source_directories.len(),
            dependencies = manifest.dependencies().len(),
            "parsed project manifest"
        );
        Ok(manifest)
    }

    /// Parse manifest text. `path` is only used for error reporting.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let raw: RawManifest =
            serde_json::from_str(content).map_err(|e| Error::ManifestMalformed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(Self {
            source_directories: raw.source_directories,
            direct: raw.dependencies.direct,
            indirect: raw.dependencies.indirect,
            test_direct: raw.test_dependencies.direct,
            test_indirect: raw.test_dependencies.indirect,
            elm_version: raw.elm_version,
        })
    }

    /// Every dependency from all four groupings, sorted and de-duplicated.
    pub fn dependencies(&self) -> Vec<DependencyId> {
        collect_ids([
            &self.direct,
            &self.indirect,
            &self.test_direct,
            &self.test_indirect,
        ])
    }

    /// Direct and indirect dependencies of the application itself.
    pub fn runtime_dependencies(&self) -> Vec<DependencyId> {
        collect_ids([&self.direct, &self.indirect])
    }

    /// Dependencies needed only by the test suite.
    pub fn test_dependencies(&self) -> Vec<DependencyId> {
        collect_ids([&self.test_direct, &self.test_indirect])
    }
}

fn collect_ids<const N: usize>(groups: [&BTreeMap<String, String>; N]) -> Vec<DependencyId> {
    let mut ids: Vec<DependencyId> = groups
        .into_iter()
        .flat_map(|group| group.iter())
        .map(|(name, version)| DependencyId::new(name, version))
        .collect();
    ids.sort();
    ids.dedup();
    ids
}
