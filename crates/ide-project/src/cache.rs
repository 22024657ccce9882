//! Location of the per-user Elm package cache.
//!
//! The compiler stores downloaded packages under
//! `<elm home>/<elm version>/packages/<author>/<project>/<version>/`, where
//! the Elm home is `$ELM_HOME` or `~/.elm`.

use std::path::{Path, PathBuf};

use crate::constants::{ELM_HOME_ENV, ProjectPath};
use crate::error::{Error, Result};
use crate::manifest::ManifestDescriptor;

/// How to find the package store for a project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DependencyCache {
    /// `$ELM_HOME`, else `~/.elm`, then `<elm-version>/packages`.
    #[default]
    Discover,
    /// A known Elm home; the version directory still comes from the manifest.
    ElmHome(PathBuf),
    /// A fixed package store, used as-is.
    PackagesRoot(PathBuf),
}

impl DependencyCache {
    /// Resolve the package store root for `manifest`.
    ///
    /// `project_root` is only used to name the manifest in errors.
    pub fn packages_root(
        &self,
        manifest: &ManifestDescriptor,
        project_root: &Path,
    ) -> Result<PathBuf> {
        let elm_home = match self {
            Self::PackagesRoot(root) => return Ok(root.clone()),
            Self::ElmHome(home) => home.clone(),
            Self::Discover => default_elm_home().ok_or_else(|| Error::DependencyCacheUnavailable {
                path: PathBuf::from("~").join(ProjectPath::DefaultElmHome),
            })?,
        };

        let version = manifest
            .elm_version
            .as_deref()
            .ok_or_else(|| Error::ManifestMalformed {
                path: ManifestDescriptor::path_for(project_root),
                message: "missing field `elm-version`".into(),
            })?;

        Ok(elm_home.join(version).join(ProjectPath::PackageStore))
    }
}

/// `$ELM_HOME` if set and non-empty, else `~/.elm`.
pub fn default_elm_home() -> Option<PathBuf> {
    std::env::var_os(ELM_HOME_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(ProjectPath::DefaultElmHome)))
}
