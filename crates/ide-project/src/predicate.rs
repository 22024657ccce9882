//! Manifest-derived ignore predicates.
//!
//! Each predicate is a plain value holding the configuration it captured
//! from the manifest at construction time, so a walk has no hidden state and
//! each rule can be tested on its own.

use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

use ide_fs::IgnorePredicate;

use crate::constants::{MANIFEST_FILENAME, ProjectPath, is_manifest_file, is_source_file};
use crate::dependency::DependencyId;
use crate::manifest::ManifestDescriptor;

type Segments = Vec<OsString>;

/// Normal components of a relative path, or `None` if it escapes its base
/// (`..`, absolute paths, drive prefixes).
fn segments(path: &Path) -> Option<Segments> {
    let mut out = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => out.push(part.to_os_string()),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(out)
}

/// Components of `path` below `base`, or `None` if `path` is not under it.
fn relative_segments(base: &Path, path: &Path) -> Option<Segments> {
    path.strip_prefix(base).ok().and_then(segments)
}

fn dir_name_is_pruned(path: &Path) -> bool {
    path.file_name().is_some_and(ProjectPath::is_pruned_dir_name)
}

/// Lists first-party sources: walks only toward and inside declared source
/// directories, and keeps `.elm` files found inside them.
#[derive(Debug, Clone)]
pub struct UserSourcePredicate {
    root: PathBuf,
    source_dirs: Vec<Segments>,
}

impl UserSourcePredicate {
    pub fn new(root: &Path, manifest: &ManifestDescriptor) -> Self {
        let source_dirs = manifest
            .source_directories
            .iter()
            .filter_map(|dir| {
                let parts = segments(dir);
                if parts.is_none() {
                    tracing::debug!(
                        directory = %dir.display(),
                        "source directory lies outside the project root, not listed"
                    );
                }
                parts
            })
            .collect();
        Self {
            root: root.to_path_buf(),
            source_dirs,
        }
    }

    /// A directory corresponds to a source directory if it is on the way
    /// to one (a leading run of its segments) or lies inside one.
    fn corresponds(&self, rel: &[OsString]) -> bool {
        self.source_dirs
            .iter()
            .any(|dir| dir.starts_with(rel) || rel.starts_with(dir))
    }

    fn inside_source_dir(&self, rel: &[OsString]) -> bool {
        self.source_dirs.iter().any(|dir| rel.starts_with(dir))
    }
}

impl IgnorePredicate for UserSourcePredicate {
    fn should_ignore(&self, path: &Path, is_dir: bool) -> bool {
        let Some(rel) = relative_segments(&self.root, path) else {
            return true;
        };
        if is_dir {
            return dir_name_is_pruned(path) || !self.corresponds(&rel);
        }
        let parent = &rel[..rel.len().saturating_sub(1)];
        !is_source_file(path) || !self.inside_source_dir(parent)
    }
}

/// Project half of the index corpus: every `.elm` file outside build and
/// install directories, plus the manifest at the project root.
#[derive(Debug, Clone)]
pub struct ProjectIndexPredicate {
    root: PathBuf,
}

impl ProjectIndexPredicate {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

impl IgnorePredicate for ProjectIndexPredicate {
    fn should_ignore(&self, path: &Path, is_dir: bool) -> bool {
        if is_dir {
            return dir_name_is_pruned(path);
        }
        let root_manifest = is_manifest_file(path) && path.parent() == Some(self.root.as_path());
        !(is_source_file(path) || root_manifest)
    }
}

/// Dependency half of the index corpus: for every resolved
/// `<name>/<version>`, the `.elm` files under its `src` tree and its own
/// manifest. Everything else in the package store is pruned.
#[derive(Debug, Clone)]
pub struct DependencyCachePredicate {
    root: PathBuf,
    packages: Vec<Segments>,
}

impl DependencyCachePredicate {
    pub fn new(packages_root: &Path, dependencies: &[DependencyId]) -> Self {
        let packages = dependencies
            .iter()
            .filter_map(|dep| segments(&dep.cache_segment()))
            .filter(|parts| !parts.is_empty())
            .collect();
        Self {
            root: packages_root.to_path_buf(),
            packages,
        }
    }

    fn source_dir() -> &'static OsStr {
        OsStr::new(ProjectPath::PackageSource.as_str())
    }

    fn keeps_dir(&self, rel: &[OsString]) -> bool {
        self.packages.iter().any(|package| {
            package.starts_with(rel)
                || (rel.len() > package.len()
                    && rel.starts_with(package)
                    && rel[package.len()] == Self::source_dir())
        })
    }

    fn keeps_file(&self, rel: &[OsString], path: &Path) -> bool {
        self.packages.iter().any(|package| {
            if !rel.starts_with(package) {
                return false;
            }
            let below = &rel[package.len()..];
            match below {
                [name] => name == MANIFEST_FILENAME,
                [first, _, ..] => first == Self::source_dir() && is_source_file(path),
                [] => false,
            }
        })
    }
}

impl IgnorePredicate for DependencyCachePredicate {
    fn should_ignore(&self, path: &Path, is_dir: bool) -> bool {
        let Some(rel) = relative_segments(&self.root, path) else {
            return true;
        };
        if is_dir {
            !self.keeps_dir(&rel)
        } else {
            !self.keeps_file(&rel, path)
        }
    }
}
