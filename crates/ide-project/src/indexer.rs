//! Assembly of the search/autocomplete corpus for a project.
//!
//! The corpus is the project's own `.elm` files and root manifest, followed
//! by the `src` trees and manifests of every resolved dependency in the
//! package cache. Any manifest or cache problem aborts the whole request;
//! a partial corpus is never returned.

use std::path::{Path, PathBuf};

use ide_fs::Walker;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cache::DependencyCache;
use crate::error::{Error, Result};
use crate::lister::canonical_root;
use crate::manifest::ManifestDescriptor;
use crate::predicate::{DependencyCachePredicate, ProjectIndexPredicate};

/// A file included in the index, with its full text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub path: PathBuf,
    pub content: String,
}

/// Builds index corpora against one package cache.
#[derive(Debug, Clone)]
pub struct ProjectIndexer {
    cache: DependencyCache,
    parallel_reads: bool,
}

impl Default for ProjectIndexer {
    fn default() -> Self {
        Self::new(DependencyCache::default())
    }
}

impl ProjectIndexer {
    pub fn new(cache: DependencyCache) -> Self {
        Self {
            cache,
            parallel_reads: true,
        }
    }

    /// Read file contents on the rayon pool (default: true).
    pub fn parallel_reads(mut self, parallel: bool) -> Self {
        self.parallel_reads = parallel;
        self
    }

    /// Produce the ordered `(path, content)` corpus for `project_root`.
    pub fn list_files_for_index(&self, project_root: &Path) -> Result<Vec<IndexEntry>> {
        let root = canonical_root(project_root)?;
        let manifest = ManifestDescriptor::load(&root)?;
        let dependencies = manifest.dependencies();

        let packages_root = self.cache.packages_root(&manifest, &root)?;
        if !packages_root.is_dir() {
            return Err(Error::DependencyCacheUnavailable {
                path: packages_root,
            });
        }
        for dependency in &dependencies {
            let package_dir = packages_root.join(dependency.cache_segment());
            if !package_dir.is_dir() {
                tracing::warn!(%dependency, "dependency missing from package cache");
                return Err(Error::DependencyCacheUnavailable { path: package_dir });
            }
        }

        let project_predicate = ProjectIndexPredicate::new(&root);
        let cache_predicate = DependencyCachePredicate::new(&packages_root, &dependencies);

        let (project_files, dependency_files) = rayon::join(
            || Walker::new(&root).ignore(&project_predicate).walk(),
            || Walker::new(&packages_root).ignore(&cache_predicate).walk(),
        );
        let project_files = project_files?;
        let dependency_files = dependency_files.map_err(|err| {
            tracing::debug!(error = %err, "package cache walk failed");
            Error::DependencyCacheUnavailable {
                path: packages_root.clone(),
            }
        })?;

        tracing::debug!(
            project_files = project_files.len(),
            dependency_files = dependency_files.len(),
            dependencies = dependencies.len(),
            "collected index paths"
        );

        let paths: Vec<PathBuf> = project_files.into_iter().chain(dependency_files).collect();
        self.load_contents(paths)
    }

    /// Read every path, keeping the input order whatever order reads finish in.
    fn load_contents(&self, paths: Vec<PathBuf>) -> Result<Vec<IndexEntry>> {
        let read = |path: PathBuf| -> Result<IndexEntry> {
            let content = ide_fs::io::read_text_lossy(&path)?;
            Ok(IndexEntry { path, content })
        };

        if self.parallel_reads {
            paths.into_par_iter().map(read).collect()
        } else {
            paths.into_iter().map(read).collect()
        }
    }
}

/// Build the corpus using the default package cache discovery.
pub fn list_files_for_index(project_root: &Path) -> Result<Vec<IndexEntry>> {
    ProjectIndexer::default().list_files_for_index(project_root)
}
