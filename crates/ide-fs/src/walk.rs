//! Predicate-driven recursive directory walking.
//!
//! A [`Walker`] collects every regular file below a root, consulting a set of
//! [`IgnorePredicate`]s for each entry. A directory rejected by any predicate
//! is pruned together with its subtree and is never opened, so permission
//! problems or symlink cycles inside it cannot surface. A rejected file is
//! simply left out of the result.
//!
//! Traversal is best-effort: a directory that survives the predicates but
//! cannot be read is logged and treated as empty. Results come back in
//! depth-first order with siblings sorted by file name, which keeps repeated
//! walks over an unchanged tree identical.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{Error, Result};

/// Per-entry decision controlling pruning and filtering during a walk.
///
/// Returning `true` means "do not descend" for a directory and "do not
/// include" for a file.
pub trait IgnorePredicate: Send + Sync {
    fn should_ignore(&self, path: &Path, is_dir: bool) -> bool;
}

impl<F> IgnorePredicate for F
where
    F: Fn(&Path, bool) -> bool + Send + Sync,
{
    fn should_ignore(&self, path: &Path, is_dir: bool) -> bool {
        self(path, is_dir)
    }
}

/// Recursive file walker with pluggable ignore predicates.
pub struct Walker<'a> {
    root: PathBuf,
    predicates: Vec<&'a dyn IgnorePredicate>,
    follow_links: bool,
}

impl<'a> Walker<'a> {
    /// Create a walker rooted at `root` with no predicates.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            predicates: Vec::new(),
            follow_links: true,
        }
    }

    /// Add an ignore predicate. An entry is skipped if any predicate says so.
    pub fn ignore(mut self, predicate: &'a dyn IgnorePredicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Set whether to follow symbolic links (default: true).
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        self.predicates
            .iter()
            .any(|predicate| predicate.should_ignore(path, is_dir))
    }

    /// Walk the tree and return the surviving regular-file paths.
    ///
    /// The root itself is never tested against the predicates. Fails only if
    /// the root cannot be inspected or is not a directory.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let metadata = fs::metadata(&self.root).map_err(|e| Error::io(&self.root, e))?;
        if !metadata.is_dir() {
            return Err(Error::NotADirectory {
                path: self.root.clone(),
            });
        }

        let entries = WalkDir::new(&self.root)
            .follow_links(self.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0 || !self.is_ignored(entry.path(), entry.file_type().is_dir())
            });

        let mut files = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!(
                        path = ?err.path(),
                        error = %err,
                        "skipping unreadable entry during walk"
                    );
                }
            }
        }

        tracing::debug!(root = %self.root.display(), files = files.len(), "walk finished");
        Ok(files)
    }
}

impl std::fmt::Debug for Walker<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Walker")
            .field("root", &self.root)
            .field("predicates", &self.predicates.len())
            .field("follow_links", &self.follow_links)
            .finish()
    }
}
