//! Resolved dependency identifiers and their package cache locations.

use std::fmt;
use std::path::PathBuf;

/// A package pinned to one version, e.g. `elm/core@1.0.5`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DependencyId {
    /// Package identifier in `author/project` form.
    pub name: String,
    pub version: String,
}

impl DependencyId {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Relative location inside the package store: `<name>/<version>`.
    ///
    /// The `/` inside `author/project` becomes a directory separator.
    pub fn cache_segment(&self) -> PathBuf {
        self.name
            .split('/')
            .filter(|part| !part.is_empty())
            .chain(std::iter::once(self.version.as_str()))
            .collect()
    }
}

impl fmt::Display for DependencyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}
