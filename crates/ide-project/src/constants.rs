//! Fixed names of the Elm ecosystem.

use std::ffi::OsStr;
use std::path::Path;

/// Project manifest filename.
pub const MANIFEST_FILENAME: &str = "elm.json";

/// Extension of Elm source files, without the dot.
pub const SOURCE_EXTENSION: &str = "elm";

/// Environment variable overriding the Elm home directory.
pub const ELM_HOME_ENV: &str = "ELM_HOME";

/// Well-known directory names inside projects and the package cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectPath {
    /// `elm-stuff`, the compiler's build cache
    BuildCache,
    /// `node_modules`, where npm-installed tooling lands
    DependencyInstall,
    /// `src`, the source subtree of every cached package
    PackageSource,
    /// `.elm`, the default Elm home under the user's home directory
    DefaultElmHome,
    /// `packages`, the package store under `<elm home>/<elm version>`
    PackageStore,
}

impl ProjectPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BuildCache => "elm-stuff",
            Self::DependencyInstall => "node_modules",
            Self::PackageSource => "src",
            Self::DefaultElmHome => ".elm",
            Self::PackageStore => "packages",
        }
    }

    /// Directories never descended into when walking a project.
    pub const PRUNED: [ProjectPath; 2] = [Self::BuildCache, Self::DependencyInstall];

    /// Whether a directory with this name is always pruned from project walks.
    pub fn is_pruned_dir_name(name: &OsStr) -> bool {
        Self::PRUNED.iter().any(|p| name == p.as_str())
    }
}

impl AsRef<Path> for ProjectPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl std::fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether `path` names an Elm source file.
pub fn is_source_file(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == SOURCE_EXTENSION)
}

/// Whether `path` names a manifest file, wherever it lives.
pub fn is_manifest_file(path: &Path) -> bool {
    path.file_name().is_some_and(|n| n == MANIFEST_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pruned_names() {
        assert!(ProjectPath::is_pruned_dir_name(OsStr::new("elm-stuff")));
        assert!(ProjectPath::is_pruned_dir_name(OsStr::new("node_modules")));
        assert!(!ProjectPath::is_pruned_dir_name(OsStr::new("src")));
    }

    #[test]
    fn source_and_manifest_detection() {
        assert!(is_source_file(Path::new("/p/src/Main.elm")));
        assert!(!is_source_file(Path::new("/p/src/main.js")));
        assert!(!is_source_file(Path::new("/p/src/elm")));
        assert!(is_manifest_file(Path::new("/p/elm.json")));
        assert!(!is_manifest_file(Path::new("/p/package.json")));
    }
}
