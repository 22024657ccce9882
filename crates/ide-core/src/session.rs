//! Per-host state shared by every operation

use std::path::{Path, PathBuf};

use ide_project::{ManifestDescriptor, ProjectIndexer};

use crate::config::IdeConfig;
use crate::error::{Error, Result};

/// Configuration plus the project currently open in the host, if any.
///
/// Commands that omit a project root run against the open project.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: IdeConfig,
    project_root: Option<PathBuf>,
}

impl Session {
    pub fn new(config: IdeConfig) -> Self {
        Self {
            config,
            project_root: None,
        }
    }

    /// Builder form of [`open_project`](Self::open_project) without the
    /// manifest check.
    pub fn with_project(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = Some(root.into());
        self
    }

    /// Make `root` the open project. Fails if it has no readable manifest.
    pub fn open_project(&mut self, root: impl Into<PathBuf>) -> Result<()> {
        let root = root.into();
        ManifestDescriptor::load(&root)?;
        tracing::info!(root = %root.display(), "opened project");
        self.project_root = Some(root);
        Ok(())
    }

    pub fn close_project(&mut self) {
        self.project_root = None;
    }

    pub fn project_root(&self) -> Option<&Path> {
        self.project_root.as_deref()
    }

    pub fn config(&self) -> &IdeConfig {
        &self.config
    }

    pub fn indexer(&self) -> ProjectIndexer {
        self.config.indexer()
    }

    /// The explicit root if given, else the open project.
    pub fn resolve_root(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        explicit
            .or(self.project_root())
            .map(Path::to_path_buf)
            .ok_or(Error::NoActiveProject)
    }

    /// Relative file paths are taken from the open project's root.
    pub fn resolve_file(&self, path: &Path) -> PathBuf {
        match self.project_root() {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_root_wins() {
        let session = Session::default().with_project("/open");
        let root = session.resolve_root(Some(Path::new("/other"))).unwrap();
        assert_eq!(root, PathBuf::from("/other"));
    }

    #[test]
    fn falls_back_to_open_project() {
        let session = Session::default().with_project("/open");
        assert_eq!(session.resolve_root(None).unwrap(), PathBuf::from("/open"));
    }

    #[test]
    fn no_project_no_root() {
        let err = Session::default().resolve_root(None).unwrap_err();
        assert!(matches!(err, Error::NoActiveProject));
    }

    #[test]
    fn relative_files_resolve_against_project() {
        let session = Session::default().with_project("/open");
        assert_eq!(
            session.resolve_file(Path::new("src/Main.elm")),
            PathBuf::from("/open/src/Main.elm")
        );
        assert_eq!(
            session.resolve_file(Path::new("/abs/Main.elm")),
            PathBuf::from("/abs/Main.elm")
        );
    }
}
