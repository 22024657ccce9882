//! The three host-facing operations.

use std::path::{Path, PathBuf};

use ide_content::{Position, Range};
use ide_project::IndexEntry;

use crate::error::Result;
use crate::session::Session;

/// Replace the inclusive span `from..=to` of `path` with `replacement`.
///
/// A relative `path` is resolved against the open project.
pub fn replace_in_file(
    session: &Session,
    path: &Path,
    from: Position,
    to: Position,
    replacement: &str,
) -> Result<()> {
    let range = Range::new(from, to)?;
    ide_content::replace_in_file(&session.resolve_file(path), &range, replacement)?;
    Ok(())
}

/// Index corpus for `project_root`, or the open project when `None`.
pub fn list_files_for_index(
    session: &Session,
    project_root: Option<&Path>,
) -> Result<Vec<IndexEntry>> {
    let root = session.resolve_root(project_root)?;
    Ok(session.indexer().list_files_for_index(&root)?)
}

/// First-party sources of `project_root`, or the open project when `None`.
pub fn list_user_source_files(session: &Session, project_root: Option<&Path>) -> Result<Vec<PathBuf>> {
    let root = session.resolve_root(project_root)?;
    Ok(ide_project::list_user_source_files(&root)?)
}
