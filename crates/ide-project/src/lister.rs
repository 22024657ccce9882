//! First-party source listing, the input of a compile step.

use std::path::{Path, PathBuf};

use ide_fs::Walker;

use crate::error::{Error, Result};
use crate::manifest::ManifestDescriptor;
use crate::predicate::UserSourcePredicate;

/// Absolute, symlink-free form of a project root.
///
/// A root that does not exist cannot hold a manifest, so it reports
/// [`Error::ManifestMissing`].
pub(crate) fn canonical_root(project_root: &Path) -> Result<PathBuf> {
    dunce::canonicalize(project_root).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            Error::ManifestMissing {
                path: ManifestDescriptor::path_for(project_root),
            }
        } else {
            Error::Fs(ide_fs::Error::io(project_root, err))
        }
    })
}

/// List the `.elm` files inside the project's declared source directories.
///
/// Build and install directories are never entered. The manifest is read
/// on every call, so the result always reflects the current `elm.json`.
pub fn list_user_source_files(project_root: &Path) -> Result<Vec<PathBuf>> {
    let root = canonical_root(project_root)?;
    let manifest = ManifestDescriptor::load(&root)?;
    let predicate = UserSourcePredicate::new(&root, &manifest);

    let files = Walker::new(&root).ignore(&predicate).walk()?;

    tracing::debug!(root = %root.display(), files = files.len(), "listed user source files");
    Ok(files)
}
