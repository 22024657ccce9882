//! Text I/O with atomic, locked writes

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, Result};

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename strategy to prevent partial writes. The
/// temp file lives next to the target so the rename stays on one
/// filesystem. Permissions of an existing target are carried over.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let temp_path = temp_path_for(path);
    let result = write_temp_then_rename(path, &temp_path, content);
    if result.is_err() {
        // Best-effort: the temp file may not exist if open() failed.
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn temp_path_for(path: &Path) -> PathBuf {
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    path.with_file_name(temp_name)
}

fn write_temp_then_rename(path: &Path, temp_path: &Path, content: &[u8]) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: path.to_path_buf(),
        })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file.sync_all().map_err(|e| Error::io(temp_path, e))?;

    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(temp_path, metadata.permissions())
            .map_err(|e| Error::io(temp_path, e))?;
    }

    FileExt::unlock(&temp_file).map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;
    drop(temp_file);

    fs::rename(temp_path, path).map_err(|e| Error::io(path, e))?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file atomically");
    Ok(())
}

/// Open a file for reading.
pub fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| Error::io(path, e))
}

/// Read text content from a file. Fails on invalid UTF-8.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Read text content from a file, replacing invalid UTF-8 sequences.
pub fn read_text_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(path = %path.display(), "file is not valid UTF-8, decoding lossily");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    })
}

/// Write text content to a file atomically.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
