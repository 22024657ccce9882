//! Index and source listing commands

use std::io::{self, Write};
use std::path::Path;

use ide_core::Session;

use crate::error::Result;

/// Run the index command
///
/// Plain output is one path per line; `--json` emits the full entries,
/// contents included.
pub fn run_index(session: &Session, root: &Path, json: bool) -> Result<()> {
    let entries = ide_core::list_files_for_index(session, Some(root))?;
    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &entries)?;
        writeln!(out)?;
    } else {
        for entry in &entries {
            writeln!(out, "{}", entry.path.display())?;
        }
    }
    Ok(())
}

/// Run the sources command
pub fn run_sources(session: &Session, root: &Path, json: bool) -> Result<()> {
    let files = ide_core::list_user_source_files(session, Some(root))?;
    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &files)?;
        writeln!(out)?;
    } else {
        for file in &files {
            writeln!(out, "{}", file.display())?;
        }
    }
    Ok(())
}
