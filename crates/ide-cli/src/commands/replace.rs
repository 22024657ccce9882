//! The replace command

use std::path::Path;

use colored::Colorize;
use ide_content::Position;
use ide_core::Session;

use crate::error::Result;

/// Run the replace command
pub fn run_replace(
    session: &Session,
    file: &Path,
    from: Position,
    to: Position,
    text: &str,
) -> Result<()> {
    ide_core::replace_in_file(session, file, from, to, text)?;
    println!(
        "{} Replaced {}..={} in {}",
        "OK".green().bold(),
        from,
        to,
        file.display().to_string().cyan()
    );
    Ok(())
}
