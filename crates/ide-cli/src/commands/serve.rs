//! JSON-lines command server
//!
//! Each input line is one [`Command`]; each produces exactly one
//! [`Response`] line, in order. Malformed lines are answered with an
//! `InvalidCommand` failure rather than ending the session.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use ide_core::{Command, Response, Session, dispatch};

use crate::error::Result;

/// Run the serve command
pub fn run_serve(mut session: Session, project: Option<PathBuf>) -> Result<()> {
    if let Some(root) = project {
        session.open_project(root)?;
    }
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    serve(&session, stdin, &mut stdout)
}

/// Answer commands from `input` until it is exhausted.
pub fn serve<R: BufRead, W: Write>(session: &Session, input: R, output: &mut W) -> Result<()> {
    tracing::info!(project = ?session.project_root(), "serving commands");
    let mut handled = 0usize;

    for line in input.split(b'\n') {
        let line = line?;
        let line = line.strip_suffix(b"\r").unwrap_or(&line);
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        let response = match Command::from_slice(line) {
            Ok(command) => dispatch(session, command),
            Err(err) => {
                tracing::warn!(error = %err, "rejected host message");
                Response::from(err)
            }
        };

        serde_json::to_writer(&mut *output, &response)?;
        output.write_all(b"\n")?;
        output.flush()?;
        handled += 1;
    }

    tracing::info!(handled, "input closed, stopping");
    Ok(())
}
