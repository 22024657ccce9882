//! Closed command set exchanged with the host
//!
//! Messages travel as `{ "tag": ..., "data": ... }` objects:
//!
//! ```json
//! {"tag": "ReplaceInFile", "data": {"path": "src/Main.elm",
//!   "from": {"line": 0, "column": 1}, "to": {"line": 0, "column": 3},
//!   "replacement": "X"}}
//! {"tag": "FileReplaced"}
//! ```

use std::path::PathBuf;

use ide_content::Position;
use ide_project::IndexEntry;
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind, Result};
use crate::operations;
use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tag", content = "data")]
pub enum Command {
    ReplaceInFile {
        path: PathBuf,
        from: Position,
        to: Position,
        replacement: String,
    },
    ListFilesForIndex {
        #[serde(default)]
        project_root: Option<PathBuf>,
    },
    ListUserSourceFiles {
        #[serde(default)]
        project_root: Option<PathBuf>,
    },
    /// Free-form text the host wants recorded in the error log.
    ErrorLogRequested(String),
}

impl Command {
    /// Decode one JSON message from the host.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::InvalidCommand {
            message: e.to_string(),
        })
    }

    /// Decode one raw message. Bytes that are not UTF-8 are an invalid
    /// command like any other malformed input.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| Error::InvalidCommand {
            message: e.to_string(),
        })
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::ReplaceInFile { .. } => "ReplaceInFile",
            Self::ListFilesForIndex { .. } => "ListFilesForIndex",
            Self::ListUserSourceFiles { .. } => "ListUserSourceFiles",
            Self::ErrorLogRequested(_) => "ErrorLogRequested",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tag", content = "data")]
pub enum Response {
    FileReplaced,
    FilesForIndex(Vec<IndexEntry>),
    UserSourceFiles(Vec<PathBuf>),
    Logged,
    Failed { kind: ErrorKind, message: String },
}

impl From<Error> for Response {
    fn from(err: Error) -> Self {
        Self::Failed {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Run `command` against `session`. Failures come back as
/// [`Response::Failed`], never as a panic or a dropped message.
pub fn dispatch(session: &Session, command: Command) -> Response {
    let tag = command.tag();
    tracing::debug!(command = tag, "dispatching command");

    let result = match command {
        Command::ReplaceInFile {
            path,
            from,
            to,
            replacement,
        } => operations::replace_in_file(session, &path, from, to, &replacement)
            .map(|()| Response::FileReplaced),
        Command::ListFilesForIndex { project_root } => {
            operations::list_files_for_index(session, project_root.as_deref())
                .map(Response::FilesForIndex)
        }
        Command::ListUserSourceFiles { project_root } => {
            operations::list_user_source_files(session, project_root.as_deref())
                .map(Response::UserSourceFiles)
        }
        Command::ErrorLogRequested(message) => {
            tracing::error!(target: "host", "{message}");
            Ok(Response::Logged)
        }
    };

    result.unwrap_or_else(|err| {
        tracing::warn!(command = tag, kind = ?err.kind(), error = %err, "command failed");
        Response::from(err)
    })
}
