//! Edit values produced by refactorings and fix actions.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::position::Range;
use crate::replace;

/// One replacement of the text spanned by `range`.
///
/// An edit applies to exactly one file, one time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    pub range: Range,
    pub replacement: String,
}

impl Edit {
    pub fn new(range: Range, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }

    /// Apply this edit to the file at `path`.
    pub fn apply(&self, path: &Path) -> Result<()> {
        replace::replace_in_file(path, &self.range, &self.replacement)
    }

    /// Apply this edit to in-memory text.
    pub fn apply_to_str(&self, content: &str) -> Result<String> {
        replace::replace_in_str(content, &self.range, &self.replacement)
    }
}
