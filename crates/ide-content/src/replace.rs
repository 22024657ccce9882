//! The range-replace engine.
//!
//! A file is consumed as an ordered sequence of lines, each read together
//! with its terminator (`\n`, `\r\n`, or nothing on a final unterminated
//! line). Given an inclusive [`Range`] and a replacement:
//!
//! - lines before `from.line` and after `to.line` are copied verbatim;
//! - the `from` line keeps its first `from.column` characters, followed by
//!   the replacement;
//! - the `to` line keeps everything after column `to.column`, followed by
//!   its own terminator;
//! - lines strictly between the two are dropped.
//!
//! On a single-line range both rules apply to the same line. Columns past the
//! end of a line clamp to the line length. The complete output is assembled
//! before anything is written, and the write itself goes through
//! [`ide_fs::io::write_atomic`], so a failing edit never leaves the file
//! half-written.

use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::position::{Position, Range};

/// The removed span expressed as "cut from here, resume there".
///
/// `resume` is the first kept position after the cut. For an inclusive range
/// it sits one column past `to`; for an insertion it equals `from`.
#[derive(Debug, Clone, Copy)]
struct Splice<'a> {
    from: Position,
    resume: Position,
    replacement: &'a str,
}

impl<'a> Splice<'a> {
    fn replacing(range: &Range, replacement: &'a str) -> Self {
        let to = range.to();
        Self {
            from: range.from(),
            resume: Position::new(to.line, to.column.saturating_add(1)),
            replacement,
        }
    }

    fn inserting(at: Position, text: &'a str) -> Self {
        Self {
            from: at,
            resume: at,
            replacement: text,
        }
    }
}

/// Replace the text spanned by `range` in the file at `path`.
///
/// Fails with [`Error::FileNotFound`] if the file does not exist and with
/// [`Error::FileRangeOutOfBounds`] if `range.to().line` is not a line of the
/// file. In both cases the file is left untouched.
pub fn replace_in_file(path: &Path, range: &Range, replacement: &str) -> Result<()> {
    rewrite_file(path, Splice::replacing(range, replacement))?;
    tracing::info!(path = %path.display(), %range, "replaced range in file");
    Ok(())
}

/// Insert `text` before the character at `at` without consuming anything.
///
/// A column at or past the end of the line appends to that line.
pub fn insert_in_file(path: &Path, at: Position, text: &str) -> Result<()> {
    rewrite_file(path, Splice::inserting(at, text))?;
    tracing::info!(path = %path.display(), position = %at, "inserted text in file");
    Ok(())
}

/// Replace the text spanned by `range` in `content`.
pub fn replace_in_str(content: &str, range: &Range, replacement: &str) -> Result<String> {
    splice_lines(content.as_bytes(), Splice::replacing(range, replacement))
        .map_err(|e| Error::io("<memory>", e))?
}

/// Return the exact text spanned by `range` in the file at `path`.
///
/// Replacing the range with the returned text is a no-op, which is how a
/// caller captures what an edit is about to overwrite.
pub fn read_range(path: &Path, range: &Range) -> Result<String> {
    let reader = BufReader::new(open_existing(path)?);
    extract_lines(reader, range).map_err(|e| Error::io(path, e))?
}

fn rewrite_file(path: &Path, splice: Splice<'_>) -> Result<()> {
    let reader = BufReader::new(open_existing(path)?);
    let output = splice_lines(reader, splice).map_err(|e| Error::io(path, e))??;
    ide_fs::io::write_text(path, &output)?;
    Ok(())
}

fn open_existing(path: &Path) -> Result<std::fs::File> {
    ide_fs::io::open(path).map_err(|err| {
        if err.is_not_found() {
            Error::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::Fs(err)
        }
    })
}

/// Stream lines from `reader`, producing the spliced text.
///
/// The outer `io::Result` carries read failures; the inner `Result` carries
/// the out-of-bounds check, which can only be decided once the line count
/// is known.
fn splice_lines<R: BufRead>(mut reader: R, splice: Splice<'_>) -> io::Result<Result<String>> {
    let mut output = String::new();
    let mut line = String::new();
    let mut index = 0;

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }

        if index < splice.from.line || index > splice.resume.line {
            output.push_str(&line);
        } else {
            let (body, terminator) = split_terminator(&line);
            if index == splice.from.line {
                output.push_str(take_chars(body, splice.from.column));
                output.push_str(splice.replacement);
            }
            if index == splice.resume.line {
                output.push_str(skip_chars(body, splice.resume.column));
                output.push_str(terminator);
            }
        }
        index += 1;
    }

    if splice.resume.line >= index {
        return Ok(Err(Error::FileRangeOutOfBounds {
            line: splice.resume.line,
            line_count: index,
        }));
    }

    Ok(Ok(output))
}

fn extract_lines<R: BufRead>(mut reader: R, range: &Range) -> io::Result<Result<String>> {
    let (from, to) = (range.from(), range.to());
    let mut spanned = String::new();
    let mut line = String::new();
    let mut index = 0;

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 || index > to.line {
            break;
        }

        if index >= from.line {
            let (body, terminator) = split_terminator(&line);
            let start = if index == from.line { from.column } else { 0 };
            if index == to.line {
                let end = to.column.saturating_add(1);
                spanned.push_str(skip_chars(take_chars(body, end), start));
            } else {
                spanned.push_str(skip_chars(body, start));
                spanned.push_str(terminator);
            }
        }
        index += 1;
    }

    if to.line >= index {
        return Ok(Err(Error::FileRangeOutOfBounds {
            line: to.line,
            line_count: index,
        }));
    }

    Ok(Ok(spanned))
}

/// Split a line read with `read_line` into its body and terminator.
fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

fn char_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(offset, _)| offset)
}

fn take_chars(text: &str, chars: usize) -> &str {
    &text[..char_offset(text, chars)]
}

fn skip_chars(text: &str, chars: usize) -> &str {
    &text[char_offset(text, chars)..]
}
