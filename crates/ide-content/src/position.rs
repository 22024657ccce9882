//! Line/column positions and inclusive ranges.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A position in a text file.
///
/// Both fields are zero-indexed. `column` counts characters within the line,
/// not bytes, and never includes the line terminator. Positions order
/// lexicographically by `(line, column)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Parses `LINE:COLUMN`, the form used on the command line.
impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidPosition {
            input: s.to_string(),
        };
        let (line, column) = s.trim().split_once(':').ok_or_else(invalid)?;
        Ok(Self {
            line: line.parse().map_err(|_| invalid())?,
            column: column.parse().map_err(|_| invalid())?,
        })
    }
}

/// An inclusive span between two positions of the same file.
///
/// Both ends are part of the range, so even `from == to` covers one
/// character. The constructor guarantees `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct Range {
    from: Position,
    to: Position,
}

#[derive(Deserialize)]
struct RawRange {
    from: Position,
    to: Position,
}

impl TryFrom<RawRange> for Range {
    type Error = Error;

    fn try_from(raw: RawRange) -> Result<Self> {
        Range::new(raw.from, raw.to)
    }
}

impl Range {
    /// Create a range, rejecting one whose start comes after its end.
    pub fn new(from: Position, to: Position) -> Result<Self> {
        if from > to {
            return Err(Error::InvalidRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// A range covering columns `start..=end` of a single line.
    pub fn on_line(line: usize, start: usize, end: usize) -> Result<Self> {
        Self::new(Position::new(line, start), Position::new(line, end))
    }

    pub fn from(&self) -> Position {
        self.from
    }

    pub fn to(&self) -> Position {
        self.to
    }

    pub fn is_single_line(&self) -> bool {
        self.from.line == self.to.line
    }

    /// Whether `position` falls inside the range.
    pub fn contains(&self, position: Position) -> bool {
        self.from <= position && position <= self.to
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_order_by_line_then_column() {
        assert!(Position::new(0, 9) < Position::new(1, 0));
        assert!(Position::new(2, 1) < Position::new(2, 3));
        assert_eq!(Position::new(4, 4), Position::new(4, 4));
    }

    #[test]
    fn range_rejects_reversed_ends() {
        let result = Range::new(Position::new(3, 0), Position::new(2, 10));
        assert!(matches!(result, Err(Error::InvalidRange { .. })));
    }

    #[test]
    fn zero_width_range_is_allowed() {
        let range = Range::on_line(1, 4, 4).unwrap();
        assert!(range.is_single_line());
        assert!(range.contains(Position::new(1, 4)));
        assert!(!range.contains(Position::new(1, 5)));
    }

    #[test]
    fn parse_position() {
        assert_eq!("12:4".parse::<Position>().unwrap(), Position::new(12, 4));
        assert!("12".parse::<Position>().is_err());
        assert!("a:b".parse::<Position>().is_err());
    }

    #[test]
    fn deserializing_validates_order() {
        let ok: Range = serde_json::from_str(
            r#"{"from": {"line": 0, "column": 1}, "to": {"line": 0, "column": 3}}"#,
        )
        .unwrap();
        assert_eq!(ok.to(), Position::new(0, 3));

        let reversed = serde_json::from_str::<Range>(
            r#"{"from": {"line": 5, "column": 0}, "to": {"line": 0, "column": 3}}"#,
        );
        assert!(reversed.is_err());
    }
}
