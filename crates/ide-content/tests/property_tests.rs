//! Round-trip property of the range-replace engine

use ide_content::{Position, Range, read_range, replace_in_file};
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

/// The inclusive range covering `text` once it has been inserted at `from`.
///
/// `text` must be non-empty and must not end with a newline.
fn span_of_inserted(from: Position, text: &str) -> Range {
    let segments: Vec<&str> = text.split('\n').collect();
    let last_len = segments.last().map_or(0, |s| s.chars().count());
    let to = if segments.len() == 1 {
        Position::new(from.line, from.column + last_len - 1)
    } else {
        Position::new(from.line + segments.len() - 1, last_len - 1)
    };
    Range::new(from, to).unwrap()
}

/// A file body plus a range that lies within the bodies of its lines.
fn file_and_range() -> impl Strategy<Value = (Vec<String>, bool, Range)> {
    (prop::collection::vec("[a-z ]{1,12}", 1..8), any::<bool>()).prop_flat_map(
        |(lines, trailing)| {
            let count = lines.len();
            let lens: Vec<usize> = lines.iter().map(|l| l.len()).collect();
            (0..count, 0..count).prop_flat_map(move |(a, b)| {
                let (from_line, to_line) = (a.min(b), a.max(b));
                let lines = lines.clone();
                (0..lens[from_line], 0..lens[to_line]).prop_filter_map(
                    "from must not follow to",
                    move |(fc, tc)| {
                        Range::new(Position::new(from_line, fc), Position::new(to_line, tc))
                            .ok()
                            .map(|range| (lines.clone(), trailing, range))
                    },
                )
            })
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn replace_then_restore_reproduces_original(
        (lines, trailing, range) in file_and_range(),
        text in "[A-Z]{1,5}(\n[A-Z]{1,5}){0,2}",
    ) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Main.elm");
        let mut original = lines.join("\n");
        if trailing {
            original.push('\n');
        }
        fs::write(&path, &original).unwrap();

        let spanned = read_range(&path, &range).unwrap();
        replace_in_file(&path, &range, &text).unwrap();
        replace_in_file(&path, &span_of_inserted(range.from(), &text), &spanned).unwrap();

        prop_assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }
}
