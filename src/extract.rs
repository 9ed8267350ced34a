//! Extraction of puzzle grids from the Euler text format.
//!
//! The source file is a sequence of labeled blocks:
//!
//! ```text
//! Grid 01
//! 003020600
//! 900305001
//! ...seven more digit rows...
//! ```
//!
//! Each block is flattened onto a single 81-character line. The scan is
//! purely syntactic: anything that does not match the block grammar
//! exactly, a short row, a missing row, a three-digit label, is skipped
//! without notice and without disturbing later blocks.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::errors::FileAccessError;

/// Relative path of the Euler-format source file.
pub const SOURCE_PATH: &str = "resources/puzzles_euler.txt";
/// Relative path of the line-format file the extractor writes.
pub const TARGET_PATH: &str = "resources/puzzles.txt";

static GRID_PATTERN: OnceLock<Regex> = OnceLock::new();

/// A two-digit label line, then nine rows of nine digits, every line
/// newline-terminated. The label is fixed at two digits; `Grid 100`
/// would not match.
fn grid_pattern() -> &'static Regex {
    GRID_PATTERN.get_or_init(|| {
        Regex::new(r"Grid \d\d\r?\n((?:\d{9}\r?\n){9})").expect("static pattern is valid")
    })
}

/// Returns the nine-line digit body of every grid block in `text`, in
/// document order.
///
/// Matches are non-overlapping; each match consumes its span before the
/// scan continues behind it.
pub fn grid_bodies(text: &str) -> impl Iterator<Item = &str> {
    grid_pattern()
        .captures_iter(text)
        .map(|caps| caps.get(1).expect("pattern has one capture group").as_str())
}

/// Flattens every grid block in `source_text` onto its own 81-character
/// line.
///
/// Pure text to text. Blocks appear in the output in the order they appear
/// in the input, one per line, each terminated by `\n`. Input without any
/// grid block produces an empty string.
pub fn extract_and_format(source_text: &str) -> String {
    let mut output = String::new();
    for body in grid_bodies(source_text) {
        output.extend(body.chars().filter(|&ch| ch != '\n' && ch != '\r'));
        output.push('\n');
    }
    output
}

/// Reads the Euler-format file at `source` and writes the line format to
/// `target`.
///
/// The target is created if absent and truncated if present; a source
/// without any grid block still produces the empty target file. Returns the
/// number of puzzles written. On error the target may be missing or
/// partially written.
pub fn reformat_file(source: &Path, target: &Path) -> Result<usize, FileAccessError> {
    let contents = fs::read_to_string(source).map_err(|err| FileAccessError::read(source, err))?;
    let output = extract_and_format(&contents);
    fs::write(target, &output).map_err(|err| FileAccessError::write(target, err))?;
    Ok(output.lines().count())
}

#[cfg(test)]
mod test {
    use super::*;

    fn repeated_row_block(label: &str, row: &str) -> String {
        let mut block = format!("Grid {}\n", label);
        for _ in 0..9 {
            block.push_str(row);
            block.push('\n');
        }
        block
    }

    #[test]
    fn single_block() {
        let source = repeated_row_block("01", "123456789");
        let expected = format!("{}\n", "123456789".repeat(9));
        assert_eq!(extract_and_format(&source), expected);
    }

    #[test]
    fn blocks_stay_in_document_order() {
        let source = format!(
            "{}{}",
            repeated_row_block("01", "111111111"),
            repeated_row_block("02", "222222222"),
        );
        let lines: Vec<_> = extract_and_format(&source).lines().map(str::to_owned).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "1".repeat(81));
        assert_eq!(lines[1], "2".repeat(81));
    }

    #[test]
    fn no_blocks_no_output() {
        assert_eq!(extract_and_format(""), "");
        assert_eq!(extract_and_format("no grids in here\n123456789\n"), "");
    }

    #[test]
    fn truncated_block_is_skipped() {
        let mut source = String::from("Grid 01\n");
        for _ in 0..5 {
            source.push_str("123456789\n");
        }
        assert_eq!(extract_and_format(&source), "");
    }

    #[test]
    fn truncated_block_does_not_corrupt_later_blocks() {
        let mut source = String::from("Grid 01\n");
        for _ in 0..8 {
            source.push_str("111111111\n");
        }
        source.push_str(&repeated_row_block("02", "222222222"));
        assert_eq!(extract_and_format(&source), format!("{}\n", "2".repeat(81)));
    }

    #[test]
    fn short_row_invalidates_the_block() {
        let mut source = String::from("Grid 01\n12345678\n");
        for _ in 0..8 {
            source.push_str("123456789\n");
        }
        assert_eq!(extract_and_format(&source), "");
    }

    #[test]
    fn three_digit_label_is_skipped() {
        let source = repeated_row_block("100", "123456789");
        assert_eq!(extract_and_format(&source), "");
    }

    #[test]
    fn crlf_source_yields_the_same_records() {
        let unix = repeated_row_block("01", "123456789");
        let dos = unix.replace('\n', "\r\n");
        assert_eq!(extract_and_format(&dos), extract_and_format(&unix));
    }

    #[test]
    fn formatting_is_idempotent_on_the_source() {
        let source = format!(
            "prelude\n{}interlude\n{}",
            repeated_row_block("01", "123456789"),
            repeated_row_block("02", "987654321"),
        );
        assert_eq!(extract_and_format(&source), extract_and_format(&source));
    }

    #[test]
    fn records_reconstruct_their_bodies() {
        let source = format!(
            "{}{}",
            repeated_row_block("01", "123456789"),
            repeated_row_block("02", "987654321"),
        );
        let output = extract_and_format(&source);
        for (body, line) in grid_bodies(&source).zip(output.lines()) {
            assert_eq!(body.replace('\n', ""), line);
            assert_eq!(line.len(), 81);
            assert!(line.bytes().all(|byte| byte.is_ascii_digit()));
        }
    }
}
