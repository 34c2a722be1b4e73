//! Human-readable rendering of a rejected parse

use std::fmt::Write;

use super::expected::Expected;
use crate::base::{LineCol, LineIndex};

/// Width of the right-aligned line number in the source excerpt
const LINE_NUMBER_WIDTH: usize = 6;

/// Render the furthest failure as a message with a source excerpt and caret.
///
/// ```text
/// Line 1: expected one of:
///
///     - "-" from LogicQuery::NEG
///     - `booster` from LogicQuery::contemporary_meaning
///
///      1 | bananas
///          ^
/// ```
///
/// Each distinct entry of `expected` is listed once, in the order given.
pub fn format_error(input: &str, offset: usize, expected: &[Expected]) -> String {
    let index = LineIndex::new(input);
    let LineCol { line, column } = index.line_col(input, offset);
    let source_line = index.line_text(input, line - 1);

    let mut message = format!("Line {line}: expected one of:\n\n");
    let mut seen: Vec<&Expected> = Vec::with_capacity(expected.len());
    for entry in expected {
        if seen.contains(&entry) {
            continue;
        }
        seen.push(entry);
        let _ = writeln!(message, "    - {entry}");
    }

    let gutter = format!("{line:>width$} | ", width = LINE_NUMBER_WIDTH);
    let _ = writeln!(message, "\n{gutter}{source_line}");
    message.push_str(&" ".repeat(gutter.len() + column - 1));
    message.push('^');
    message
}
