//! Line/column conversion for byte offsets.
//!
//! Diagnostics point at a byte offset inside the query; users read lines
//! and columns. Lines and columns are 1-based, and columns count characters
//! so the caret lines up under non-ASCII text.

use std::fmt;

/// A 1-based line/column position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: usize,
    pub column: usize,
}

impl LineCol {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Start offsets of every line in a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { line_starts }
    }

    /// Number of lines (an empty text has one empty line)
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset where the 0-based line `line` starts
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Convert a byte offset into a 1-based line/column pair.
    ///
    /// Offsets past the end of `text` are clamped to its length.
    pub fn line_col(&self, text: &str, offset: usize) -> LineCol {
        let offset = offset.min(text.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let start = self.line_starts[line];
        let column = text
            .get(start..offset)
            .map_or(offset - start, |prefix| prefix.chars().count());
        LineCol::new(line + 1, column + 1)
    }

    /// The text of the 0-based line `line`, without its terminator
    pub fn line_text<'a>(&self, text: &'a str, line: usize) -> &'a str {
        let Some(start) = self.line_start(line) else {
            return "";
        };
        let end = self
            .line_start(line + 1)
            .map_or(text.len(), |next| next - 1);
        let line_text = text.get(start..end).unwrap_or("");
        line_text.strip_suffix('\r').unwrap_or(line_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_offsets() {
        let text = "booster|Subject";
        let index = LineIndex::new(text);
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_col(text, 0), LineCol::new(1, 1));
        assert_eq!(index.line_col(text, 8), LineCol::new(1, 9));
        assert_eq!(index.line_col(text, text.len()), LineCol::new(1, 16));
    }

    #[test]
    fn test_multi_line_offsets() {
        let text = "booster\n|Subject";
        let index = LineIndex::new(text);
        assert_eq!(index.line_count(), 2);
        assert_eq!(index.line_col(text, 7), LineCol::new(1, 8));
        assert_eq!(index.line_col(text, 8), LineCol::new(2, 1));
        assert_eq!(index.line_text(text, 0), "booster");
        assert_eq!(index.line_text(text, 1), "|Subject");
    }

    #[test]
    fn test_columns_count_characters() {
        let text = "бустер|x";
        let index = LineIndex::new(text);
        let pipe = text.find('|').unwrap();
        assert_eq!(index.line_col(text, pipe), LineCol::new(1, 7));
    }

    #[test]
    fn test_offset_is_clamped() {
        let text = "abc";
        let index = LineIndex::new(text);
        assert_eq!(index.line_col(text, 99), LineCol::new(1, 4));
        assert_eq!(index.line_text(text, 5), "");
    }

    #[test]
    fn test_display() {
        assert_eq!(LineCol::new(3, 7).to_string(), "3:7");
    }
}
