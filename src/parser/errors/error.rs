//! The error surfaced by a rejected parse
//!
//! Terminal mismatches and sequence backtracks stay inside the parser; the
//! only thing a caller ever sees is one [`ParseError`] per call, positioned
//! at the furthest offset any terminal reached.

use thiserror::Error;

use super::expected::{Expected, ExpectedToken};
use super::format::format_error;
use crate::base::{LineCol, LineIndex};

/// Why the driver rejected the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// The top rule did not match at offset 0
    NoMatch,
    /// The top rule matched but stopped before the end of input
    TrailingInput {
        /// Byte length of the prefix the top rule accepted
        consumed: usize,
    },
}

/// A rejected parse
///
/// `Display` yields the formatted message, ready to show to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    /// Byte offset of the furthest failure
    pub offset: usize,
    /// 1-based line/column of `offset`
    pub position: LineCol,
    /// Every distinct (rule, token) pair recorded at `offset`
    pub expected: Vec<Expected>,
    pub reason: RejectReason,
    /// Line-and-caret rendering of the failure
    pub message: String,
}

impl ParseError {
    pub fn new(
        input: &str,
        offset: usize,
        expected: Vec<Expected>,
        reason: RejectReason,
    ) -> Self {
        let position = LineIndex::new(input).line_col(input, offset);
        let message = format_error(input, offset, &expected);
        Self {
            offset,
            position,
            expected,
            reason,
            message,
        }
    }

    /// Check whether `token` is among the expected tokens
    pub fn expects(&self, token: ExpectedToken) -> bool {
        self.expected.iter().any(|e| e.token == token)
    }

    /// Literal texts of the expected tokens, in recorded order
    pub fn expected_literals(&self) -> Vec<&'static str> {
        self.expected.iter().filter_map(|e| e.token.text()).collect()
    }

    /// Check whether the input was rejected only because of trailing text
    pub fn is_trailing_input(&self) -> bool {
        matches!(self.reason, RejectReason::TrailingInput { .. })
    }
}
