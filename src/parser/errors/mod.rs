//! Parser error handling module
//!
//! This module turns the parser's furthest-failure record into something a
//! user can act on:
//! - [`Expected`] entries naming the rule and the token it wanted
//! - [`ParseError`], the single error surfaced per rejected parse
//! - [`format_error`], the line-and-caret renderer

mod error;
mod expected;
mod format;

pub use error::{ParseError, RejectReason};
pub use expected::{Expected, ExpectedToken};
pub use format::format_error;

#[cfg(test)]
mod tests;
