//! Packrat parser for logic queries
//!
//! A logic query joins vocabulary tags with `|` (or) and `&` (and); any tag
//! may be negated with a leading `-`:
//!
//! ```text
//! booster | -Subject & Matrix Predicate
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Terminals (literal / phrase) → ranges, failures recorded
//!     ↓
//! Combinators (sequence, ordered choice, repetition) + memo table
//!     ↓
//! Grammar rules → typed AST nodes
//!     ↓
//! Driver → SyntaxTree, or ParseError at the furthest failure
//! ```
//!
//! The parser is scannerless: terminals match directly against the input
//! and every named rule is memoized per offset, so backtracking never
//! re-evaluates a rule at an offset it has already tried.

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
pub mod errors;
pub mod grammar;

#[cfg(feature = "parallel")]
mod batch;
mod config;
mod failure;
mod memo;
mod rule_parser;

pub use ast::{AstNode, BinaryOp, Identifier, Node, Operator, SyntaxTree, TagMatch};
#[cfg(feature = "parallel")]
pub use batch::{parse_all, parse_all_with};
pub use config::ParserConfig;
pub use errors::{Expected, ExpectedToken, ParseError, RejectReason, format_error};
pub use failure::FailureState;
pub use grammar::{QueryParser, Tag, TagCategory, VOCABULARY, VocabularyEntry};
pub use memo::{MemoEntry, MemoStats, MemoTable};
pub use parser::{ParseState, Parser, parse, parse_with};
pub use rule_parser::{GRAMMAR_NAME, Rule, parse_rule};
