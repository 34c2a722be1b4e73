//! Grammar for the logic query language
//!
//! This module contains the parsing logic organized by layer:
//! - `terminals` - Fixed literal matchers (`-`, `|`, `&`, ` `, vocabulary phrases)
//! - `combinators` - Sequence, ordered choice, repetition and memoization
//! - `vocabulary` - The closed tag vocabulary in priority order
//! - `query` - The grammar rules proper
//!
//! ```text
//! query      = { id ~ (" "* ~ BinOp ~ " "* ~ id)* }
//! id         = { NEG? ~ ID }
//! NEG        = { "-" }
//! BinOp      = { "|" | "&" }
//! ID         = { contemporary_meaning | synt_function_of_anchor }
//! ```
//!
//! The rule functions are generic over [`QueryParser`] so they can run
//! against any driver that owns a cursor, a memo table and a failure record.

mod combinators;
mod query;
mod terminals;
mod vocabulary;

pub use combinators::{memoized, optional, ordered_choice, sequence, zero_or_more};
pub use query::{
    parse_binary_op, parse_category, parse_identifier, parse_negation, parse_query, parse_tag,
};
pub use terminals::{literal, phrase, text_range};
pub use vocabulary::{Tag, TagCategory, VOCABULARY, VocabularyEntry};

use super::errors::Expected;
use super::memo::MemoEntry;
use super::rule_parser::Rule;

/// Trait for the state a grammar rule needs from its driver
///
/// The driver implements this trait to provide the cursor, furthest-failure
/// tracking and the memo table.
pub trait QueryParser {
    /// The full input text
    fn input(&self) -> &str;

    // Position tracking
    fn get_pos(&self) -> usize;
    /// Move the cursor, usually back to a saved position
    fn reset(&mut self, pos: usize);

    /// Record a failed terminal at `offset`
    fn expected(&mut self, offset: usize, expected: Expected);

    /// Stored outcome of `rule` at `offset`, if memoization is on and it ran before
    fn memo_get(&mut self, rule: Rule, offset: usize) -> Option<MemoEntry>;
    /// Store the outcome of `rule` started at `offset`
    fn memo_put(&mut self, rule: Rule, offset: usize, entry: MemoEntry);
}
