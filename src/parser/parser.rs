//! Packrat parse driver
//!
//! Owns the input, the cursor, the memo table and the furthest-failure
//! record for one parse. Grammar rules reach that state through the
//! [`QueryParser`] trait.
//!
//! ```text
//! Ready → Running → Accepted
//!                 ↘ Rejected
//! ```

use super::ast::{AstNode, Node, SyntaxTree};
use super::config::ParserConfig;
use super::errors::{Expected, ParseError, RejectReason};
use super::failure::FailureState;
use super::grammar::{self, QueryParser, TagCategory};
use super::memo::{MemoEntry, MemoStats, MemoTable};
use super::rule_parser::Rule;

/// Parse a logic query, requiring the whole input to match.
///
/// A fresh [`Parser`] is built for every call, so concurrent calls share
/// nothing.
pub fn parse(input: &str) -> Result<SyntaxTree, ParseError> {
    Parser::new(input).run()
}

/// [`parse`] with an explicit configuration
pub fn parse_with(input: &str, config: ParserConfig) -> Result<SyntaxTree, ParseError> {
    Parser::with_config(input, config).run()
}

/// Lifecycle of a [`Parser`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseState {
    /// Built, not yet run
    Ready,
    /// Evaluating rules
    Running,
    /// The top rule consumed the whole input
    Accepted,
    /// The top rule failed or left trailing input
    Rejected,
}

/// The parser state
#[derive(Debug)]
pub struct Parser<'a> {
    input: &'a str,
    pos: usize,
    config: ParserConfig,
    memo: MemoTable,
    failure: FailureState,
    state: ParseState,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, ParserConfig::default())
    }

    pub fn with_config(input: &'a str, config: ParserConfig) -> Self {
        Self {
            input,
            pos: 0,
            config,
            memo: MemoTable::new(),
            failure: FailureState::new(),
            state: ParseState::Ready,
        }
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    pub fn config(&self) -> ParserConfig {
        self.config
    }

    /// Memo table counters from the last run
    pub fn stats(&self) -> MemoStats {
        self.memo.stats()
    }

    /// Furthest-failure record from the last run
    pub fn failure(&self) -> &FailureState {
        &self.failure
    }

    // =========================================================================
    // Entry points
    // =========================================================================

    /// Parse the whole input as a query.
    ///
    /// Each run starts from a clean cursor, memo table and failure record.
    pub fn run(&mut self) -> Result<SyntaxTree, ParseError> {
        self.drive(grammar::parse_query)
    }

    /// Parse the whole input as a single `rule`
    pub fn run_rule(&mut self, rule: Rule) -> Result<Node, ParseError> {
        match rule {
            Rule::Query => self.drive(|p| grammar::parse_query(p).map(AstNode::into_node)),
            Rule::Identifier => {
                self.drive(|p| grammar::parse_identifier(p).map(AstNode::into_node))
            }
            Rule::Negation => self.drive(|p| grammar::parse_negation(p).map(AstNode::into_node)),
            Rule::BinaryOp => self.drive(|p| grammar::parse_binary_op(p).map(AstNode::into_node)),
            Rule::Tag => self.drive(|p| grammar::parse_tag(p).map(AstNode::into_node)),
            Rule::ContemporaryMeaning => self.drive(|p| {
                grammar::parse_category(p, TagCategory::ContemporaryMeaning)
                    .map(AstNode::into_node)
            }),
            Rule::SyntacticFunction => self.drive(|p| {
                grammar::parse_category(p, TagCategory::SyntacticFunction).map(AstNode::into_node)
            }),
        }
    }

    // =========================================================================
    // State machine
    // =========================================================================

    fn drive<T>(&mut self, top: impl FnOnce(&mut Self) -> Option<T>) -> Result<T, ParseError> {
        self.begin();
        let result = top(self);
        self.finish(result)
    }

    fn begin(&mut self) {
        self.pos = 0;
        self.memo = MemoTable::new();
        self.failure = FailureState::new();
        self.state = ParseState::Running;
    }

    fn finish<T>(&mut self, result: Option<T>) -> Result<T, ParseError> {
        let reason = match result {
            Some(value) if self.pos == self.input.len() => {
                self.state = ParseState::Accepted;
                tracing::debug!(
                    "[PARSE] accepted {} bytes ({:?})",
                    self.input.len(),
                    self.memo.stats()
                );
                return Ok(value);
            }
            Some(_) => {
                if self.failure.is_empty() || self.failure.offset() < self.pos {
                    self.failure.record(self.pos, Expected::end_of_input());
                }
                RejectReason::TrailingInput { consumed: self.pos }
            }
            None => RejectReason::NoMatch,
        };

        self.state = ParseState::Rejected;
        let failure = self.failure.clone();
        let offset = failure.offset();
        let expected = failure.into_expected();
        tracing::debug!(
            "[PARSE] rejected at {} ({:?}), {} expected token(s)",
            offset,
            reason,
            expected.len()
        );
        Err(ParseError::new(self.input, offset, expected, reason))
    }
}

impl QueryParser for Parser<'_> {
    fn input(&self) -> &str {
        self.input
    }

    fn get_pos(&self) -> usize {
        self.pos
    }

    fn reset(&mut self, pos: usize) {
        self.pos = pos;
    }

    fn expected(&mut self, offset: usize, expected: Expected) {
        self.failure.record(offset, expected);
    }

    fn memo_get(&mut self, rule: Rule, offset: usize) -> Option<MemoEntry> {
        if !self.config.memoize {
            return None;
        }
        self.memo.get(rule, offset).cloned()
    }

    fn memo_put(&mut self, rule: Rule, offset: usize, entry: MemoEntry) {
        if self.config.memoize {
            self.memo.insert(rule, offset, entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::grammar::Tag;

    #[test]
    fn test_state_transitions() {
        let mut parser = Parser::new("booster");
        assert_eq!(parser.state(), ParseState::Ready);
        assert!(parser.run().is_ok());
        assert_eq!(parser.state(), ParseState::Accepted);

        let mut parser = Parser::new("bananas");
        assert!(parser.run().is_err());
        assert_eq!(parser.state(), ParseState::Rejected);
    }

    #[test]
    fn test_rerun_starts_clean() {
        let mut parser = Parser::new("booster|Subject");
        let first = parser.run().unwrap();
        let first_stats = parser.stats();
        let second = parser.run().unwrap();
        assert_eq!(first, second);
        assert_eq!(parser.stats(), first_stats);
    }

    #[test]
    fn test_trailing_text_synthesizes_eof_when_nothing_further_failed() {
        let mut parser = Parser::new("-x");
        let err = parser.run_rule(Rule::Negation).unwrap_err();
        assert_eq!(err.offset, 1);
        assert_eq!(err.expected, vec![Expected::end_of_input()]);
        assert_eq!(err.reason, RejectReason::TrailingInput { consumed: 1 });
    }

    #[test]
    fn test_trailing_text_keeps_further_failures() {
        let err = parse("booster x").unwrap_err();
        assert_eq!(err.offset, 8);
        assert_eq!(err.reason, RejectReason::TrailingInput { consumed: 7 });
        assert!(!err.expected.contains(&Expected::end_of_input()));
        assert_eq!(err.expected_literals(), vec![" ", "|", "&"]);
    }

    #[test]
    fn test_memoization_can_be_disabled() {
        let config = ParserConfig::new().with_memoize(false);
        let mut parser = Parser::with_config("booster & Subject", config);
        let tree = parser.run().unwrap();
        assert_eq!(tree.rest[0].1.tag(), Tag::Subject);
        assert_eq!(parser.stats(), MemoStats::default());
    }

    #[test]
    fn test_each_rule_offset_pair_is_evaluated_once() {
        let mut parser = Parser::new("booster|Subject");
        parser.run().unwrap();
        let stats = parser.stats();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, stats.entries);
        assert!(stats.entries > 0);
    }
}
