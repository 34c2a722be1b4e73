//! Rule-based parser for testing individual grammar rules
//!
//! Parses a single grammar rule against a whole input, so `Identifier`,
//! `BinaryOp` or `Tag` can be exercised without building a full query.
//!
//! # Example
//!
//! ```
//! use logic_query::parser::{Node, Rule, parse_rule};
//!
//! let node = parse_rule(Rule::Identifier, "-Subject").unwrap();
//! assert!(matches!(node, Node::Identifier(id) if id.is_negated()));
//! ```

use std::fmt;

use super::ast::Node;
use super::errors::ParseError;
use super::parser::Parser;

/// Name the grammar's rules are qualified with in diagnostics
pub const GRAMMAR_NAME: &str = "LogicQuery";

/// Named grammar rules
///
/// Each rule is memoized per start offset and names itself in the
/// expected-token list when one of its terminals fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    /// query = { id ~ (" "* ~ BinOp ~ " "* ~ id)* }
    Query,
    /// id = { NEG? ~ ID }
    Identifier,
    /// NEG = { "-" }
    Negation,
    /// BinOp = { "|" | "&" }
    BinaryOp,
    /// ID = { contemporary_meaning | synt_function_of_anchor }
    Tag,
    /// contemporary_meaning = { `large quantity` | ... }
    ContemporaryMeaning,
    /// synt_function_of_anchor = { `Argument` | ... }
    SyntacticFunction,
}

impl Rule {
    /// Every rule, top rule first
    pub const ALL: [Rule; 7] = [
        Rule::Query,
        Rule::Identifier,
        Rule::Negation,
        Rule::BinaryOp,
        Rule::Tag,
        Rule::ContemporaryMeaning,
        Rule::SyntacticFunction,
    ];

    /// The rule's name as written in the grammar
    pub fn name(self) -> &'static str {
        match self {
            Rule::Query => "query",
            Rule::Identifier => "id",
            Rule::Negation => "NEG",
            Rule::BinaryOp => "BinOp",
            Rule::Tag => "ID",
            Rule::ContemporaryMeaning => "contemporary_meaning",
            Rule::SyntacticFunction => "synt_function_of_anchor",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", GRAMMAR_NAME, self.name())
    }
}

/// Parse `input` as exactly one `rule`.
///
/// Like [`parse`](super::parse), the rule must consume the whole input.
pub fn parse_rule(rule: Rule, input: &str) -> Result<Node, ParseError> {
    Parser::new(input).run_rule(rule)
}
