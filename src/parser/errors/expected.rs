//! Expected-token records collected at the furthest failure

use std::fmt;

use crate::parser::rule_parser::{GRAMMAR_NAME, Rule};

/// A token the grammar would have accepted at the failure offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpectedToken {
    /// Case-sensitive literal such as `-`, `|` or a space
    Literal(&'static str),
    /// Case-insensitive vocabulary phrase
    Phrase(&'static str),
    /// End of input
    EndOfInput,
}

impl ExpectedToken {
    /// The literal text, if this token has one
    pub fn text(&self) -> Option<&'static str> {
        match self {
            Self::Literal(text) | Self::Phrase(text) => Some(text),
            Self::EndOfInput => None,
        }
    }
}

impl fmt::Display for ExpectedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => write!(f, "\"{text}\""),
            Self::Phrase(text) => write!(f, "`{text}`"),
            Self::EndOfInput => f.write_str("<EOF>"),
        }
    }
}

/// One (rule, token) pair recorded by a failed terminal match
///
/// `rule` is `None` for failures raised by the driver itself (trailing input).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Expected {
    pub rule: Option<Rule>,
    pub token: ExpectedToken,
}

impl Expected {
    pub fn new(rule: Rule, token: ExpectedToken) -> Self {
        Self {
            rule: Some(rule),
            token,
        }
    }

    /// The `<EOF>` entry the driver records for unconsumed input
    pub fn end_of_input() -> Self {
        Self {
            rule: None,
            token: ExpectedToken::EndOfInput,
        }
    }

    /// Qualified name of the rule that recorded this entry
    pub fn origin(&self) -> String {
        match self.rule {
            Some(rule) => rule.to_string(),
            None => GRAMMAR_NAME.to_string(),
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from {}", self.token, self.origin())
    }
}
