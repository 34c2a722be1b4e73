//! Fixed-width literal matchers
//!
//! A terminal either consumes its whole literal or nothing. On failure the
//! cursor stays put and the literal is recorded as expected at that offset.

use text_size::{TextRange, TextSize};

use super::QueryParser;
use crate::parser::errors::{Expected, ExpectedToken};
use crate::parser::rule_parser::Rule;

/// Match `text` exactly (symbols and spaces)
pub fn literal<P: QueryParser>(p: &mut P, rule: Rule, text: &'static str) -> Option<TextRange> {
    terminal(p, rule, ExpectedToken::Literal(text), |chunk| chunk == text)
}

/// Match `text` ignoring ASCII case (vocabulary phrases)
pub fn phrase<P: QueryParser>(p: &mut P, rule: Rule, text: &'static str) -> Option<TextRange> {
    terminal(p, rule, ExpectedToken::Phrase(text), |chunk| {
        chunk.eq_ignore_ascii_case(text)
    })
}

fn terminal<P: QueryParser>(
    p: &mut P,
    rule: Rule,
    token: ExpectedToken,
    matches: impl Fn(&str) -> bool,
) -> Option<TextRange> {
    let start = p.get_pos();
    let len = token.text().map_or(0, str::len);
    let end = start + len;

    // `get` refuses ranges past the end or inside a multi-byte character
    let matched = p.input().get(start..end).is_some_and(matches);
    if matched {
        p.reset(end);
        Some(text_range(start, end))
    } else {
        p.expected(start, Expected::new(rule, token));
        None
    }
}

/// Build a range from byte offsets, saturating at `u32::MAX`
pub fn text_range(start: usize, end: usize) -> TextRange {
    let size = |offset: usize| TextSize::try_from(offset).unwrap_or(TextSize::new(u32::MAX));
    TextRange::new(size(start), size(end))
}
