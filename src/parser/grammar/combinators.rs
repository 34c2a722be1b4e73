//! Generic rule combinators
//!
//! Every combinator saves the cursor before it starts and restores it when
//! the attempt fails, so a failed rule never leaves the cursor moved.

use super::QueryParser;
use crate::parser::ast::AstNode;
use crate::parser::memo::MemoEntry;
use crate::parser::rule_parser::Rule;

/// Run `body` as one unit: if any part fails, rewind to the start.
///
/// Sub-rules are chained with `?` inside `body`.
pub fn sequence<P, T>(p: &mut P, body: impl FnOnce(&mut P) -> Option<T>) -> Option<T>
where
    P: QueryParser,
{
    let start = p.get_pos();
    let result = body(p);
    if result.is_none() {
        p.reset(start);
    }
    result
}

/// Try each alternative in order from the same start; the first success wins.
pub fn ordered_choice<P, T, A>(p: &mut P, alternatives: impl IntoIterator<Item = A>) -> Option<T>
where
    P: QueryParser,
    A: FnOnce(&mut P) -> Option<T>,
{
    let start = p.get_pos();
    for alternative in alternatives {
        if let Some(result) = alternative(p) {
            return Some(result);
        }
        p.reset(start);
    }
    None
}

/// Apply `item` until it fails. Never fails itself.
///
/// An iteration that succeeds without consuming input ends the loop.
pub fn zero_or_more<P, T>(p: &mut P, mut item: impl FnMut(&mut P) -> Option<T>) -> Vec<T>
where
    P: QueryParser,
{
    let mut items = Vec::new();
    loop {
        let start = p.get_pos();
        match item(p) {
            Some(value) => {
                items.push(value);
                if p.get_pos() == start {
                    break;
                }
            }
            None => {
                p.reset(start);
                break;
            }
        }
    }
    items
}

/// `item?`: absent is `None` with the cursor unchanged.
pub fn optional<P, T>(p: &mut P, item: impl FnOnce(&mut P) -> Option<T>) -> Option<T>
where
    P: QueryParser,
{
    sequence(p, item)
}

/// Consult the memo table for `rule` at the cursor before running `body`.
///
/// A hit replays the stored end offset and result. A miss runs `body` and
/// stores the outcome, failures included.
pub fn memoized<P, T>(p: &mut P, rule: Rule, body: impl FnOnce(&mut P) -> Option<T>) -> Option<T>
where
    P: QueryParser,
    T: AstNode,
{
    let start = p.get_pos();
    if let Some(entry) = p.memo_get(rule, start) {
        tracing::trace!("[MEMO] hit {} at {} -> {}", rule, start, entry.end);
        p.reset(entry.end);
        return entry.result.and_then(T::from_node);
    }

    let result = body(p);
    let entry = MemoEntry {
        result: result.clone().map(AstNode::into_node),
        end: p.get_pos(),
    };
    p.memo_put(rule, start, entry);
    result
}
