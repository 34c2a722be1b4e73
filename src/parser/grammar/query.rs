//! Grammar rules
//!
//! Each named rule is wrapped in [`memoized`], so a rule re-entered at the
//! same offset during backtracking is answered from the memo table.

use text_size::TextRange;

use super::combinators::{memoized, optional, ordered_choice, sequence, zero_or_more};
use super::terminals::{literal, phrase, text_range};
use super::vocabulary::TagCategory;
use super::QueryParser;
use crate::parser::ast::{BinaryOp, Identifier, Operator, SyntaxTree, TagMatch};
use crate::parser::rule_parser::Rule;

/// Operator symbols in the order `BinOp` tries them
const OPERATORS: [(&str, BinaryOp); 2] = [("|", BinaryOp::Or), ("&", BinaryOp::And)];

/// query = { id ~ (" "* ~ BinOp ~ " "* ~ id)* }
pub fn parse_query<P: QueryParser>(p: &mut P) -> Option<SyntaxTree> {
    memoized(p, Rule::Query, |p| {
        sequence(p, |p| {
            let start = p.get_pos();
            let head = parse_identifier(p)?;
            let rest = zero_or_more(p, parse_clause);
            Some(SyntaxTree::new(head, rest, text_range(start, p.get_pos())))
        })
    })
}

/// " "* ~ BinOp ~ " "* ~ id
fn parse_clause<P: QueryParser>(p: &mut P) -> Option<(Operator, Identifier)> {
    sequence(p, |p| {
        skip_spaces(p);
        let op = parse_binary_op(p)?;
        skip_spaces(p);
        let id = parse_identifier(p)?;
        Some((op, id))
    })
}

/// " "*, attributed to `query` in diagnostics
fn skip_spaces<P: QueryParser>(p: &mut P) {
    zero_or_more(p, |p| literal(p, Rule::Query, " "));
}

/// id = { NEG? ~ ID }
pub fn parse_identifier<P: QueryParser>(p: &mut P) -> Option<Identifier> {
    memoized(p, Rule::Identifier, |p| {
        sequence(p, |p| {
            let negation = optional(p, parse_negation);
            let tag = parse_tag(p)?;
            Some(Identifier::new(negation, tag))
        })
    })
}

/// NEG = { "-" }
pub fn parse_negation<P: QueryParser>(p: &mut P) -> Option<TextRange> {
    memoized(p, Rule::Negation, |p| literal(p, Rule::Negation, "-"))
}

/// BinOp = { "|" | "&" }
pub fn parse_binary_op<P: QueryParser>(p: &mut P) -> Option<Operator> {
    memoized(p, Rule::BinaryOp, |p| {
        ordered_choice(
            p,
            OPERATORS.iter().map(|&(symbol, op)| {
                move |p: &mut P| {
                    literal(p, Rule::BinaryOp, symbol).map(|range| Operator { op, range })
                }
            }),
        )
    })
}

/// ID = { contemporary_meaning | synt_function_of_anchor }
pub fn parse_tag<P: QueryParser>(p: &mut P) -> Option<TagMatch> {
    memoized(p, Rule::Tag, |p| {
        ordered_choice(
            p,
            TagCategory::ALL
                .iter()
                .map(|&category| move |p: &mut P| parse_category(p, category)),
        )
    })
}

/// One category's phrases, tried in vocabulary order
pub fn parse_category<P: QueryParser>(p: &mut P, category: TagCategory) -> Option<TagMatch> {
    let rule = category.rule();
    memoized(p, rule, |p| {
        ordered_choice(
            p,
            category.entries().map(|entry| {
                move |p: &mut P| {
                    phrase(p, rule, entry.literal).map(|range| TagMatch {
                        tag: entry.tag,
                        range,
                    })
                }
            }),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use crate::parser::grammar::Tag;

    #[test]
    fn test_identifier_with_negation() {
        let mut p = Parser::new("-Object");
        let id = parse_identifier(&mut p).unwrap();
        assert!(id.is_negated());
        assert_eq!(id.tag(), Tag::Object);
        assert_eq!(id.range, text_range(0, 7));
    }

    #[test]
    fn test_space_between_negation_and_tag_is_rejected() {
        let mut p = Parser::new("- Object");
        assert!(parse_identifier(&mut p).is_none());
        assert_eq!(p.get_pos(), 0);
        assert_eq!(p.failure().offset(), 1);
    }

    #[test]
    fn test_binary_op_choices() {
        let mut p = Parser::new("&|");
        assert_eq!(parse_binary_op(&mut p).map(|o| o.op), Some(BinaryOp::And));
        assert_eq!(parse_binary_op(&mut p).map(|o| o.op), Some(BinaryOp::Or));
        assert_eq!(parse_binary_op(&mut p), None);
    }

    #[test]
    fn test_multi_word_tag() {
        let mut p = Parser::new("negative ASSESSMENT");
        let tag = parse_tag(&mut p).unwrap();
        assert_eq!(tag.tag, Tag::NegativeAssessment);
        assert_eq!(p.get_pos(), 19);
    }

    #[test]
    fn test_query_stops_before_dangling_operator() {
        let mut p = Parser::new("booster |");
        let tree = parse_query(&mut p).unwrap();
        assert!(tree.rest.is_empty());
        assert_eq!(p.get_pos(), 7);
        assert_eq!(tree.range, text_range(0, 7));
    }

    #[test]
    fn test_query_collects_clauses_in_order() {
        let mut p = Parser::new("booster & -Subject|Object");
        let tree = parse_query(&mut p).unwrap();
        let ops: Vec<_> = tree.operators().collect();
        assert_eq!(ops, vec![BinaryOp::And, BinaryOp::Or]);
        let tags: Vec<_> = tree.identifiers().map(Identifier::tag).collect();
        assert_eq!(tags, vec![Tag::Booster, Tag::Subject, Tag::Object]);
        assert!(tree.rest[0].1.is_negated());
    }
}
