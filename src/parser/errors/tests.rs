//! Integration tests for the errors module

use super::*;
use crate::base::LineCol;
use crate::parser::grammar::VOCABULARY;
use crate::parser::parse;
use crate::parser::rule_parser::Rule;

#[test]
fn test_error_module_exports() {
    // Verify all public types are accessible
    let _token = ExpectedToken::EndOfInput;
    let _reason = RejectReason::NoMatch;
    let _expected = Expected::end_of_input();
    let _message = format_error("", 0, &[]);
}

#[test]
fn test_unknown_word_lists_whole_vocabulary() {
    let err = parse("bananas").unwrap_err();

    assert_eq!(err.offset, 0);
    assert_eq!(err.position, LineCol::new(1, 1));
    assert_eq!(err.reason, RejectReason::NoMatch);
    assert_eq!(
        err.expected[0],
        Expected::new(Rule::Negation, ExpectedToken::Literal("-"))
    );
    for entry in VOCABULARY.iter() {
        assert!(
            err.expects(ExpectedToken::Phrase(entry.literal)),
            "missing {:?}",
            entry.literal
        );
    }
    assert_eq!(err.expected.len(), VOCABULARY.len() + 1);
}

#[test]
fn test_dangling_operator_points_past_it() {
    let err = parse("booster|").unwrap_err();

    assert_eq!(err.offset, 8);
    assert_eq!(err.reason, RejectReason::TrailingInput { consumed: 7 });
    assert!(err.expects(ExpectedToken::Literal(" ")));
    assert!(err.expects(ExpectedToken::Literal("-")));
    assert!(err.expects(ExpectedToken::Phrase("booster")));
    assert!(err.expects(ExpectedToken::Phrase("Word-Formation")));
    assert!(!err.expects(ExpectedToken::Literal("|")));
    assert!(!err.expects(ExpectedToken::EndOfInput));
}

#[test]
fn test_message_shape() {
    let err = parse("booster & bananas").unwrap_err();
    let lines: Vec<&str> = err.message.lines().collect();

    assert_eq!(lines[0], "Line 1: expected one of:");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "    - \" \" from LogicQuery::query");
    assert_eq!(lines[3], "    - \"-\" from LogicQuery::NEG");
    assert_eq!(lines[4], "    - `large quantity` from LogicQuery::contemporary_meaning");
    assert!(lines.contains(&"    - `Argument` from LogicQuery::synt_function_of_anchor"));

    let excerpt = lines[lines.len() - 2];
    let caret = lines[lines.len() - 1];
    assert_eq!(excerpt, "     1 | booster & bananas");
    assert_eq!(caret.trim_start(), "^");
    assert_eq!(&excerpt[caret.len() - 1..], "bananas");
}

#[test]
fn test_display_is_the_message() {
    let err = parse("").unwrap_err();
    assert_eq!(err.to_string(), err.message);
    assert!(err.message.starts_with("Line 1: expected one of:"));
}

#[test]
fn test_newline_is_never_consumed() {
    let err = parse("booster &\nbananas").unwrap_err();
    assert_eq!(err.offset, 9);
    assert_eq!(err.position, LineCol::new(1, 10));
    assert!(err.message.contains("     1 | booster &\n"));
    assert!(!err.message.contains("bananas"));
}
