//! # logic-query
//!
//! Packrat parser for the boolean tag queries typed into the construction
//! search form.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! parser    → Terminals, combinators, memo table, grammar, driver, errors
//!   ↓
//! base      → Primitives (TextRange, line/column conversion)
//! ```
//!
//! ## Usage
//!
//! ```
//! use logic_query::{BinaryOp, Tag, parse};
//!
//! let tree = parse("booster | -Subject").unwrap();
//! assert_eq!(tree.head.tag(), Tag::Booster);
//! assert_eq!(tree.rest[0].0.op, BinaryOp::Or);
//! assert!(tree.rest[0].1.is_negated());
//!
//! let err = parse("booster|").unwrap_err();
//! assert_eq!(err.offset, 8);
//! println!("{err}");
//! ```

// ============================================================================
// MODULES (dependency order: base → parser)
// ============================================================================

/// Foundation types: TextRange, LineIndex
pub mod base;

/// Parser: terminals, combinators, grammar, driver, error formatting
pub mod parser;

// Re-export the entry points and tree types
pub use parser::{
    BinaryOp, Identifier, Node, Operator, ParseError, ParserConfig, Rule, SyntaxTree, Tag,
    TagCategory, parse, parse_rule, parse_with,
};

#[cfg(feature = "parallel")]
pub use parser::parse_all;

// Re-export foundation types
pub use base::{LineCol, LineIndex, TextRange, TextSize};
