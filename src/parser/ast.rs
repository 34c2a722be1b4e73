//! Typed syntax tree for logic queries
//!
//! Every node records the [`TextRange`] it was matched from, so callers can
//! slice the original input (`&input[node.range]`) for highlighting.
//!
//! ```text
//! SyntaxTree
//!   head: Identifier { negation?, tag }
//!   rest: [(Operator, Identifier), ...]
//! ```

use std::fmt;

use text_size::TextRange;

use super::grammar::Tag;

/// Boolean connective between two identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `|`
    Or,
    /// `&`
    And,
}

impl BinaryOp {
    /// The operator's source symbol
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Or => "|",
            BinaryOp::And => "&",
        }
    }

    /// Lowercase name: `or` / `and`
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Or => "or",
            BinaryOp::And => "and",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A matched binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operator {
    pub op: BinaryOp,
    pub range: TextRange,
}

/// A matched vocabulary phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagMatch {
    pub tag: Tag,
    pub range: TextRange,
}

/// `-`? followed by a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identifier {
    /// Range of the `-` prefix, if present
    pub negation: Option<TextRange>,
    pub tag: TagMatch,
    pub range: TextRange,
}

impl Identifier {
    pub fn new(negation: Option<TextRange>, tag: TagMatch) -> Self {
        let start = negation.map_or(tag.range.start(), |neg| neg.start());
        Self {
            negation,
            tag,
            range: TextRange::new(start, tag.range.end()),
        }
    }

    pub fn is_negated(&self) -> bool {
        self.negation.is_some()
    }

    pub fn tag(&self) -> Tag {
        self.tag.tag
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negated() {
            f.write_str("-")?;
        }
        f.write_str(self.tag.tag.literal())
    }
}

/// Root of a successful parse
///
/// Its range always covers the whole input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SyntaxTree {
    pub head: Identifier,
    /// Operator/operand pairs in source order
    pub rest: Vec<(Operator, Identifier)>,
    pub range: TextRange,
}

impl SyntaxTree {
    pub fn new(head: Identifier, rest: Vec<(Operator, Identifier)>, range: TextRange) -> Self {
        Self { head, rest, range }
    }

    /// Number of identifiers (always `rest.len() + 1`)
    pub fn len(&self) -> usize {
        self.rest.len() + 1
    }

    /// A tree always holds at least one identifier
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All identifiers, left to right
    pub fn identifiers(&self) -> impl Iterator<Item = &Identifier> {
        std::iter::once(&self.head).chain(self.rest.iter().map(|(_, id)| id))
    }

    /// All operators, left to right
    pub fn operators(&self) -> impl Iterator<Item = BinaryOp> + '_ {
        self.rest.iter().map(|(op, _)| op.op)
    }
}

/// Canonical spelling: vocabulary casing, one space around each operator
impl fmt::Display for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.head)?;
        for (op, id) in &self.rest {
            write!(f, " {} {}", op.op, id)?;
        }
        Ok(())
    }
}

/// Anything a grammar rule can produce
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    Query(SyntaxTree),
    Identifier(Identifier),
    /// A bare `-`
    Negation(TextRange),
    BinaryOp(Operator),
    Tag(TagMatch),
}

impl Node {
    pub fn range(&self) -> TextRange {
        match self {
            Node::Query(tree) => tree.range,
            Node::Identifier(id) => id.range,
            Node::Negation(range) => *range,
            Node::BinaryOp(op) => op.range,
            Node::Tag(tag) => tag.range,
        }
    }
}

/// Conversion between a rule's typed output and [`Node`]
///
/// The memo table stores [`Node`]s; each rule reads its own entries back
/// through this trait.
pub trait AstNode: Clone + Sized {
    fn into_node(self) -> Node;
    fn from_node(node: Node) -> Option<Self>;
}

macro_rules! impl_ast_node {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl AstNode for $ty {
                fn into_node(self) -> Node {
                    Node::$variant(self)
                }

                fn from_node(node: Node) -> Option<Self> {
                    match node {
                        Node::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_ast_node! {
    Query => SyntaxTree,
    Identifier => Identifier,
    Negation => TextRange,
    BinaryOp => Operator,
    Tag => TagMatch,
}

#[cfg(test)]
mod tests {
    use super::*;
    use text_size::TextSize;

    fn range(start: u32, end: u32) -> TextRange {
        TextRange::new(TextSize::new(start), TextSize::new(end))
    }

    fn ident(negated: bool, tag: Tag, start: u32) -> Identifier {
        let neg = negated.then(|| range(start, start + 1));
        let tag_start = start + u32::from(negated);
        let len = tag.literal().len() as u32;
        Identifier::new(
            neg,
            TagMatch {
                tag,
                range: range(tag_start, tag_start + len),
            },
        )
    }

    #[test]
    fn test_identifier_range_includes_negation() {
        let id = ident(true, Tag::Object, 0);
        assert_eq!(id.range, range(0, 7));
        assert!(id.is_negated());
        assert_eq!(id.to_string(), "-Object");
    }

    #[test]
    fn test_tree_iterators_and_display() {
        let head = ident(false, Tag::Booster, 0);
        let op = Operator {
            op: BinaryOp::Or,
            range: range(7, 8),
        };
        let tail = ident(true, Tag::Subject, 8);
        let tree = SyntaxTree::new(head, vec![(op, tail)], range(0, 16));

        assert_eq!(tree.len(), 2);
        assert!(!tree.is_empty());
        assert_eq!(tree.operators().collect::<Vec<_>>(), vec![BinaryOp::Or]);
        let tags: Vec<_> = tree.identifiers().map(Identifier::tag).collect();
        assert_eq!(tags, vec![Tag::Booster, Tag::Subject]);
        assert_eq!(tree.to_string(), "booster | -Subject");
    }

    #[test]
    fn test_node_round_trip_through_ast_node() {
        let op = Operator {
            op: BinaryOp::And,
            range: range(3, 4),
        };
        let node = op.into_node();
        assert_eq!(node.range(), range(3, 4));
        assert_eq!(Operator::from_node(node.clone()), Some(op));
        assert_eq!(TagMatch::from_node(node), None);
    }

    #[test]
    fn test_binary_op_names() {
        assert_eq!(BinaryOp::Or.as_str(), "or");
        assert_eq!(BinaryOp::And.as_str(), "and");
        assert_eq!(BinaryOp::And.to_string(), "&");
    }
}
