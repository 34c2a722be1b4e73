//! The closed tag vocabulary
//!
//! Tags are tried in [`VOCABULARY`] order and the first phrase that matches
//! wins. A phrase that is a prefix of a later one would shadow it, so longer
//! phrases must come first; the order is fixed and not resolved by length.

use std::fmt;

use crate::parser::rule_parser::Rule;

/// The database field a tag filters on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TagCategory {
    /// Contemporary meaning of the construction
    ContemporaryMeaning,
    /// Syntactic function of the anchor
    SyntacticFunction,
}

impl TagCategory {
    /// Categories in the order `ID` tries them
    pub const ALL: [TagCategory; 2] = [
        TagCategory::ContemporaryMeaning,
        TagCategory::SyntacticFunction,
    ];

    /// The grammar rule that matches this category's phrases
    pub fn rule(self) -> Rule {
        match self {
            TagCategory::ContemporaryMeaning => Rule::ContemporaryMeaning,
            TagCategory::SyntacticFunction => Rule::SyntacticFunction,
        }
    }

    /// Name of the construction field the category's values come from
    pub fn field_name(self) -> &'static str {
        match self {
            TagCategory::ContemporaryMeaning => "contemporary_meaning",
            TagCategory::SyntacticFunction => "synt_function_of_anchor",
        }
    }

    /// Vocabulary entries of this category, in priority order
    pub fn entries(self) -> impl Iterator<Item = &'static VocabularyEntry> {
        VOCABULARY
            .iter()
            .filter(move |entry| entry.tag.category() == self)
    }
}

/// One vocabulary phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    // contemporary_meaning
    LargeQuantity,
    NegativeAssessment,
    Booster,

    // synt_function_of_anchor
    Argument,
    Coordinator,
    DiscourseParticle,
    Government,
    MatrixPredicate,
    Modifier,
    NominalQuantifier,
    Object,
    Parenthetical,
    PraedicativeExpression,
    Subject,
    Subordinator,
    VerbPredicate,
    WordFormation,
}

impl Tag {
    /// Canonical spelling of the phrase
    pub const fn literal(self) -> &'static str {
        match self {
            Tag::LargeQuantity => "large quantity",
            Tag::NegativeAssessment => "negative assessment",
            Tag::Booster => "booster",
            Tag::Argument => "Argument",
            Tag::Coordinator => "Coordinator",
            Tag::DiscourseParticle => "Discourse Particle",
            Tag::Government => "Government",
            Tag::MatrixPredicate => "Matrix Predicate",
            Tag::Modifier => "Modifier",
            Tag::NominalQuantifier => "Nominal Quantifier",
            Tag::Object => "Object",
            Tag::Parenthetical => "Parenthetical",
            Tag::PraedicativeExpression => "Praedicative Expression",
            Tag::Subject => "Subject",
            Tag::Subordinator => "Subordinator",
            Tag::VerbPredicate => "Verb Predicate",
            Tag::WordFormation => "Word-Formation",
        }
    }

    pub const fn category(self) -> TagCategory {
        match self {
            Tag::LargeQuantity | Tag::NegativeAssessment | Tag::Booster => {
                TagCategory::ContemporaryMeaning
            }
            _ => TagCategory::SyntacticFunction,
        }
    }

    /// Look up a tag by its exact phrase, ignoring ASCII case
    pub fn from_literal(text: &str) -> Option<Tag> {
        VOCABULARY
            .iter()
            .find(|entry| entry.literal.eq_ignore_ascii_case(text))
            .map(|entry| entry.tag)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}

/// A `(phrase, tag)` row of the vocabulary table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VocabularyEntry {
    pub literal: &'static str,
    pub tag: Tag,
}

const fn entry(tag: Tag) -> VocabularyEntry {
    VocabularyEntry {
        literal: tag.literal(),
        tag,
    }
}

/// Every phrase in the order it is tried
pub static VOCABULARY: [VocabularyEntry; 17] = [
    entry(Tag::LargeQuantity),
    entry(Tag::NegativeAssessment),
    entry(Tag::Booster),
    entry(Tag::Argument),
    entry(Tag::Coordinator),
    entry(Tag::DiscourseParticle),
    entry(Tag::Government),
    entry(Tag::MatrixPredicate),
    entry(Tag::Modifier),
    entry(Tag::NominalQuantifier),
    entry(Tag::Object),
    entry(Tag::Parenthetical),
    entry(Tag::PraedicativeExpression),
    entry(Tag::Subject),
    entry(Tag::Subordinator),
    entry(Tag::VerbPredicate),
    entry(Tag::WordFormation),
];
