//! Parallel parsing of independent queries
//!
//! A search form can carry several query fields. Each one is parsed by its
//! own [`Parser`](super::Parser) on the rayon pool; no parser state is shared.

use rayon::prelude::*;

use super::ast::SyntaxTree;
use super::config::ParserConfig;
use super::errors::ParseError;
use super::parser::parse_with;

/// Parse every input, keeping results in input order
pub fn parse_all<S>(inputs: &[S]) -> Vec<Result<SyntaxTree, ParseError>>
where
    S: AsRef<str> + Sync,
{
    parse_all_with(inputs, ParserConfig::default())
}

/// [`parse_all`] with an explicit configuration
pub fn parse_all_with<S>(inputs: &[S], config: ParserConfig) -> Vec<Result<SyntaxTree, ParseError>>
where
    S: AsRef<str> + Sync,
{
    tracing::debug!("[BATCH] parsing {} queries", inputs.len());
    inputs
        .par_iter()
        .map(|input| parse_with(input.as_ref(), config))
        .collect()
}
