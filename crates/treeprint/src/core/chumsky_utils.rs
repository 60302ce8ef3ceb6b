//! Shared chumsky parser utilities for tree notations
//!
//! The combinators are generic over the parser extra so that they compose
//! with parsers reporting rich errors.

use chumsky::extra::ParserExtra;
use chumsky::prelude::*;

/// Parse a `#` comment running to the end of the line.
pub fn line_comment<'src, E>() -> impl Parser<'src, &'src str, (), E> + Clone
where
    E: ParserExtra<'src, &'src str>,
{
    just('#').ignore_then(none_of('\n').repeated()).ignored()
}

/// Parse any mix of whitespace and `#` comments, possibly empty.
///
/// Matches single characters rather than `text::whitespace()` so the
/// repetition always makes progress.
pub fn optional_whitespace_or_comment<'src, E>() -> impl Parser<'src, &'src str, (), E> + Clone
where
    E: ParserExtra<'src, &'src str>,
{
    one_of(" \t\n\r")
        .ignored()
        .or(line_comment())
        .repeated()
        .ignored()
}

/// Translate a byte offset into a 1-based (line, column) pair.
pub fn line_and_column(input: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(input.len());
    let before = &input[..offset];
    let line = before.matches('\n').count() + 1;
    let column = before
        .rfind('\n')
        .map(|newline| before[newline + 1..].chars().count())
        .unwrap_or_else(|| before.chars().count())
        + 1;
    (line, column)
}
