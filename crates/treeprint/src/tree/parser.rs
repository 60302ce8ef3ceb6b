//! Textual tree notations, parsed with chumsky
//!
//! Two syntaxes are understood:
//!
//! - **Bracket notation**: `80(44(11(10,12),16),7(,15(1,4)))`. A key may be
//!   followed by a parenthesised child list; `k(l)` has only a left child,
//!   `k(,r)` only a right child.
//! - **Level order**: `80, 44, 7, 11, 16, null, 15`, optionally wrapped in
//!   `[...]`; `null` or `_` marks an absent node.
//!
//! Both accept `#` line comments and arbitrary whitespace. Empty input is
//! the empty tree.

use std::fmt;
use std::str::FromStr;

use chumsky::prelude::*;
use tracing::{debug, span, trace, warn, Level};

use super::node::Node;
use crate::core::chumsky_utils::{line_and_column, optional_whitespace_or_comment};
use crate::core::{Result, TreeError, MAX_SUPPORTED_LEVELS};

type Extra<'src> = extra::Err<Rich<'src, char>>;

/// Supported input syntaxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum TreeSyntax {
    /// `key(left,right)` bracket notation
    #[default]
    Notation,
    /// Comma-separated level-order keys with `null` holes
    LevelOrder,
}

impl fmt::Display for TreeSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeSyntax::Notation => write!(f, "notation"),
            TreeSyntax::LevelOrder => write!(f, "level-order"),
        }
    }
}

impl FromStr for TreeSyntax {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "notation" => Ok(TreeSyntax::Notation),
            "level-order" | "levelorder" => Ok(TreeSyntax::LevelOrder),
            _ => Err(format!("Unknown tree syntax: {}", s)),
        }
    }
}

/// Chumsky-based parser for both tree syntaxes
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeNotationParser;

impl TreeNotationParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse `input` in the given syntax
    pub fn parse_with(&self, syntax: TreeSyntax, input: &str) -> Result<Option<Node>> {
        match syntax {
            TreeSyntax::Notation => self.parse(input),
            TreeSyntax::LevelOrder => self.parse_level_order(input),
        }
    }

    /// Parse bracket notation
    pub fn parse(&self, input: &str) -> Result<Option<Node>> {
        let parse_span = span!(Level::INFO, "parse_tree", input_len = input.len());
        let _enter = parse_span.enter();

        trace!("Parsing bracket notation");
        check_nesting(input)?;
        let tree = Self::document_parser()
            .parse(input)
            .into_result()
            .map_err(|errors| to_parse_error(input, errors))?;

        debug!(
            node_count = tree.as_ref().map_or(0, Node::node_count),
            "Parsed bracket notation"
        );
        Ok(tree)
    }

    /// Parse level-order notation
    pub fn parse_level_order(&self, input: &str) -> Result<Option<Node>> {
        let parse_span = span!(Level::INFO, "parse_level_order", input_len = input.len());
        let _enter = parse_span.enter();

        let keys = Self::level_order_parser()
            .parse(input)
            .into_result()
            .map_err(|errors| to_parse_error(input, errors))?;

        let tree = Node::from_level_order(&keys);
        let placed = tree.as_ref().map_or(0, Node::node_count);
        let listed = keys.iter().filter(|key| key.is_some()).count();
        if placed != listed {
            warn!(listed, placed, "Level-order keys without a parent were dropped");
        }
        debug!(node_count = placed, "Parsed level-order notation");
        Ok(tree)
    }

    fn document_parser<'src>() -> impl Parser<'src, &'src str, Option<Node>, Extra<'src>> {
        let ws = optional_whitespace_or_comment();

        ws.clone()
            .ignore_then(Self::node_parser().or_not())
            .then_ignore(ws)
            .then_ignore(end())
    }

    fn key_parser<'src>() -> impl Parser<'src, &'src str, i64, Extra<'src>> + Clone {
        just('-')
            .or_not()
            .then(text::int(10))
            .to_slice()
            .try_map(|digits: &str, span| {
                digits
                    .parse::<i64>()
                    .map_err(|e| Rich::custom(span, format!("invalid key '{}': {}", digits, e)))
            })
    }

    fn node_parser<'src>() -> impl Parser<'src, &'src str, Node, Extra<'src>> + Clone {
        recursive(|node| {
            let ws = optional_whitespace_or_comment();

            let right = just(',')
                .ignore_then(ws.clone())
                .ignore_then(node.clone().or_not())
                .then_ignore(ws.clone());

            let children = just('(')
                .ignore_then(ws.clone())
                .ignore_then(node.or_not())
                .then_ignore(ws.clone())
                .then(right.or_not().map(Option::flatten))
                .then_ignore(just(')'));

            Self::key_parser()
                .then(ws.ignore_then(children).or_not())
                .map(|(key, children)| {
                    let (left, right) = children.unwrap_or((None, None));
                    Node::with_children(key, left, right)
                })
        })
    }

    fn level_order_parser<'src>() -> impl Parser<'src, &'src str, Vec<Option<i64>>, Extra<'src>> {
        let ws = optional_whitespace_or_comment();

        let absent = just("null").or(just("_")).to(None);
        let entry = Self::key_parser()
            .map(Some)
            .or(absent)
            .padded_by(ws.clone());
        let body = entry
            .separated_by(just(','))
            .allow_trailing()
            .collect::<Vec<_>>();
        let bracketed = body
            .clone()
            .padded_by(ws.clone())
            .delimited_by(just('['), just(']'));

        ws.clone()
            .ignore_then(bracketed.or(body))
            .then_ignore(ws)
            .then_ignore(end())
    }
}

/// Reject bracket nesting deeper than any printable tree
///
/// The node parser recurses once per nesting level, so this runs first.
fn check_nesting(input: &str) -> Result<()> {
    let mut depth = 0usize;
    let mut in_comment = false;

    for (offset, c) in input.char_indices() {
        match c {
            '\n' => in_comment = false,
            _ if in_comment => {}
            '#' => in_comment = true,
            '(' => {
                depth += 1;
                if depth >= MAX_SUPPORTED_LEVELS {
                    let (line, column) = line_and_column(input, offset);
                    return Err(TreeError::parse_error(
                        format!("trees nest at most {} levels deep", MAX_SUPPORTED_LEVELS),
                        line,
                        column,
                    ));
                }
            }
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

fn to_parse_error(input: &str, errors: Vec<Rich<'_, char>>) -> TreeError {
    match errors.first() {
        Some(error) => {
            let (line, column) = line_and_column(input, error.span().start);
            TreeError::parse_error(error.to_string(), line, column)
        }
        None => TreeError::parse_error("invalid tree".to_string(), 1, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Option<Node> {
        TreeNotationParser::new().parse(input).unwrap()
    }

    #[test]
    fn test_single_key() {
        assert_eq!(parse("42"), Some(Node::new(42)));
        assert_eq!(parse("  7 \n"), Some(Node::new(7)));
    }

    #[test]
    fn test_nested_notation() {
        let tree = parse("80(44(11(10,12),16),7(,15(1,4)))").unwrap();
        assert_eq!(tree.node_count(), 10);
        assert_eq!(tree.height(), 4);
        assert_eq!(tree.to_string(), "80(44(11(10,12),16),7(,15(1,4)))");
    }

    #[test]
    fn test_single_children() {
        assert_eq!(parse("1(2)").unwrap().to_string(), "1(2)");
        assert_eq!(parse("1(,3)").unwrap().to_string(), "1(,3)");
        assert_eq!(parse("1(2,)").unwrap().to_string(), "1(2)");
        assert_eq!(parse("1()").unwrap().to_string(), "1");
    }

    #[test]
    fn test_whitespace_and_comments() {
        let input = "# demo tree\n50 (\n  30 ,  # left\n  70\n)\n";
        assert_eq!(parse(input).unwrap().to_string(), "50(30,70)");
    }

    #[test]
    fn test_negative_keys_parse() {
        assert_eq!(parse("-5"), Some(Node::new(-5)));
    }

    #[test]
    fn test_empty_input_is_empty_tree() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("  # nothing here\n"), None);
    }

    #[test]
    fn test_syntax_error_position() {
        let result = TreeNotationParser::new().parse("50(30,\n  x)");
        match result {
            Err(TreeError::ParseError { line, column, .. }) => {
                assert_eq!((line, column), (2, 3));
            }
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_unbalanced_parens() {
        assert!(TreeNotationParser::new().parse("1(2,3").is_err());
        assert!(TreeNotationParser::new().parse("1(2,3))").is_err());
        assert!(TreeNotationParser::new().parse("1 2").is_err());
    }

    #[test]
    fn test_nesting_limit() {
        let nested = |levels: usize| {
            let mut text = "1(".repeat(levels - 1);
            text.push('1');
            text.push_str(&")".repeat(levels - 1));
            text
        };

        let deepest = parse(&nested(MAX_SUPPORTED_LEVELS)).unwrap();
        assert_eq!(deepest.height(), MAX_SUPPORTED_LEVELS);

        match TreeNotationParser::new().parse(&nested(MAX_SUPPORTED_LEVELS + 1)) {
            Err(TreeError::ParseError { line, column, .. }) => {
                assert_eq!((line, column), (1, 2 * MAX_SUPPORTED_LEVELS));
            }
            other => panic!("Expected ParseError, got {:?}", other),
        }
        assert!(TreeNotationParser::new().parse(&nested(100_000)).is_err());
    }

    #[test]
    fn test_parens_in_comments_do_not_nest() {
        let input = format!("# {}\n5(3)", "(".repeat(40));
        assert_eq!(parse(&input).unwrap().to_string(), "5(3)");
    }

    #[test]
    fn test_level_order() {
        let parser = TreeNotationParser::new();
        let tree = parser
            .parse_level_order("80, 44, 7, 11, 16, null, 15, 10, 12, _, _, 1, 4")
            .unwrap()
            .unwrap();
        assert_eq!(tree.to_string(), "80(44(11(10,12),16),7(,15(1,4)))");

        let bracketed = parser.parse_level_order("[50, 30, 70]").unwrap().unwrap();
        assert_eq!(bracketed.to_string(), "50(30,70)");
    }

    #[test]
    fn test_level_order_empty() {
        let parser = TreeNotationParser::new();
        assert!(parser.parse_level_order("").unwrap().is_none());
        assert!(parser.parse_level_order("[]").unwrap().is_none());
        assert!(parser.parse_level_order("null, 1").unwrap().is_none());
    }

    #[test]
    fn test_level_order_rejects_garbage() {
        assert!(TreeNotationParser::new()
            .parse_level_order("1, two, 3")
            .is_err());
    }

    #[test]
    fn test_syntax_dispatch() {
        let parser = TreeNotationParser::new();
        let a = parser.parse_with(TreeSyntax::Notation, "1(2,3)").unwrap();
        let b = parser.parse_with(TreeSyntax::LevelOrder, "1,2,3").unwrap();
        assert_eq!(a, b);
        assert_eq!("level-order".parse::<TreeSyntax>().unwrap(), TreeSyntax::LevelOrder);
        assert_eq!(TreeSyntax::Notation.to_string(), "notation");
    }
}
