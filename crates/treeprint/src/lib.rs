//! Treeprint - Render binary trees as ASCII art
//!
//! Keys are laid out on a fixed grid whose spacing halves at every level, and
//! parents are joined to their children by `/` and `\` strokes.
//!
//! # Quick Start
//!
//! ```rust
//! use treeprint::{render, Node};
//!
//! let tree = Node::new(50).with_left(Node::new(30)).with_right(Node::new(70));
//! let lines = render(Some(&tree)).unwrap();
//! assert_eq!(lines, vec!["  50", "  /\\", "30  70", ""]);
//! ```
//!
//! # Advanced Usage
//!
//! For more control, configure a printer or parse a textual tree:
//!
//! ```rust
//! use treeprint::prelude::*;
//!
//! let tree = TreeNotationParser::new()
//!     .parse("500(250,750(,900))")
//!     .unwrap();
//!
//! let printer = TreePrinter::with_config(RenderConfig::new(DigitWidth::Three, 6));
//! let ascii = printer.render_to_string(tree.as_ref()).unwrap();
//! assert!(ascii.contains("900"));
//! ```

pub mod core;
pub mod tree;

pub use self::core::*;
pub use tree::{Node, TreePrinter, TreeStats, TreeSyntax};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{DigitWidth, RenderConfig, TreeError};
    pub use crate::tree::{Node, TreeNotationParser, TreePrinter, TreeStats, TreeSyntax};
}

/// Render a tree with the default configuration (two-digit keys, six levels)
///
/// # Returns
/// * `Ok(lines)` - node and edge lines followed by one blank line, or the
///   single line `"The tree is empty."` when `root` is `None`
/// * `Err` - if a key is outside `0..=99` or the tree has more than six levels
///
/// # Example
/// ```rust
/// use treeprint::render;
///
/// assert_eq!(render(None).unwrap(), vec!["The tree is empty."]);
/// ```
pub fn render(root: Option<&tree::Node>) -> Result<Vec<String>> {
    render_with_config(root, RenderConfig::default())
}

/// Render a tree with an explicit digit width and level ceiling
pub fn render_with(
    root: Option<&tree::Node>,
    digit_width: DigitWidth,
    max_levels: usize,
) -> Result<Vec<String>> {
    render_with_config(root, RenderConfig::new(digit_width, max_levels))
}

/// Render a tree with the given configuration
pub fn render_with_config(root: Option<&tree::Node>, config: RenderConfig) -> Result<Vec<String>> {
    TreePrinter::with_config(config).render(root)
}

/// Render a tree into a single newline-separated string
///
/// # Example
/// ```rust
/// use treeprint::{render_to_string, Node, RenderConfig};
///
/// let ascii = render_to_string(Some(&Node::new(80)), RenderConfig::default()).unwrap();
/// assert_eq!(ascii, "80\n");
/// ```
pub fn render_to_string(root: Option<&tree::Node>, config: RenderConfig) -> Result<String> {
    TreePrinter::with_config(config).render_to_string(root)
}

/// Parse bracket notation into a tree without rendering
///
/// # Example
/// ```rust
/// use treeprint::parse;
///
/// let tree = parse("80(44,7(,15))").unwrap().unwrap();
/// assert_eq!(tree.node_count(), 4);
/// assert_eq!(tree.height(), 3);
/// ```
pub fn parse(input: &str) -> Result<Option<tree::Node>> {
    tree::TreeNotationParser::new().parse(input)
}

/// Parse bracket notation and render it in one step
///
/// # Example
/// ```rust
/// use treeprint::{render_notation, RenderConfig};
///
/// let ascii = render_notation("50(30,70)", RenderConfig::default()).unwrap();
/// assert_eq!(ascii, "  50\n  /\\\n30  70\n");
/// ```
pub fn render_notation(input: &str, config: RenderConfig) -> Result<String> {
    let tree = parse(input)?;
    render_to_string(tree.as_ref(), config)
}
