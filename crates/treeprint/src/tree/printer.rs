//! Printer pipeline
//!
//! A render call flattens the tree, assigns levels, computes margins and
//! then draws. Every validation happens before drawing starts, so a call
//! either fails without output or produces the complete picture.

use std::io::Write;

use tracing::{info, span, warn, Level};

use super::arena::TreeArena;
use super::layout::{effective_height, TreeLayout};
use super::levels::assign_levels;
use super::node::Node;
use super::renderer::TreeRenderer;
use crate::core::{RenderConfig, Result, EMPTY_TREE_MESSAGE};

/// Shape summary of a tree that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    pub node_count: usize,
    pub height: usize,
    pub effective_height: i64,
}

/// Renders binary trees with a fixed configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct TreePrinter {
    config: RenderConfig,
}

impl TreePrinter {
    /// Create a printer with the default configuration (two digits, six levels)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `root` into text lines
    ///
    /// An absent root yields the single line `"The tree is empty."`;
    /// otherwise the node and edge lines are followed by one blank line.
    ///
    /// Trailing blanks are trimmed from every line. This includes the
    /// right-hand padding of short keys and the blanks standing in for
    /// absent children at the end of an edge line.
    pub fn render(&self, root: Option<&Node>) -> Result<Vec<String>> {
        let render_span = span!(Level::INFO, "render_tree", config = %self.config);
        let _enter = render_span.enter();

        self.config.validate()?;

        let Some(root) = root else {
            warn!("Nothing to render, the tree is empty");
            return Ok(vec![EMPTY_TREE_MESSAGE.to_string()]);
        };

        let arena = TreeArena::from_root(root);
        let levels = assign_levels(&arena, self.config.digit_width)?;
        let layout = TreeLayout::compute(&arena, &levels, &self.config)?;
        let lines = TreeRenderer::new(self.config.digit_width).render(&arena, &levels, &layout);

        info!(
            node_count = arena.len(),
            height = layout.height(),
            line_count = lines.len(),
            "Tree rendered"
        );
        Ok(lines)
    }

    /// Render `root` as one string, lines separated by `\n`
    ///
    /// The trailing blank line becomes a final newline.
    pub fn render_to_string(&self, root: Option<&Node>) -> Result<String> {
        Ok(self.render(root)?.join("\n"))
    }

    /// Run every check `render` performs without drawing anything
    ///
    /// Returns `None` for the empty tree.
    pub fn validate(&self, root: Option<&Node>) -> Result<Option<TreeStats>> {
        self.config.validate()?;
        let Some(root) = root else {
            return Ok(None);
        };

        let arena = TreeArena::from_root(root);
        let levels = assign_levels(&arena, self.config.digit_width)?;
        let effective_height = effective_height(levels.height(), self.config.max_levels)?;

        Ok(Some(TreeStats {
            node_count: arena.len(),
            height: levels.height(),
            effective_height,
        }))
    }

    /// Write the rendered tree to `writer`, always ending with a newline
    pub fn write_to<W: Write>(&self, root: Option<&Node>, writer: &mut W) -> Result<()> {
        let text = self.render_to_string(root)?;
        if text.ends_with('\n') {
            write!(writer, "{}", text)?;
        } else {
            writeln!(writer, "{}", text)?;
        }
        Ok(())
    }

    /// Print the rendered tree to stdout
    pub fn print(&self, root: Option<&Node>) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.write_to(root, &mut handle)?;
        handle.flush()?;
        Ok(())
    }
}
