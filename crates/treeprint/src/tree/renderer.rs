//! ASCII rendering of a laid out tree
//!
//! Nodes are drawn breadth-first, one text line per level. Between two node
//! lines the renderer draws the edges of the upper level as a block of
//! `/` and `\` lines whose gap widens by two columns per line, so the
//! strokes converge on the children below.

use std::collections::VecDeque;

use tracing::{debug, info, span, trace, Level};

use super::arena::TreeArena;
use super::layout::TreeLayout;
use super::levels::LevelMap;
use crate::core::{DigitWidth, LineCanvas};

/// Draws node and edge lines for a positioned tree
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeRenderer {
    digit_width: DigitWidth,
}

impl TreeRenderer {
    pub fn new(digit_width: DigitWidth) -> Self {
        Self { digit_width }
    }

    /// Render the tree into lines, ending with one blank line
    pub fn render(&self, arena: &TreeArena, levels: &LevelMap, layout: &TreeLayout) -> Vec<String> {
        let render_span = span!(
            Level::INFO,
            "draw_tree",
            node_count = arena.len(),
            height = layout.height()
        );
        let _enter = render_span.enter();

        let mut canvas = LineCanvas::new();
        let mut queue = VecDeque::from([arena.root()]);
        let mut current_level = 0;

        while let Some(id) = queue.pop_front() {
            let level = levels.depth(id);
            if level != current_level {
                canvas.end_line();
                let edge_lines = layout.edge_lines_below(current_level);
                debug!(level = current_level, edge_lines, "Drawing edges");
                for iteration in 0..edge_lines {
                    self.draw_edges(&mut canvas, arena, levels, layout, current_level, iteration);
                }
                current_level = level;
            }

            let node = arena.get(id);
            canvas.pad_to(layout.margin(id));
            canvas.write(&self.digit_width.format_key(node.key));
            trace!(key = node.key, level, column = canvas.column(), "Drew node");

            if let Some(left) = node.left {
                queue.push_back(left);
            }
            if let Some(right) = node.right {
                queue.push_back(right);
            }
        }

        canvas.end_line();
        canvas.end_line();

        let lines = canvas.into_lines();
        info!(line_count = lines.len(), "Tree rendering completed");
        lines
    }

    /// Draw edge line `iteration` below every node of `level`
    ///
    /// Absent children leave a blank where their stroke would be.
    fn draw_edges(
        &self,
        canvas: &mut LineCanvas,
        arena: &TreeArena,
        levels: &LevelMap,
        layout: &TreeLayout,
        level: usize,
        iteration: usize,
    ) {
        let digits = self.digit_width.width() as i64;
        let step = iteration as i64;

        for &id in levels.nodes_at(level) {
            let node = arena.get(id);
            canvas.pad_to(layout.margin(id) - step + (digits / 2 - 1));
            canvas.write_char(if node.left.is_some() { '/' } else { ' ' });
            canvas.write_blanks(2 * iteration);
            canvas.write_char(if node.right.is_some() { '\\' } else { ' ' });
        }
        canvas.end_line();
    }
}
