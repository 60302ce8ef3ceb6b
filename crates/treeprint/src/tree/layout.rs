//! Margin calculation
//!
//! Every node gets a start margin: the column of its first printed
//! character. Margins are derived top-down from a fixed effective height,
//! halving the horizontal spread at each level, so the position of a node
//! depends only on its path from the root and never on the shape of
//! neighbouring subtrees.

use tracing::{debug, info, span, trace, Level};

use super::arena::{NodeId, TreeArena};
use super::levels::LevelMap;
use crate::core::{RenderConfig, Result, TreeError};

/// `2^exponent`, or 0 for negative exponents
pub(crate) fn pow2(exponent: i64) -> i64 {
    if exponent < 0 {
        0
    } else {
        1i64 << exponent
    }
}

/// Which side of its parent a node hangs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Root,
    Left,
    Right,
}

/// Positioned tree: effective height plus a margin per node
#[derive(Debug, Clone)]
pub struct TreeLayout {
    height: usize,
    effective_height: i64,
    digit_width: usize,
    margins: Vec<i64>,
}

impl TreeLayout {
    /// Compute margins for every node of `arena`
    ///
    /// Fails with [`TreeError::TreeTooDeep`] when the tree has more levels
    /// than `config.max_levels`.
    pub fn compute(arena: &TreeArena, levels: &LevelMap, config: &RenderConfig) -> Result<Self> {
        let layout_span = span!(
            Level::INFO,
            "layout_tree",
            node_count = arena.len(),
            digit_width = config.digit_width.width()
        );
        let _enter = layout_span.enter();

        let height = levels.height();
        let effective_height = effective_height(height, config.max_levels)?;
        debug!(height, effective_height, "Effective height resolved");

        let mut layout = Self {
            height,
            effective_height,
            digit_width: config.digit_width.width(),
            margins: vec![0; arena.len()],
        };
        layout.place(arena, levels, arena.root(), Side::Root, 0);

        info!(
            node_count = arena.len(),
            height,
            width = layout.width(),
            "Tree layout completed"
        );
        Ok(layout)
    }

    fn place(
        &mut self,
        arena: &TreeArena,
        levels: &LevelMap,
        id: NodeId,
        side: Side,
        parent_margin: i64,
    ) {
        let depth = levels.depth(id) as i64;
        let digits = self.digit_width as i64;
        let spacing = digits * (pow2(self.effective_height - depth + 1) - 1);

        let margin = match side {
            Side::Root => digits * (pow2(self.effective_height - depth) - 1),
            Side::Left => parent_margin - spacing / digits - digits / 2,
            Side::Right => parent_margin + spacing / digits + digits / 2,
        };
        trace!(key = arena.get(id).key, depth, margin, "Placed node");
        self.margins[id.index()] = margin;

        let node = arena.get(id);
        if let Some(left) = node.left {
            self.place(arena, levels, left, Side::Left, margin);
        }
        if let Some(right) = node.right {
            self.place(arena, levels, right, Side::Right, margin);
        }
    }

    pub fn margin(&self, id: NodeId) -> i64 {
        self.margins[id.index()]
    }

    /// Actual number of levels in the tree
    pub fn height(&self) -> usize {
        self.height
    }

    /// Height used by the spacing formulas
    ///
    /// This is the index of the deepest level, one less again when the tree
    /// exactly reaches the configured ceiling. It can be negative for a
    /// single node at a ceiling of one level.
    pub fn effective_height(&self) -> i64 {
        self.effective_height
    }

    /// Number of edge lines drawn below `level`
    pub fn edge_lines_below(&self, level: usize) -> usize {
        (pow2(self.effective_height - level as i64) - 1).max(0) as usize
    }

    /// Rightmost column occupied by any key
    pub fn width(&self) -> usize {
        self.margins
            .iter()
            .map(|margin| (margin + self.digit_width as i64).max(0) as usize)
            .max()
            .unwrap_or(0)
    }
}

/// Resolve the effective height for a tree of `height` levels
///
/// A tree that exactly reaches `max_levels` is compacted by one level: its
/// edges get shorter while node order is unchanged.
pub fn effective_height(height: usize, max_levels: usize) -> Result<i64> {
    if height > max_levels {
        return Err(TreeError::tree_too_deep(height, max_levels));
    }
    let compaction = if height == max_levels { 1 } else { 0 };
    Ok(height as i64 - 1 - compaction)
}
