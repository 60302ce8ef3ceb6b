//! Level assignment
//!
//! Walks the tree in symmetric order (left subtree, node, right subtree),
//! recording each node's depth and rejecting keys the digit width cannot
//! print. The in-order sequence doubles as the left-to-right order of the
//! nodes on each level, which the edge printer relies on.

use tracing::{debug, span, trace, Level};

use super::arena::{NodeId, TreeArena};
use crate::core::{DigitWidth, Result};

/// Depth of every node, plus the nodes of each level from left to right
#[derive(Debug, Clone)]
pub struct LevelMap {
    depths: Vec<usize>,
    by_level: Vec<Vec<NodeId>>,
}

impl LevelMap {
    pub fn depth(&self, id: NodeId) -> usize {
        self.depths[id.index()]
    }

    /// Ids on `level`, left to right
    pub fn nodes_at(&self, level: usize) -> &[NodeId] {
        self.by_level.get(level).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of levels (max depth + 1)
    pub fn height(&self) -> usize {
        self.by_level.len()
    }

    fn record(&mut self, id: NodeId, depth: usize) {
        self.depths[id.index()] = depth;
        if self.by_level.len() <= depth {
            self.by_level.resize_with(depth + 1, Vec::new);
        }
        self.by_level[depth].push(id);
    }
}

/// Assign a depth to every node, failing on the first out-of-range key
///
/// Keys are checked on entry to a node, before its left subtree is visited.
/// The walk keeps its own stack, so arbitrarily deep trees are measured
/// completely and can then be rejected by the height check.
pub fn assign_levels(arena: &TreeArena, digit_width: DigitWidth) -> Result<LevelMap> {
    let levels_span = span!(Level::DEBUG, "assign_levels", node_count = arena.len());
    let _enter = levels_span.enter();

    let mut map = LevelMap {
        depths: vec![0; arena.len()],
        by_level: Vec::new(),
    };
    let mut stack: Vec<(NodeId, usize)> = Vec::new();
    let mut next = Some((arena.root(), 0));

    loop {
        while let Some((id, depth)) = next {
            let node = arena.get(id);
            digit_width.check_key(node.key)?;
            stack.push((id, depth));
            next = node.left.map(|left| (left, depth + 1));
        }

        let Some((id, depth)) = stack.pop() else {
            break;
        };
        trace!(key = arena.get(id).key, depth, "Recording node level");
        map.record(id, depth);
        next = arena.get(id).right.map(|right| (right, depth + 1));
    }

    debug!(height = map.height(), "Levels assigned");
    Ok(map)
}
