//! Flattened, index-addressed view of a tree
//!
//! The layout stages attach depth and margin data to every node. Flattening
//! the owned tree into a vector lets them keep that data in plain vectors
//! indexed by [`NodeId`] instead of maps keyed by node identity.

use super::node::Node;

/// Index of a node inside a [`TreeArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One node of the arena with its children resolved to ids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaNode {
    pub key: i64,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

#[derive(Debug, Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// Nodes of one tree in pre-order; the root is always `NodeId(0)`
#[derive(Debug, Clone)]
pub struct TreeArena {
    nodes: Vec<ArenaNode>,
}

impl TreeArena {
    pub const ROOT: NodeId = NodeId(0);

    /// Flatten `root` and all of its descendants
    ///
    /// Uses an explicit stack, so trees of any depth can be flattened.
    pub fn from_root(root: &Node) -> Self {
        let mut nodes: Vec<ArenaNode> = Vec::with_capacity(root.node_count());
        let mut stack: Vec<(&Node, Option<(NodeId, Side)>)> = vec![(root, None)];

        while let Some((node, parent)) = stack.pop() {
            let id = NodeId(nodes.len());
            nodes.push(ArenaNode {
                key: node.key,
                left: None,
                right: None,
            });
            match parent {
                Some((parent, Side::Left)) => nodes[parent.0].left = Some(id),
                Some((parent, Side::Right)) => nodes[parent.0].right = Some(id),
                None => {}
            }
            // Right goes on the stack first so the left subtree is numbered first
            if let Some(right) = node.right() {
                stack.push((right, Some((id, Side::Right))));
            }
            if let Some(left) = node.left() {
                stack.push((left, Some((id, Side::Left))));
            }
        }

        Self { nodes }
    }

    pub fn root(&self) -> NodeId {
        Self::ROOT
    }

    pub fn get(&self, id: NodeId) -> &ArenaNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ids in pre-order
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }
}
