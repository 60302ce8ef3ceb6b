//! Owned binary tree handed to the printer
//!
//! Each child is owned by exactly one parent, so the structure can never
//! contain cycles or shared subtrees.

use std::collections::VecDeque;
use std::fmt;

/// Binary tree node with an integer key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub key: i64,
    pub left: Option<Box<Node>>,
    pub right: Option<Box<Node>>,
}

impl Node {
    /// Create a leaf node
    pub fn new(key: i64) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, left: Node) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    pub fn with_right(mut self, right: Node) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    /// Create a node with both children at once
    pub fn with_children(key: i64, left: Option<Node>, right: Option<Node>) -> Self {
        Self {
            key,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of levels in the subtree rooted here (a leaf has height 1)
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|child| (child, depth + 1)));
            stack.extend(node.right().map(|child| (child, depth + 1)));
        }
        height
    }

    /// Number of nodes in the subtree rooted here
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left());
            stack.extend(node.right());
        }
        count
    }

    /// Build a tree from its level-order encoding
    ///
    /// `None` marks an absent node. Each present node, taken in queue
    /// order, claims the next two entries as its left and right children;
    /// entries past the end are absent.
    pub fn from_level_order(keys: &[Option<i64>]) -> Option<Node> {
        if keys.first().copied().flatten().is_none() {
            return None;
        }

        let mut children: Vec<(Option<usize>, Option<usize>)> = vec![(None, None); keys.len()];
        let mut queue = VecDeque::from([0usize]);
        let mut cursor = 1;

        while let Some(parent) = queue.pop_front() {
            if cursor >= keys.len() {
                break;
            }
            for side in 0..2 {
                let Some(slot) = keys.get(cursor) else {
                    break;
                };
                if slot.is_some() {
                    if side == 0 {
                        children[parent].0 = Some(cursor);
                    } else {
                        children[parent].1 = Some(cursor);
                    }
                    queue.push_back(cursor);
                }
                cursor += 1;
            }
        }

        // Children always come after their parent, so build back to front
        let mut built: Vec<Option<Node>> = keys.iter().map(|_| None).collect();
        for index in (0..keys.len()).rev() {
            let Some(key) = keys[index] else {
                continue;
            };
            let (left, right) = children[index];
            let left = left.and_then(|i| built[i].take());
            let right = right.and_then(|i| built[i].take());
            built[index] = Some(Node::with_children(key, left, right));
        }

        built.first_mut().and_then(Option::take)
    }
}

/// Tears the tree down with an explicit stack so that dropping a very deep
/// tree cannot exhaust the call stack
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Writes the bracket notation: `key`, `key(left)`, `key(,right)` or
/// `key(left,right)`
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)?;
        match (self.left(), self.right()) {
            (None, None) => Ok(()),
            (Some(left), None) => write!(f, "({})", left),
            (None, Some(right)) => write!(f, "(,{})", right),
            (Some(left), Some(right)) => write!(f, "({},{})", left, right),
        }
    }
}
