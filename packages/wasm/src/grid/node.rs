//! Lattice node coordinates.
//!
//! A node is identified purely by its position in the grid. There is no
//! separate id: two nodes are the same node iff their coordinates match.

use serde::Serialize;
use std::fmt;

/// A cell of the base lattice.
///
/// Ordering is row-major (`y` first, then `x`), matching the order in which
/// [`GridTopology::index`](super::GridTopology::index) lays nodes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Node {
    pub x: u32,
    pub y: u32,
}

impl Node {
    /// Create a node at `(x, y)`.
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Whether `other` is exactly one step away along a single axis.
    pub fn is_adjacent(self, other: Node) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx + dy == 1
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({}, {})", self.x, self.y)
    }
}

impl From<(u32, u32)> for Node {
    #[inline]
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl From<Node> for (u32, u32) {
    #[inline]
    fn from(node: Node) -> Self {
        (node.x, node.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_display() {
        let node = Node::new(3, 4);
        assert_eq!(format!("{}", node), "Node(3, 4)");
    }

    #[test]
    fn test_node_conversion() {
        let node: Node = (7, 2).into();
        let raw: (u32, u32) = node.into();
        assert_eq!(raw, (7, 2));
    }

    #[test]
    fn test_adjacency() {
        let a = Node::new(1, 1);
        assert!(a.is_adjacent(Node::new(2, 1)));
        assert!(a.is_adjacent(Node::new(1, 0)));
        assert!(!a.is_adjacent(Node::new(2, 2)));
        assert!(!a.is_adjacent(Node::new(1, 1)));
        assert!(!a.is_adjacent(Node::new(3, 1)));
    }

    #[test]
    fn test_row_major_order() {
        let mut nodes = vec![Node::new(1, 0), Node::new(0, 1), Node::new(0, 0)];
        nodes.sort();
        assert_eq!(nodes, vec![Node::new(0, 0), Node::new(1, 0), Node::new(0, 1)]);
    }
}
