//! Edge type and related structures.
//!
//! Edges are axis-aligned connections between two adjacent lattice nodes.
//! Each edge has:
//! - A source and destination node, stored with the lower coordinate first
//! - An axis (horizontal or vertical)
//!
//! Equality is by value, so `Edge::new(a, b)` and `Edge::new(b, a)` are the
//! same edge.

use serde::Serialize;
use std::fmt;

use super::node::Node;
use crate::error::{LatticeError, Result};

/// Orientation of an edge within the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Axis {
    /// Endpoints share `y` and differ by one in `x`.
    Horizontal,
    /// Endpoints share `x` and differ by one in `y`.
    Vertical,
}

/// An axis-aligned unit edge between two adjacent nodes.
///
/// Diagonal or non-adjacent edges cannot be constructed, so every `Edge` is
/// classifiable as exactly one [`Axis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    source: Node,
    destination: Node,
}

impl Edge {
    /// Create an edge between two adjacent nodes, in either order.
    pub fn new(a: Node, b: Node) -> Result<Self> {
        if !a.is_adjacent(b) {
            return Err(LatticeError::NotAdjacent { from: a, to: b });
        }
        let (source, destination) = if a < b { (a, b) } else { (b, a) };
        Ok(Self {
            source,
            destination,
        })
    }

    /// The edge from `(x, y)` to `(x + 1, y)`.
    #[inline]
    pub fn horizontal(x: u32, y: u32) -> Self {
        Self {
            source: Node::new(x, y),
            destination: Node::new(x + 1, y),
        }
    }

    /// The edge from `(x, y)` to `(x, y + 1)`.
    #[inline]
    pub fn vertical(x: u32, y: u32) -> Self {
        Self {
            source: Node::new(x, y),
            destination: Node::new(x, y + 1),
        }
    }

    /// The endpoint with the lower coordinate.
    #[inline]
    pub fn source(self) -> Node {
        self.source
    }

    /// The endpoint with the higher coordinate.
    #[inline]
    pub fn destination(self) -> Node {
        self.destination
    }

    #[inline]
    pub fn axis(self) -> Axis {
        if self.source.y == self.destination.y {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    /// Flatten into `[x1, y1, x2, y2]`.
    #[inline]
    pub fn to_array(self) -> [u32; 4] {
        [
            self.source.x,
            self.source.y,
            self.destination.x,
            self.destination.y,
        ]
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Edge({}, {} -> {}, {})",
            self.source.x, self.source.y, self.destination.x, self.destination.y
        )
    }
}

/// Which of the three edge sets of a spanning tree state holds an edge.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EdgeSet {
    /// Not yet processed.
    Available = 0,
    /// Part of the tree.
    Picked = 1,
    /// Rejected because it would close a cycle.
    Discarded = 2,
}

impl EdgeSet {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Available),
            1 => Some(Self::Picked),
            2 => Some(Self::Discarded),
            _ => None,
        }
    }
}

/// Flatten edges into `[x1, y1, x2, y2, ...]`.
pub fn flatten_edges(edges: &[Edge]) -> Vec<u32> {
    edges.iter().flat_map(|edge| edge.to_array()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_is_order_independent() {
        let a = Node::new(1, 2);
        let b = Node::new(2, 2);
        let forward = Edge::new(a, b).unwrap();
        let backward = Edge::new(b, a).unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.source(), a);
        assert_eq!(forward.destination(), b);
    }

    #[test]
    fn test_edge_rejects_non_adjacent() {
        let err = Edge::new(Node::new(0, 0), Node::new(1, 1)).unwrap_err();
        assert!(matches!(err, LatticeError::NotAdjacent { .. }));
        assert!(Edge::new(Node::new(0, 0), Node::new(0, 0)).is_err());
        assert!(Edge::new(Node::new(0, 0), Node::new(0, 2)).is_err());
    }

    #[test]
    fn test_edge_axis() {
        assert_eq!(Edge::horizontal(0, 3).axis(), Axis::Horizontal);
        assert_eq!(Edge::vertical(4, 0).axis(), Axis::Vertical);
        let built = Edge::new(Node::new(2, 1), Node::new(2, 0)).unwrap();
        assert_eq!(built, Edge::vertical(2, 0));
        assert_eq!(built.axis(), Axis::Vertical);
    }

    #[test]
    fn test_edge_display_and_flatten() {
        let edge = Edge::horizontal(0, 1);
        assert_eq!(format!("{}", edge), "Edge(0, 1 -> 1, 1)");
        assert_eq!(
            flatten_edges(&[edge, Edge::vertical(2, 3)]),
            vec![0, 1, 1, 1, 2, 3, 2, 4]
        );
    }

    #[test]
    fn test_edge_set_from_u8() {
        assert_eq!(EdgeSet::from_u8(0), Some(EdgeSet::Available));
        assert_eq!(EdgeSet::from_u8(1), Some(EdgeSet::Picked));
        assert_eq!(EdgeSet::from_u8(2), Some(EdgeSet::Discarded));
        assert_eq!(EdgeSet::from_u8(3), None);
    }
}
