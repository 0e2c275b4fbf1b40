//! The W×H node lattice and its axis-aligned neighbor edges.

use super::edge::Edge;
use super::node::Node;
use crate::error::{LatticeError, Result};

/// Largest supported side length. Puzzle grids are tens of cells wide.
pub const MAX_DIMENSION: u32 = 256;

/// Dimensions of the base lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridTopology {
    width: u32,
    height: u32,
}

impl GridTopology {
    /// Create a lattice of `width × height` nodes.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LatticeError::InvalidConfig(format!(
                "grid must be at least 1x1, got {width}x{height}"
            )));
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(LatticeError::InvalidConfig(format!(
                "grid {width}x{height} exceeds {MAX_DIMENSION}x{MAX_DIMENSION}"
            )));
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        (self.width * self.height) as usize
    }

    /// Total number of neighbor edges: `(W-1)·H + W·(H-1)`.
    pub fn edge_count(&self) -> usize {
        ((self.width - 1) * self.height + self.width * (self.height - 1)) as usize
    }

    #[inline]
    pub fn contains(&self, node: Node) -> bool {
        node.x < self.width && node.y < self.height
    }

    /// Row-major slot of a node.
    #[inline]
    pub fn index(&self, node: Node) -> usize {
        (node.y * self.width + node.x) as usize
    }

    /// Node at a row-major slot.
    #[inline]
    pub fn node_at(&self, index: usize) -> Node {
        let index = index as u32;
        Node::new(index % self.width, index / self.width)
    }

    /// All nodes in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        (0..self.node_count()).map(|i| self.node_at(i))
    }

    /// Whether `edge` lies inside the lattice.
    pub fn has_edge(&self, edge: Edge) -> bool {
        self.contains(edge.source()) && self.contains(edge.destination())
    }

    /// Every neighbor edge.
    ///
    /// Enumerated column by column: for each node, the edge to its right
    /// neighbor (if any) followed by the edge to the neighbor below (if any).
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for x in 0..self.width {
            for y in 0..self.height {
                if x != self.width - 1 {
                    edges.push(Edge::horizontal(x, y));
                }
                if y != self.height - 1 {
                    edges.push(Edge::vertical(x, y));
                }
            }
        }
        edges
    }
}
