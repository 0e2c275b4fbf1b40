//! Screen-space placement of lattice nodes.
//!
//! The lattice is centered on the origin: node `(x, y)` sits at
//! `min + (x + 0.5, y + 0.5) * cell_size` with `min = -(W/2, H/2) * cell_size`.

use crate::grid::{Edge, GridTopology, Node};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeGeometry {
    width: u32,
    height: u32,
    cell_size: f32,
}

impl LatticeGeometry {
    pub fn new(topology: GridTopology, cell_size: f32) -> Self {
        Self {
            width: topology.width(),
            height: topology.height(),
            cell_size,
        }
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Top-left corner of the lattice.
    pub fn min(&self) -> [f32; 2] {
        [
            -(self.width as f32 / 2.0) * self.cell_size,
            -(self.height as f32 / 2.0) * self.cell_size,
        ]
    }

    pub fn node_center(&self, node: Node) -> [f32; 2] {
        let [min_x, min_y] = self.min();
        [
            min_x + (node.x as f32 + 0.5) * self.cell_size,
            min_y + (node.y as f32 + 0.5) * self.cell_size,
        ]
    }

    /// Segment between the centers of an edge's endpoints.
    pub fn segment(&self, edge: Edge) -> [[f32; 2]; 2] {
        [self.node_center(edge.source()), self.node_center(edge.destination())]
    }

    /// The cell under a point, if any.
    pub fn node_at(&self, x: f32, y: f32) -> Option<Node> {
        let [min_x, min_y] = self.min();
        let cx = ((x - min_x) / self.cell_size).floor();
        let cy = ((y - min_y) / self.cell_size).floor();
        if cx < 0.0 || cy < 0.0 || cx >= self.width as f32 || cy >= self.height as f32 {
            return None;
        }
        Some(Node::new(cx as u32, cy as u32))
    }
}
