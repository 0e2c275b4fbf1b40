//! Mirror symmetry and the seam pre-collapse it implies.
//!
//! With mirror-X the last column of the base grid is the seam: the rendering
//! grid is the base grid plus its reflection, sharing that column. Mirror-Y
//! does the same with the last row. Seam nodes start in the reserved group 0
//! and edges running along the seam are committed to the tree up front
//! instead of being drawn randomly.

use serde::{Deserialize, Serialize};

use super::edge::{Axis, Edge};
use super::node::Node;
use super::topology::GridTopology;

/// Group label reserved for seam nodes.
pub const SEAM_GROUP: u32 = 0;

/// Which axes the rendered lattice is mirrored across.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symmetry {
    pub x: bool,
    pub y: bool,
}

impl Symmetry {
    pub const NONE: Self = Self { x: false, y: false };

    #[inline]
    pub fn new(x: bool, y: bool) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

/// Seam decisions for one lattice under one symmetry setting.
#[derive(Debug, Clone, Copy)]
pub struct SymmetryPlan {
    topology: GridTopology,
    symmetry: Symmetry,
}

impl SymmetryPlan {
    pub fn new(topology: GridTopology, symmetry: Symmetry) -> Self {
        Self { topology, symmetry }
    }

    #[inline]
    pub fn topology(&self) -> GridTopology {
        self.topology
    }

    #[inline]
    pub fn symmetry(&self) -> Symmetry {
        self.symmetry
    }

    /// Whether a node is collapsed into [`SEAM_GROUP`].
    ///
    /// The mirror-X column is checked before the mirror-Y row, so with both
    /// flags set the shared corner is claimed by the column rule.
    pub fn is_seam_node(&self, node: Node) -> bool {
        if self.symmetry.x && node.x == self.topology.width() - 1 {
            true
        } else {
            self.symmetry.y && node.y == self.topology.height() - 1
        }
    }

    /// Whether an edge runs along a seam and is pre-picked.
    pub fn is_prepicked(&self, edge: Edge) -> bool {
        let source = edge.source();
        match edge.axis() {
            Axis::Horizontal => self.symmetry.y && source.y == self.topology.height() - 1,
            Axis::Vertical => self.symmetry.x && source.x == self.topology.width() - 1,
        }
    }

    /// Initial group labels in row-major slot order.
    ///
    /// Labels are handed out column by column; the counter starts at 1 when
    /// any symmetry is active so that 0 stays reserved for the seam.
    pub fn initial_labels(&self) -> Vec<u32> {
        let mut labels = vec![SEAM_GROUP; self.topology.node_count()];
        let mut next = if self.symmetry.any() { 1 } else { 0 };
        for x in 0..self.topology.width() {
            for y in 0..self.topology.height() {
                let node = Node::new(x, y);
                if !self.is_seam_node(node) {
                    labels[self.topology.index(node)] = next;
                    next += 1;
                }
            }
        }
        labels
    }

    /// Split the lattice edges into `(prepicked, available)`, both in
    /// enumeration order.
    pub fn partition_edges(&self) -> (Vec<Edge>, Vec<Edge>) {
        self.topology
            .edges()
            .into_iter()
            .partition(|&edge| self.is_prepicked(edge))
    }

    /// Width of the mirrored rendering grid.
    pub fn render_width(&self) -> u32 {
        mirrored_extent(self.topology.width(), self.symmetry.x)
    }

    /// Height of the mirrored rendering grid.
    pub fn render_height(&self) -> u32 {
        mirrored_extent(self.topology.height(), self.symmetry.y)
    }
}

#[inline]
fn mirrored_extent(base: u32, mirrored: bool) -> u32 {
    if mirrored { base * 2 - 1 } else { base }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(w: u32, h: u32, x: bool, y: bool) -> SymmetryPlan {
        SymmetryPlan::new(GridTopology::new(w, h).unwrap(), Symmetry::new(x, y))
    }

    #[test]
    fn test_no_symmetry_labels_are_distinct() {
        let plan = plan(3, 2, false, false);
        let mut labels = plan.initial_labels();
        labels.sort();
        assert_eq!(labels, vec![0, 1, 2, 3, 4, 5]);
        let (prepicked, available) = plan.partition_edges();
        assert!(prepicked.is_empty());
        assert_eq!(available.len(), 7);
    }

    #[test]
    fn test_mirror_x_collapses_last_column() {
        let plan = plan(3, 3, true, false);
        let topology = plan.topology();
        let labels = plan.initial_labels();
        for node in topology.nodes() {
            let label = labels[topology.index(node)];
            if node.x == 2 {
                assert_eq!(label, SEAM_GROUP);
            } else {
                assert_ne!(label, SEAM_GROUP);
            }
        }

        let (prepicked, available) = plan.partition_edges();
        assert_eq!(prepicked, vec![Edge::vertical(2, 0), Edge::vertical(2, 1)]);
        assert_eq!(available.len(), topology.edge_count() - 2);
    }

    #[test]
    fn test_mirror_y_collapses_last_row() {
        let plan = plan(3, 2, false, true);
        let (prepicked, _) = plan.partition_edges();
        assert_eq!(prepicked, vec![Edge::horizontal(0, 1), Edge::horizontal(1, 1)]);
        assert!(plan.is_seam_node(Node::new(0, 1)));
        assert!(!plan.is_seam_node(Node::new(2, 0)));
    }

    #[test]
    fn test_corner_claimed_by_column_rule() {
        // Both rules would claim the corner; the column rule is checked first
        // and the label is the reserved seam group either way.
        let plan = plan(3, 3, true, true);
        let labels = plan.initial_labels();
        let corner = Node::new(2, 2);
        assert!(plan.is_seam_node(corner));
        assert_eq!(labels[plan.topology().index(corner)], SEAM_GROUP);

        let seam_count = labels.iter().filter(|&&l| l == SEAM_GROUP).count();
        assert_eq!(seam_count, 5);

        let mut free: Vec<_> = labels.into_iter().filter(|&l| l != SEAM_GROUP).collect();
        free.sort();
        assert_eq!(free, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_render_extent() {
        let mirrored_x = plan(3, 5, true, false);
        assert_eq!(mirrored_x.render_width(), 5);
        assert_eq!(mirrored_x.render_height(), 5);
        let mirrored_both = plan(4, 2, true, true);
        assert_eq!(mirrored_both.render_width(), 7);
        assert_eq!(mirrored_both.render_height(), 3);
    }
}
