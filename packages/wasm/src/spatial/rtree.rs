//! R-tree based edge index using the rstar crate.
//!
//! Every lattice edge is stored as the segment between its endpoint centers,
//! giving O(log n) answers to "which edge is under the pointer".

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use super::geometry::LatticeGeometry;
use crate::grid::Edge;

/// An edge segment in the index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSegment {
    pub edge: Edge,
    pub from: [f32; 2],
    pub to: [f32; 2],
}

impl EdgeSegment {
    pub fn new(edge: Edge, geometry: &LatticeGeometry) -> Self {
        let [from, to] = geometry.segment(edge);
        Self { edge, from, to }
    }
}

impl RTreeObject for EdgeSegment {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.from, self.to)
    }
}

impl PointDistance for EdgeSegment {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let [ax, ay] = self.from;
        let [bx, by] = self.to;
        let (dx, dy) = (bx - ax, by - ay);
        let len_2 = dx * dx + dy * dy;
        let t = if len_2 > 0.0 {
            (((point[0] - ax) * dx + (point[1] - ay) * dy) / len_2).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let px = ax + t * dx - point[0];
        let py = ay + t * dy - point[1];
        px * px + py * py
    }

    fn contains_point(&self, point: &[f32; 2]) -> bool {
        self.distance_2(point) < f32::EPSILON
    }
}

/// Spatial index over lattice edges.
pub struct EdgeIndex {
    tree: RTree<EdgeSegment>,
}

impl EdgeIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Bulk load every edge at its position under `geometry`.
    pub fn build(edges: &[Edge], geometry: &LatticeGeometry) -> Self {
        let segments = edges
            .iter()
            .map(|&edge| EdgeSegment::new(edge, geometry))
            .collect();
        Self {
            tree: RTree::bulk_load(segments),
        }
    }

    /// Find the edge nearest to a point.
    pub fn nearest(&self, x: f32, y: f32) -> Option<Edge> {
        self.tree.nearest_neighbor(&[x, y]).map(|segment| segment.edge)
    }

    /// Find the nearest edge within a maximum distance.
    pub fn nearest_within(&self, x: f32, y: f32, max_distance: f32) -> Option<Edge> {
        let max_distance_sq = max_distance * max_distance;
        self.tree
            .nearest_neighbor(&[x, y])
            .filter(|segment| segment.distance_2(&[x, y]) <= max_distance_sq)
            .map(|segment| segment.edge)
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl Default for EdgeIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridTopology;

    fn index() -> (EdgeIndex, LatticeGeometry) {
        let topology = GridTopology::new(3, 3).unwrap();
        let geometry = LatticeGeometry::new(topology, 10.0);
        (EdgeIndex::build(&topology.edges(), &geometry), geometry)
    }

    #[test]
    fn test_segment_distance() {
        let segment = EdgeSegment {
            edge: Edge::horizontal(0, 0),
            from: [0.0, 0.0],
            to: [10.0, 0.0],
        };
        assert_eq!(segment.distance_2(&[5.0, 3.0]), 9.0);
        assert_eq!(segment.distance_2(&[-4.0, 3.0]), 25.0);
        assert_eq!(segment.distance_2(&[13.0, 0.0]), 9.0);
        assert!(segment.contains_point(&[2.0, 0.0]));
    }

    #[test]
    fn test_nearest_edge() {
        let (index, geometry) = index();
        assert_eq!(index.len(), 12);

        // Midpoint between the centers of (0, 0) and (1, 0).
        let [ax, ay] = geometry.node_center(crate::grid::Node::new(0, 0));
        assert_eq!(index.nearest(ax + 5.0, ay + 1.0), Some(Edge::horizontal(0, 0)));

        // Just below the middle of the vertical edge from (2, 1) to (2, 2).
        let [bx, by] = geometry.node_center(crate::grid::Node::new(2, 1));
        assert_eq!(index.nearest(bx + 1.0, by + 5.0), Some(Edge::vertical(2, 1)));
    }

    #[test]
    fn test_nearest_within() {
        let (index, _) = index();
        assert!(index.nearest_within(0.0, 5.0, 1.0).is_some());
        assert_eq!(index.nearest_within(100.0, 100.0, 5.0), None);
    }

    #[test]
    fn test_empty_index() {
        let index = EdgeIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.nearest(0.0, 0.0), None);
    }
}
