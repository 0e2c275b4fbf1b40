//! Spatial indexing for O(log n) edge hit testing.
//!
//! This module places lattice nodes in screen space and provides an R-tree
//! over edge segments for nearest-edge queries.

mod geometry;
mod rtree;

pub use geometry::LatticeGeometry;
pub use rtree::{EdgeIndex, EdgeSegment};
