//! Lattice topology.
//!
//! Nodes are plain coordinates, edges are validated axis-aligned unit steps,
//! and a [`SymmetryPlan`] decides which parts of the lattice are fixed by a
//! mirror seam before any randomness is drawn.

mod edge;
mod node;
mod symmetry;
mod topology;

pub use edge::{flatten_edges, Axis, Edge, EdgeSet};
pub use node::Node;
pub use symmetry::{Symmetry, SymmetryPlan, SEAM_GROUP};
pub use topology::{GridTopology, MAX_DIMENSION};
