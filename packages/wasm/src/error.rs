//! Error type shared by the lattice modules.
//!
//! Every variant is a caller error: the operation that returns it leaves the
//! state untouched.

use thiserror::Error;

use crate::grid::{Edge, Node};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LatticeError {
    /// `process_next_edge` was called with no available edges left.
    #[error("no available edges left to process")]
    InvalidState,

    /// The edge is not tracked by the spanning tree state.
    #[error("{0} is not an edge of this lattice")]
    UnknownEdge(Edge),

    /// Two nodes that are not one axis-aligned step apart.
    #[error("{from} and {to} are not adjacent")]
    NotAdjacent { from: Node, to: Node },

    /// Picking the edge would join two nodes that are already connected.
    #[error("picking {0} would close a cycle")]
    WouldCloseCycle(Edge),

    #[error("invalid lattice configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, LatticeError>;
