//! Spanning tree generation and editing.

mod grouping;
mod state;

pub use grouping::Grouping;
pub use state::{EdgeOutcome, SpanningTreeState};
