//! Connectivity motifs and the tiles that render them.

mod encoder;
mod mask;
mod tile;

pub use encoder::{derive_motif_grid, MotifGrid, TileRows};
pub use mask::{Direction, Motif};
pub use tile::{canonicalize, Rotation, TileCode, TileInstruction, TileShape};
