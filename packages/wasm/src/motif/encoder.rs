//! Derive per-cell connectivity from the picked edges.
//!
//! The tree is only generated over the base grid. When a mirror flag is set
//! the rendering grid is the base grid plus its reflection (sharing the seam
//! row/column), and every picked edge is stamped again into each reflected
//! copy with its sides swapped along the mirrored axis.

use serde::Serialize;

use super::mask::{Direction, Motif};
use super::tile::{canonicalize, TileCode};
use crate::grid::{Axis, Edge, GridTopology, Node, Symmetry, SymmetryPlan};

/// A rendering-grid of motifs, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifGrid {
    width: u32,
    height: u32,
    cells: Vec<Motif>,
}

impl MotifGrid {
    /// An unconnected grid.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![Motif::new(); (width * height) as usize],
        }
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
    pub fn get(&self, x: u32, y: u32) -> Motif {
        self.cells[(y * self.width + x) as usize]
    }

    #[inline]
    fn connect(&mut self, node: Node, direction: Direction) {
        self.cells[(node.y * self.width + node.x) as usize].connect(direction);
    }

    /// Motifs in row-major order.
    pub fn cells(&self) -> &[Motif] {
        &self.cells
    }

    /// Canonical tiles in row-major order.
    pub fn tiles(&self) -> Vec<TileCode> {
        self.cells.iter().map(|&motif| canonicalize(motif)).collect()
    }

    /// Canonical tiles grouped by row.
    pub fn tile_rows(&self) -> TileRows {
        TileRows(
            self.tiles()
                .chunks(self.width as usize)
                .map(<[TileCode]>::to_vec)
                .collect(),
        )
    }
}

/// Row-grouped tiles, serialized as a nested array for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TileRows(pub Vec<Vec<TileCode>>);

/// Build the motif grid for `picked` over `topology`, mirrored per `symmetry`.
pub fn derive_motif_grid(picked: &[Edge], topology: GridTopology, symmetry: Symmetry) -> MotifGrid {
    let plan = SymmetryPlan::new(topology, symmetry);
    let width = plan.render_width();
    let height = plan.render_height();
    let mut grid = MotifGrid::new(width, height);

    let reflect_x = |node: Node| Node::new(width - 1 - node.x, node.y);
    let reflect_y = |node: Node| Node::new(node.x, height - 1 - node.y);

    for &edge in picked {
        let (source, destination) = (edge.source(), edge.destination());
        let (out, back) = match edge.axis() {
            Axis::Horizontal => (Direction::Right, Direction::Left),
            Axis::Vertical => (Direction::Up, Direction::Down),
        };

        grid.connect(source, out);
        grid.connect(destination, back);

        if symmetry.x {
            grid.connect(reflect_x(source), out.mirror_x());
            grid.connect(reflect_x(destination), back.mirror_x());
        }
        if symmetry.y {
            grid.connect(reflect_y(source), out.mirror_y());
            grid.connect(reflect_y(destination), back.mirror_y());
        }
        if symmetry.x && symmetry.y {
            grid.connect(reflect_x(reflect_y(source)), out.mirror_x().mirror_y());
            grid.connect(reflect_x(reflect_y(destination)), back.mirror_x().mirror_y());
        }
    }

    grid
}
