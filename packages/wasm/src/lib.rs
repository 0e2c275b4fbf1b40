//! Lattice Tree - WASM Module
//!
//! This module builds random spanning trees over a rectangular lattice,
//! optionally mirror-symmetric, and turns the result into rotated tile
//! shapes for a lattice puzzle renderer. It is compiled to WebAssembly and
//! exposes a JavaScript-friendly API via wasm-bindgen.
//!
//! # Architecture
//!
//! - `grid`: Nodes, edges, lattice topology and mirror seams
//! - `tree`: Randomized Kruskal generation with relabel-scan grouping
//! - `motif`: Per-cell connectivity masks and their canonical tiles
//! - `spatial`: Screen placement and R-tree edge hit testing
//! - `controller`: Event-driven driver tying the pieces together

use js_sys::Float32Array;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod console;
pub mod controller;
pub mod error;
pub mod grid;
pub mod motif;
pub mod spatial;
pub mod tree;

use config::LatticeConfig;
use controller::{LatticeController, LatticeEvent};
use error::LatticeError;
use grid::{flatten_edges, Edge, EdgeSet, Node, Symmetry};
use motif::{MotifGrid, TileInstruction};
use spatial::LatticeGeometry;

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    console::install_panic_hook();
}

fn to_js(err: LatticeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Main entry point for the lattice.
///
/// This struct wraps the internal LatticeController and provides the public
/// API exposed to JavaScript.
#[wasm_bindgen]
pub struct LatticeWasm {
    controller: LatticeController,
}

#[wasm_bindgen]
impl LatticeWasm {
    /// Create a lattice from a config object.
    ///
    /// Accepts `{ width, height, symX, symY, seed, cellSize }`; missing
    /// fields (or a missing object) use the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<LatticeWasm, JsValue> {
        let config: LatticeConfig = if config.is_undefined() || config.is_null() {
            LatticeConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        let controller = LatticeController::new(config).map_err(to_js)?;
        Ok(Self { controller })
    }

    /// Create a lattice with the given size and mirroring, default otherwise.
    #[wasm_bindgen(js_name = withSize)]
    pub fn with_size(width: u32, height: u32, sym_x: bool, sym_y: bool) -> Result<LatticeWasm, JsValue> {
        let config = LatticeConfig {
            width,
            height,
            sym_x,
            sym_y,
            ..LatticeConfig::default()
        };
        let controller = LatticeController::new(config).map_err(to_js)?;
        Ok(Self { controller })
    }

    // =========================================================================
    // Generation
    // =========================================================================

    /// Process one edge. Returns false if generation had already finished.
    pub fn advance(&mut self) -> Result<bool, JsValue> {
        self.dispatch(LatticeEvent::Advance)
    }

    /// Process every remaining edge.
    #[wasm_bindgen(js_name = generateComplete)]
    pub fn generate_complete(&mut self) -> Result<bool, JsValue> {
        self.dispatch(LatticeEvent::Complete)
    }

    /// Re-init with a new shuffle and an empty tree.
    pub fn reset(&mut self) -> Result<bool, JsValue> {
        self.dispatch(LatticeEvent::Reset)
    }

    /// Re-init and generate a complete tree.
    pub fn regenerate(&mut self) -> Result<bool, JsValue> {
        self.dispatch(LatticeEvent::Regenerate)
    }

    #[wasm_bindgen(js_name = isFinished)]
    pub fn is_finished(&self) -> bool {
        self.controller.state().is_finished()
    }

    /// Change the base grid size. Re-inits the tree.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<bool, JsValue> {
        self.dispatch(LatticeEvent::Resize { width, height })
    }

    /// Change the mirror axes. Re-inits the tree.
    #[wasm_bindgen(js_name = setSymmetry)]
    pub fn set_symmetry(&mut self, sym_x: bool, sym_y: bool) -> Result<bool, JsValue> {
        self.dispatch(LatticeEvent::SetSymmetry(Symmetry::new(sym_x, sym_y)))
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Toggle the edge between `(x1, y1)` and `(x2, y2)` in or out of the tree.
    ///
    /// Throws if the nodes are not adjacent, the edge is outside the lattice,
    /// or picking it would close a cycle.
    #[wasm_bindgen(js_name = toggleEdge)]
    pub fn toggle_edge(&mut self, x1: u32, y1: u32, x2: u32, y2: u32) -> Result<bool, JsValue> {
        let edge = Edge::new(Node::new(x1, y1), Node::new(x2, y2)).map_err(to_js)?;
        self.dispatch(LatticeEvent::ToggleEdge(edge))
    }

    /// Toggle the edge nearest to a screen-space point.
    ///
    /// Returns false if no edge is within `max_distance`.
    #[wasm_bindgen(js_name = toggleNearestEdge)]
    pub fn toggle_nearest_edge(&mut self, x: f32, y: f32, max_distance: f32) -> Result<bool, JsValue> {
        self.dispatch(LatticeEvent::ToggleNearest { x, y, max_distance })
    }

    /// Which set holds an edge: 0 = available, 1 = picked, 2 = discarded.
    #[wasm_bindgen(js_name = edgeMembership)]
    pub fn edge_membership(&self, x1: u32, y1: u32, x2: u32, y2: u32) -> Option<u8> {
        let edge = Edge::new(Node::new(x1, y1), Node::new(x2, y2)).ok()?;
        self.controller.state().membership(edge).map(|set| set as u8)
    }

    // =========================================================================
    // Edge Buffers
    // =========================================================================

    /// Picked edges as `[x1, y1, x2, y2, ...]`, in build order.
    #[wasm_bindgen(js_name = pickedEdges)]
    pub fn picked_edges(&self) -> Vec<u32> {
        flatten_edges(self.controller.edges(EdgeSet::Picked))
    }

    /// Available edges as `[x1, y1, x2, y2, ...]`, next-to-process last.
    #[wasm_bindgen(js_name = availableEdges)]
    pub fn available_edges(&self) -> Vec<u32> {
        flatten_edges(self.controller.edges(EdgeSet::Available))
    }

    /// Discarded edges as `[x1, y1, x2, y2, ...]`.
    #[wasm_bindgen(js_name = discardedEdges)]
    pub fn discarded_edges(&self) -> Vec<u32> {
        flatten_edges(self.controller.edges(EdgeSet::Discarded))
    }

    /// Screen-space segments `[ax, ay, bx, by, ...]` for one edge set
    /// (0 = available, 1 = picked, 2 = discarded).
    #[wasm_bindgen(js_name = edgeSegments)]
    pub fn edge_segments(&self, set: u8) -> Result<Float32Array, JsValue> {
        let set = EdgeSet::from_u8(set)
            .ok_or_else(|| JsValue::from_str(&format!("unknown edge set {set}")))?;
        let segments = segment_buffer(self.controller.edges(set), self.controller.geometry());
        Ok(Float32Array::from(&segments[..]))
    }

    /// Number of connected components in the picked forest.
    #[wasm_bindgen(js_name = componentCount)]
    pub fn component_count(&self) -> u32 {
        self.controller.state().component_count() as u32
    }

    // =========================================================================
    // Tiles
    // =========================================================================

    /// Width of the (mirrored) tile grid.
    #[wasm_bindgen(js_name = tileWidth)]
    pub fn tile_width(&self) -> u32 {
        self.controller.state().plan().render_width()
    }

    /// Height of the (mirrored) tile grid.
    #[wasm_bindgen(js_name = tileHeight)]
    pub fn tile_height(&self) -> u32 {
        self.controller.state().plan().render_height()
    }

    /// Tiles as `[shape0, degrees0, shape1, degrees1, ...]` in row-major order.
    pub fn tiles(&self) -> Vec<u16> {
        tile_buffer(&self.controller.motif_grid())
    }

    /// Tiles as rows of `{ shape, degrees }` objects.
    #[wasm_bindgen(js_name = tileGrid)]
    pub fn tile_grid(&self) -> Result<JsValue, JsValue> {
        let rows = self.controller.motif_grid().tile_rows();
        Ok(serde_wasm_bindgen::to_value(&rows)?)
    }
}

impl LatticeWasm {
    fn dispatch(&mut self, event: LatticeEvent) -> Result<bool, JsValue> {
        self.controller.update(event).map_err(to_js)
    }
}

/// Interleave tile shape ids and rotation degrees.
fn tile_buffer(grid: &MotifGrid) -> Vec<u16> {
    let tiles = grid.tiles();
    let mut buffer = Vec::with_capacity(tiles.len() * 2);
    for tile in tiles {
        let instruction = TileInstruction::from(tile);
        buffer.push(u16::from(instruction.shape));
        buffer.push(instruction.degrees);
    }
    buffer
}

/// Flatten edges into screen-space segment endpoints.
fn segment_buffer(edges: &[Edge], geometry: &LatticeGeometry) -> Vec<f32> {
    let mut buffer = Vec::with_capacity(edges.len() * 4);
    for &edge in edges {
        let [[ax, ay], [bx, by]] = geometry.segment(edge);
        buffer.extend([ax, ay, bx, by]);
    }
    buffer
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use grid::GridTopology;
    use motif::{derive_motif_grid, TileShape};
    use petgraph::algo::is_cyclic_undirected;

    fn seeded(width: u32, height: u32, sym_x: bool, sym_y: bool, seed: u64) -> LatticeController {
        LatticeController::new(LatticeConfig {
            width,
            height,
            sym_x,
            sym_y,
            seed: Some(seed),
            cell_size: 50.0,
        })
        .unwrap()
    }

    /// Test the full pipeline: config → generation → motifs → tile buffer.
    /// This mirrors what the renderer pulls after every frame, without
    /// wasm_bindgen JS types.
    #[test]
    fn test_default_puzzle_pipeline() {
        let mut controller = LatticeController::new(LatticeConfig {
            seed: Some(7),
            ..LatticeConfig::default()
        })
        .unwrap();

        // Default lattice: 3x5 mirrored across the last column.
        assert_eq!(controller.state().picked().len(), 4);
        controller.update(LatticeEvent::Complete).unwrap();
        assert_eq!(controller.state().picked().len(), 14);

        let grid = controller.motif_grid();
        assert_eq!((grid.width(), grid.height()), (5, 5));

        let buffer = tile_buffer(&grid);
        assert_eq!(buffer.len(), 5 * 5 * 2);
        for pair in buffer.chunks(2) {
            assert!(pair[0] <= 5);
            assert!(matches!(pair[1], 0 | 90 | 180 | 270));
            // Every tile in a spanning tree touches at least one neighbor.
            assert_ne!(pair[0], TileShape::Isolated as u16);
        }
    }

    /// Step-by-step generation matches bulk generation for the same seed.
    #[test]
    fn test_stepwise_matches_bulk() {
        let mut stepwise = seeded(6, 4, false, true, 99);
        let mut bulk = seeded(6, 4, false, true, 99);

        while stepwise.update(LatticeEvent::Advance).unwrap() {}
        bulk.update(LatticeEvent::Complete).unwrap();

        assert_eq!(stepwise.state().picked(), bulk.state().picked());
        assert_eq!(stepwise.tiles(), bulk.tiles());
    }

    /// Unpicking and repicking edges keeps the lattice a forest and the
    /// tiles consistent with the picked set.
    #[test]
    fn test_edit_session() {
        let mut controller = seeded(5, 5, true, true, 3);
        controller.update(LatticeEvent::Complete).unwrap();

        let removed = controller.state().picked()[5];
        controller.update(LatticeEvent::ToggleEdge(removed)).unwrap();
        assert_eq!(controller.state().component_count(), 2);
        assert!(!is_cyclic_undirected(&controller.state().forest()));

        // Every remaining available edge reconnects the two halves.
        let available = controller.state().available().to_vec();
        assert!(available.contains(&removed));
        for edge in &available {
            assert!(controller.state().can_pick(*edge));
        }

        let rejoin = available[0];
        controller.update(LatticeEvent::ToggleEdge(rejoin)).unwrap();
        assert_eq!(controller.state().component_count(), 1);
        assert!(controller.state().available().is_empty());

        let expected = derive_motif_grid(
            controller.state().picked(),
            controller.state().topology(),
            Symmetry::new(true, true),
        );
        assert_eq!(controller.motif_grid(), expected);
    }

    #[test]
    fn test_segment_buffer() {
        let topology = GridTopology::new(2, 2).unwrap();
        let geometry = LatticeGeometry::new(topology, 10.0);
        let buffer = segment_buffer(&[Edge::horizontal(0, 0), Edge::vertical(1, 0)], &geometry);
        assert_eq!(
            buffer,
            vec![-5.0, -5.0, 5.0, -5.0, 5.0, -5.0, 5.0, 5.0]
        );
    }

    #[test]
    fn test_tile_buffer_for_straight_line() {
        let topology = GridTopology::new(3, 1).unwrap();
        let grid = derive_motif_grid(
            &[Edge::horizontal(0, 0), Edge::horizontal(1, 0)],
            topology,
            Symmetry::NONE,
        );
        // Dead end facing right, straight, dead end facing left.
        assert_eq!(tile_buffer(&grid), vec![1, 180, 3, 0, 1, 0]);
    }
}
