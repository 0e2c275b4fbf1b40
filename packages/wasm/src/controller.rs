//! Event-driven lattice controller.
//!
//! Input handling is reduced to a [`LatticeEvent`] stream; [`LatticeController::update`]
//! is the only place that mutates the tree, the configuration, or the hit
//! testing index.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::LatticeConfig;
use crate::error::Result;
use crate::grid::{Edge, EdgeSet, Symmetry};
use crate::motif::{derive_motif_grid, MotifGrid, TileCode};
use crate::spatial::{EdgeIndex, LatticeGeometry};
use crate::tree::SpanningTreeState;
use crate::{console_log, console_warn};

/// Something the user asked the lattice to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LatticeEvent {
    /// Process one available edge.
    Advance,
    /// Re-init with a fresh shuffle, leaving the tree empty.
    Reset,
    /// Re-init and run generation to completion.
    Regenerate,
    /// Run the current generation to completion.
    Complete,
    /// Flip one edge in or out of the tree.
    ToggleEdge(Edge),
    /// Flip the edge nearest to a screen-space point.
    ToggleNearest { x: f32, y: f32, max_distance: f32 },
    /// Change the base grid size and re-init.
    Resize { width: u32, height: u32 },
    /// Change the mirror axes and re-init.
    SetSymmetry(Symmetry),
}

pub struct LatticeController {
    config: LatticeConfig,
    rng: ChaCha8Rng,
    state: SpanningTreeState,
    geometry: LatticeGeometry,
    edge_index: EdgeIndex,
}

impl LatticeController {
    /// Validate `config` and initialize an empty tree.
    pub fn new(config: LatticeConfig) -> Result<Self> {
        let topology = config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let state = SpanningTreeState::new(topology, config.symmetry(), &mut rng);
        let geometry = LatticeGeometry::new(topology, config.cell_size);
        let edge_index = EdgeIndex::build(&topology.edges(), &geometry);

        let controller = Self {
            config,
            rng,
            state,
            geometry,
            edge_index,
        };
        controller.log_init();
        Ok(controller)
    }

    /// Apply one event. Returns whether the tree changed.
    pub fn update(&mut self, event: LatticeEvent) -> Result<bool> {
        let result = self.apply(event);
        if let Err(err) = &result {
            console_warn!("lattice: {:?} rejected: {}", event, err);
        }
        result
    }

    fn apply(&mut self, event: LatticeEvent) -> Result<bool> {
        match event {
            LatticeEvent::Advance => {
                if self.state.is_finished() {
                    return Ok(false);
                }
                self.state.process_next_edge()?;
                if self.state.is_finished() {
                    console_log!(
                        "lattice: generation finished, {} edges picked",
                        self.state.picked().len()
                    );
                }
                Ok(true)
            }
            LatticeEvent::Reset => {
                self.reinit();
                Ok(true)
            }
            LatticeEvent::Regenerate => {
                self.reinit();
                self.complete();
                Ok(true)
            }
            LatticeEvent::Complete => Ok(self.complete() > 0),
            LatticeEvent::ToggleEdge(edge) => self.toggle(edge),
            LatticeEvent::ToggleNearest { x, y, max_distance } => {
                match self.edge_index.nearest_within(x, y, max_distance) {
                    Some(edge) => self.toggle(edge),
                    None => Ok(false),
                }
            }
            LatticeEvent::Resize { width, height } => {
                self.reconfigure(LatticeConfig {
                    width,
                    height,
                    ..self.config.clone()
                })?;
                Ok(true)
            }
            LatticeEvent::SetSymmetry(symmetry) => {
                self.reconfigure(LatticeConfig {
                    sym_x: symmetry.x,
                    sym_y: symmetry.y,
                    ..self.config.clone()
                })?;
                Ok(true)
            }
        }
    }

    fn reinit(&mut self) {
        let topology = self.state.topology();
        self.state.init(topology, self.config.symmetry(), &mut self.rng);
        self.log_init();
    }

    fn reconfigure(&mut self, config: LatticeConfig) -> Result<()> {
        let topology = config.validate()?;
        self.config = config;
        self.geometry = LatticeGeometry::new(topology, self.config.cell_size);
        self.edge_index = EdgeIndex::build(&topology.edges(), &self.geometry);
        self.state.init(topology, self.config.symmetry(), &mut self.rng);
        self.log_init();
        Ok(())
    }

    fn complete(&mut self) -> usize {
        let steps = self.state.generate_complete();
        console_log!(
            "lattice: completed in {} steps, {} picked, {} discarded",
            steps,
            self.state.picked().len(),
            self.state.discarded().len()
        );
        steps
    }

    fn toggle(&mut self, edge: Edge) -> Result<bool> {
        let set = self.state.toggle_edge(edge)?;
        console_log!(
            "lattice: toggled {} into {:?}; {} available, {} discarded",
            edge,
            set,
            self.state.available().len(),
            self.state.discarded().len()
        );
        Ok(true)
    }

    fn log_init(&self) {
        let topology = self.state.topology();
        console_log!(
            "lattice: init {}x{} sym_x={} sym_y={}, {} available, {} seam edges",
            topology.width(),
            topology.height(),
            self.config.sym_x,
            self.config.sym_y,
            self.state.available().len(),
            self.state.picked().len()
        );
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &LatticeConfig {
        &self.config
    }

    pub fn state(&self) -> &SpanningTreeState {
        &self.state
    }

    pub fn geometry(&self) -> &LatticeGeometry {
        &self.geometry
    }

    pub fn edges(&self, set: EdgeSet) -> &[Edge] {
        self.state.edges(set)
    }

    /// Motifs for the current tree under the configured mirroring.
    pub fn motif_grid(&self) -> MotifGrid {
        derive_motif_grid(self.state.picked(), self.state.topology(), self.config.symmetry())
    }

    /// Canonical tiles in row-major order of the rendering grid.
    pub fn tiles(&self) -> Vec<TileCode> {
        self.motif_grid().tiles()
    }
}
