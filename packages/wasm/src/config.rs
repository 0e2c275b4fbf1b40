//! Lattice configuration.
//!
//! JavaScript hands over a plain object (`{ width, height, symX, symY, seed,
//! cellSize }`); any missing field falls back to its default.

use serde::{Deserialize, Serialize};

use crate::error::{LatticeError, Result};
use crate::grid::{GridTopology, Symmetry};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LatticeConfig {
    /// Base grid width in nodes (before mirroring).
    pub width: u32,
    /// Base grid height in nodes (before mirroring).
    pub height: u32,
    /// Mirror the rendering across the last column.
    pub sym_x: bool,
    /// Mirror the rendering across the last row.
    pub sym_y: bool,
    /// Fixed shuffle seed. `None` draws from entropy on every init.
    pub seed: Option<u64>,
    /// Edge length of one cell in screen units, used for hit testing.
    pub cell_size: f32,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            width: 3,
            height: 5,
            sym_x: true,
            sym_y: false,
            seed: None,
            cell_size: 50.0,
        }
    }
}

impl LatticeConfig {
    /// Check the configuration and build the lattice it describes.
    pub fn validate(&self) -> Result<GridTopology> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(LatticeError::InvalidConfig(format!(
                "cell size must be positive, got {}",
                self.cell_size
            )));
        }
        GridTopology::new(self.width, self.height)
    }

    #[inline]
    pub fn symmetry(&self) -> Symmetry {
        Symmetry::new(self.sym_x, self.sym_y)
    }
}
