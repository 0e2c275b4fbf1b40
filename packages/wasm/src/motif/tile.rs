//! Canonical tile shapes.
//!
//! The 16 possible motifs collapse into six rotation classes. Each motif maps
//! to a shape plus the quarter turns the renderer applies to the shape's
//! base orientation.

use serde::Serialize;

use super::mask::Motif;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileShape {
    /// No connections.
    Isolated = 0,
    /// One connection.
    DeadEnd = 1,
    /// Two adjacent connections.
    Corner = 2,
    /// Two opposite connections.
    Straight = 3,
    /// Three connections.
    Junction = 4,
    /// All four connections.
    Cross = 5,
}

impl TileShape {
    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }
}

/// Quarter turns applied to a tile shape.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    Deg0 = 0,
    Deg90 = 1,
    Deg180 = 2,
    Deg270 = 3,
}

impl Rotation {
    #[inline]
    pub fn steps(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn degrees(self) -> u16 {
        u16::from(self.steps()) * 90
    }
}

/// Render instruction for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "TileInstruction")]
pub struct TileCode {
    pub shape: TileShape,
    pub rotation: Rotation,
}

impl TileCode {
    const fn new(shape: TileShape, rotation: Rotation) -> Self {
        Self { shape, rotation }
    }
}

/// Wire form of a [`TileCode`] handed to JavaScript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileInstruction {
    pub shape: u8,
    pub degrees: u16,
}

impl From<TileCode> for TileInstruction {
    fn from(code: TileCode) -> Self {
        Self {
            shape: code.shape.id(),
            degrees: code.rotation.degrees(),
        }
    }
}

/// Indexed by motif bits (`LEFT = 1, UP = 2, RIGHT = 4, DOWN = 8`).
const TILE_TABLE: [TileCode; 16] = {
    use self::Rotation::{Deg0, Deg180, Deg270, Deg90};
    use self::TileShape::{Corner, Cross, DeadEnd, Isolated, Junction, Straight};
    [
        TileCode::new(Isolated, Deg0),   // ----
        TileCode::new(DeadEnd, Deg0),    // L---
        TileCode::new(DeadEnd, Deg90),   // -U--
        TileCode::new(Corner, Deg0),     // LU--
        TileCode::new(DeadEnd, Deg180),  // --R-
        TileCode::new(Straight, Deg0),   // L-R-
        TileCode::new(Corner, Deg90),    // -UR-
        TileCode::new(Junction, Deg180), // LUR-
        TileCode::new(DeadEnd, Deg270),  // ---D
        TileCode::new(Corner, Deg270),   // L--D
        TileCode::new(Straight, Deg90),  // -U-D
        TileCode::new(Junction, Deg90),  // LU-D
        TileCode::new(Corner, Deg180),   // --RD
        TileCode::new(Junction, Deg0),   // L-RD
        TileCode::new(Junction, Deg270), // -URD
        TileCode::new(Cross, Deg0),      // LURD
    ]
};

/// Map a motif to its canonical tile.
#[inline]
pub fn canonicalize(motif: Motif) -> TileCode {
    TILE_TABLE[motif.bits() as usize]
}
