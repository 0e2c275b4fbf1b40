//! Four-way connectivity masks.

use std::fmt;

/// A side of a rendering cell.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left = 0,
    Up = 1,
    Right = 2,
    Down = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Left, Self::Up, Self::Right, Self::Down];

    #[inline]
    pub fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// The side this one lands on after reflecting across a vertical axis.
    #[inline]
    pub fn mirror_x(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            other => other,
        }
    }

    /// The side this one lands on after reflecting across a horizontal axis.
    #[inline]
    pub fn mirror_y(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            other => other,
        }
    }
}

/// Connectivity of one rendering cell, packed into the low four bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Motif {
    bits: u8,
}

impl Motif {
    pub const LEFT: u8 = 0b0000_0001;
    pub const UP: u8 = 0b0000_0010;
    pub const RIGHT: u8 = 0b0000_0100;
    pub const DOWN: u8 = 0b0000_1000;

    /// A cell with no connections.
    #[inline]
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    /// Build from raw bits; anything above the low nibble is dropped.
    #[inline]
    pub fn from_bits(bits: u8) -> Self {
        Self { bits: bits & 0b1111 }
    }

    #[inline]
    pub fn bits(self) -> u8 {
        self.bits
    }

    #[inline]
    pub fn has(self, direction: Direction) -> bool {
        self.bits & direction.bit() != 0
    }

    #[inline]
    pub fn connect(&mut self, direction: Direction) {
        self.bits |= direction.bit();
    }

    /// Parse a `"LURD"` pattern such as `"1010"`.
    pub fn from_pattern(pattern: &str) -> Option<Self> {
        if pattern.len() != 4 {
            return None;
        }
        let mut motif = Self::new();
        for (direction, c) in Direction::ALL.into_iter().zip(pattern.chars()) {
            match c {
                '1' => motif.connect(direction),
                '0' => {}
                _ => return None,
            }
        }
        Some(motif)
    }
}

impl fmt::Display for Motif {
    /// Formats as the `"LURD"` pattern, one digit per side.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for direction in Direction::ALL {
            f.write_str(if self.has(direction) { "1" } else { "0" })?;
        }
        Ok(())
    }
}
