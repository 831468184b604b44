use serde::{Deserialize, Serialize};

/// A single numbered tile pinned to a board cell.
///
/// Tiles are immutable records: sliding or merging never mutates an
/// existing tile, it constructs a fresh one. The (col, row) pair always
/// refers to physical storage coordinates, never to a viewing perspective.
#[derive(Debug, Clone, PartialEq, Copy, Hash, Eq, Serialize, Deserialize)]
pub struct Tile {
    value: u32,
    col: usize,
    row: usize,
}

impl Tile {
    pub fn new(value: u32, col: usize, row: usize) -> Self {
        Tile { value, col, row }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn row(&self) -> usize {
        self.row
    }

    /// A fresh tile with the same value at a new cell.
    pub fn moved_to(&self, col: usize, row: usize) -> Tile {
        Tile::new(self.value, col, row)
    }

    /// The tile produced by merging this tile with an equal-valued one.
    ///
    /// Both source tiles are logically consumed; the result is a new tile
    /// of doubled value at the given cell.
    pub fn merged_with(&self, other: &Tile, col: usize, row: usize) -> Tile {
        debug_assert_eq!(
            self.value, other.value,
            "only equal-valued tiles can merge"
        );
        Tile::new(self.value * 2, col, row)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@({},{})", self.value, self.col, self.row)
    }
}
