use serde::{Deserialize, Serialize};

use crate::game::side::Side;
use crate::game::tile::Tile;

/// Square grid of optional tiles with a rotating viewing perspective.
///
/// Storage is column-major over physical coordinates, (0, 0) at the
/// south-west corner. `tile` and `move_tile` translate their (col, row)
/// arguments through the current perspective, so the tilt routine can work
/// in a frame where the chosen side plays north. Stored tiles always carry
/// their physical coordinates; only `add_tile` and `move_tile` write cells,
/// which keeps tile records and cell positions consistent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Tile>>,
    #[serde(skip)]
    perspective: Side,
}

impl Board {
    /// An empty board with `size` cells on each side.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be at least 1");
        Board {
            size,
            cells: vec![None; size * size],
            perspective: Side::North,
        }
    }

    /// Build a board from raw values, `rows[0]` being the top (north) row
    /// and `0` an empty cell. Panics unless the grid is square.
    pub fn from_raw_values(rows: &[&[u32]]) -> Self {
        let size = rows.len();
        let mut board = Board::new(size);
        for (i, raw_row) in rows.iter().enumerate() {
            assert_eq!(
                raw_row.len(),
                size,
                "raw grid must be square, row {} has {} values for size {}",
                i,
                raw_row.len(),
                size
            );
            let row = size - 1 - i;
            for (col, &value) in raw_row.iter().enumerate() {
                if value != 0 {
                    board.cells[col * size + row] = Some(Tile::new(value, col, row));
                }
            }
        }
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, col: usize, row: usize) -> usize {
        col * self.size + row
    }

    fn check_bounds(&self, col: usize, row: usize) {
        assert!(
            col < self.size && row < self.size,
            "cell ({}, {}) out of range for a board of size {}",
            col,
            row,
            self.size
        );
    }

    /// The tile at (col, row) seen through the current perspective, if any.
    pub fn tile(&self, col: usize, row: usize) -> Option<Tile> {
        self.check_bounds(col, row);
        let (pc, pr) = self.perspective.to_physical(col, row, self.size);
        self.cells[self.index(pc, pr)]
    }

    /// Place a tile at its own (physical) coordinates.
    /// The target cell must be empty; placing onto an occupied cell is a
    /// caller bug and panics.
    pub fn add_tile(&mut self, tile: Tile) {
        self.check_bounds(tile.col(), tile.row());
        let index = self.index(tile.col(), tile.row());
        assert!(
            self.cells[index].is_none(),
            "cell ({}, {}) is already occupied",
            tile.col(),
            tile.row()
        );
        self.cells[index] = Some(tile);
    }

    /// Relocate `tile` to (col, row) in the current perspective, clearing
    /// its old cell. Returns true iff this was a merging move: when the
    /// destination already holds a tile (which must be of equal value), the
    /// two are replaced by a fresh tile of doubled value. Moving a tile onto
    /// its own cell is an idempotent no-op returning false.
    pub fn move_tile(&mut self, col: usize, row: usize, tile: Tile) -> bool {
        self.check_bounds(col, row);
        let (pc, pr) = self.perspective.to_physical(col, row, self.size);
        if (pc, pr) == (tile.col(), tile.row()) {
            return false;
        }
        let origin = self.index(tile.col(), tile.row());
        let dest = self.index(pc, pr);
        debug_assert_eq!(
            self.cells[origin],
            Some(tile),
            "moved tile is not at its recorded cell"
        );
        self.cells[origin] = None;
        match self.cells[dest] {
            Some(existing) => {
                self.cells[dest] = Some(tile.merged_with(&existing, pc, pr));
                true
            }
            None => {
                self.cells[dest] = Some(tile.moved_to(pc, pr));
                false
            }
        }
    }

    /// Re-orient the board so that `side` plays north for subsequent
    /// `tile`/`move_tile` calls. `Side::North` restores the identity.
    pub fn set_viewing_perspective(&mut self, side: Side) {
        self.perspective = side;
    }

    /// Empty every cell. The perspective is left untouched.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Physical coordinates of all empty cells, column-major order.
    pub fn empty_positions(&self) -> Vec<(usize, usize)> {
        let mut positions = Vec::new();
        for col in 0..self.size {
            for row in 0..self.size {
                if self.cells[self.index(col, row)].is_none() {
                    positions.push((col, row));
                }
            }
        }
        positions
    }

    /// Iterate over all tiles currently on the board.
    pub fn iter(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().filter_map(|cell| *cell)
    }

    /// The largest tile value on the board, 0 when the board is empty.
    pub fn highest_value(&self) -> u32 {
        self.iter().map(|tile| tile.value()).max().unwrap_or(0)
    }
}

/// Equality is structural over size and cell contents; the viewing
/// perspective is a transient view configuration and takes no part.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.cells == other.cells
    }
}

impl Eq for Board {}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in (0..self.size).rev() {
            for col in 0..self.size {
                match self.tile(col, row) {
                    Some(tile) => write!(f, "|{:4}", tile.value())?,
                    None => write!(f, "|    ")?,
                }
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}
