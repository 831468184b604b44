use serde::{Deserialize, Serialize};

use crate::game::board::Board;
use crate::game::side::Side;
use crate::game::tile::Tile;

/// The tile value that ends (wins) the game.
pub const MAX_PIECE: u32 = 2048;

/// The game state machine: a board plus current and best score.
///
/// The board is mutated only through `add_tile` and `tilt`; every mutation
/// ends with a game-over check, which is the single place `max_score` can
/// change. A tilt runs to completion inside one `&mut self` call, so no
/// observer can see a half-slid board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    board: Board,
    score: u32,
    max_score: u32,
}

impl Model {
    /// An empty game on a `size` x `size` board.
    pub fn new(size: usize) -> Self {
        Model {
            board: Board::new(size),
            score: 0,
            max_score: 0,
        }
    }

    /// Build a game from raw values, `rows[0]` being the top (north) row and
    /// `0` an empty cell. Used by tests and by save/load.
    pub fn from_raw_values(rows: &[&[u32]], score: u32, max_score: u32) -> Self {
        Model {
            board: Board::from_raw_values(rows),
            score,
            max_score,
        }
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// The tile at (col, row), if any. (0, 0) is the south-west corner.
    pub fn tile(&self, col: usize, row: usize) -> Option<Tile> {
        self.board.tile(col, row)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The largest tile value on the board, 0 when empty.
    pub fn highest_tile(&self) -> u32 {
        self.board.highest_value()
    }

    /// Reset the score and empty the board. `max_score` survives a clear.
    pub fn clear(&mut self) {
        self.score = 0;
        self.board.clear();
    }

    /// Place a new tile at its own coordinates.
    /// The target cell must be empty; placing onto an occupied cell is a
    /// caller bug and panics.
    pub fn add_tile(&mut self, tile: Tile) {
        self.board.add_tile(tile);
        self.check_game_over();
    }

    /// Tilt the board toward `side`, sliding and merging every tile as far
    /// as it goes. Returns true iff any tile moved or merged.
    ///
    /// The board is re-oriented so `side` plays north and a single
    /// northbound routine handles all four directions. Within each logical
    /// column, source cells are visited from just below the leading edge
    /// down to row 0, each exactly once; merge results land on the far cell
    /// and are never re-visited as a source, and a per-column mark keeps a
    /// tile that already absorbed a merge from merging again, so no tile
    /// merges twice in one tilt.
    pub fn tilt(&mut self, side: Side) -> bool {
        let size = self.size();
        let mut changed = false;

        self.board.set_viewing_perspective(side);
        for col in 0..size {
            // Rows that absorbed a merge this tilt, by logical row index.
            let mut merged = vec![false; size];
            for row in (0..size.saturating_sub(1)).rev() {
                let tile = match self.board.tile(col, row) {
                    Some(tile) => tile,
                    None => continue,
                };
                // First occupied cell strictly above the source, if any.
                let blocker = (row + 1..size)
                    .find_map(|r| self.board.tile(col, r).map(|above| (r, above)));
                let dest = match blocker {
                    // Empty all the way up: slide to the leading edge.
                    None => size - 1,
                    Some((r, above)) if above.value() == tile.value() && !merged[r] => r,
                    // Stack immediately below the blocking tile.
                    Some((r, _)) => r - 1,
                };
                if dest == row {
                    continue;
                }
                if self.board.move_tile(col, dest, tile) {
                    self.score += tile.value() * 2;
                    merged[dest] = true;
                }
                changed = true;
            }
        }
        self.board.set_viewing_perspective(Side::North);

        self.check_game_over();
        changed
    }

    /// True iff any cell is empty.
    pub fn empty_space_exists(&self) -> bool {
        !self.board.empty_positions().is_empty()
    }

    /// True iff some tile has reached [`MAX_PIECE`].
    pub fn max_tile_exists(&self) -> bool {
        self.board.iter().any(|tile| tile.value() == MAX_PIECE)
    }

    /// True iff some tilt could change the board: an empty cell exists, or
    /// two orthogonally adjacent tiles hold equal values. This checks the
    /// two sufficient conditions directly rather than simulating tilts.
    pub fn at_least_one_move_exists(&self) -> bool {
        if self.empty_space_exists() {
            return true;
        }
        let size = self.size();
        for col in 0..size {
            for row in 0..size {
                let value = match self.board.tile(col, row) {
                    Some(tile) => tile.value(),
                    None => continue,
                };
                if col + 1 < size
                    && self.board.tile(col + 1, row).map(|t| t.value()) == Some(value)
                {
                    return true;
                }
                if row + 1 < size
                    && self.board.tile(col, row + 1).map(|t| t.value()) == Some(value)
                {
                    return true;
                }
            }
        }
        false
    }

    /// Terminal-state predicate: the maximum tile appeared, or no move is
    /// left.
    pub fn game_over(&self) -> bool {
        self.max_tile_exists() || !self.at_least_one_move_exists()
    }

    /// Runs after every mutation; folds the score into `max_score` when the
    /// game has ended. This is the only place `max_score` changes.
    fn check_game_over(&mut self) {
        if self.game_over() {
            self.max_score = self.max_score.max(self.score);
        }
    }
}

/// Human-readable dump: the grid rows top-to-bottom, then a score trailer.
/// A debug/test utility; equality stays structural.
impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "[")?;
        write!(f, "{}", self.board)?;
        let status = if self.game_over() { "over" } else { "not over" };
        writeln!(
            f,
            "] {} (max: {}) (game is {})",
            self.score, self.max_score, status
        )
    }
}
