//! Game recording data structures.
//!
//! This module defines the structures used to record played games, both
//! interactive and policy-driven, for later analysis.

use serde::{Deserialize, Serialize};

use crate::game::model::Model;
use crate::game::side::Side;

/// Who (or what) played the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Random,
    Greedy,
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "Human"),
            PlayerKind::Random => write!(f, "Random"),
            PlayerKind::Greedy => write!(f, "Greedy"),
        }
    }
}

impl PlayerKind {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "random" => PlayerKind::Random,
            "greedy" => PlayerKind::Greedy,
            _ => PlayerKind::Human,
        }
    }
}

/// Record of a single turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn number, starting at 0
    pub turn: usize,
    /// Direction the board was tilted toward
    pub direction: Side,
    /// Score after the tilt and spawn
    pub score_after: u32,
    /// Tile spawned after the move as (value, col, row); zeros when none
    pub spawned: (u32, usize, usize),
    /// Board state after the turn, flattened column-major (col*size + row)
    pub board_after: Vec<u32>,
    /// Timestamp of the move
    pub timestamp: i64,
}

/// Complete record of a game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique game identifier
    pub game_id: String,
    /// Game start timestamp
    pub timestamp: i64,
    /// Who played
    pub player: PlayerKind,
    /// Board side length
    pub board_size: usize,
    /// All moves made in the game
    pub moves: Vec<MoveRecord>,
    /// Final score
    pub final_score: u32,
    /// Largest tile reached
    pub highest_tile: u32,
    /// Whether the 2048 tile appeared
    pub reached_max_tile: bool,
}

impl GameRecord {
    /// Create a new empty game record
    pub fn new(player: PlayerKind, board_size: usize) -> Self {
        Self {
            game_id: uuid::Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().timestamp(),
            player,
            board_size,
            moves: Vec::new(),
            final_score: 0,
            highest_tile: 0,
            reached_max_tile: false,
        }
    }

    /// Record one turn: the direction tilted, the tile spawned afterwards
    /// (if any), and the resulting model state.
    pub fn record_move(&mut self, direction: Side, spawned: Option<(u32, usize, usize)>, model: &Model) {
        self.moves.push(MoveRecord {
            turn: self.moves.len(),
            direction,
            score_after: model.score(),
            spawned: spawned.unwrap_or((0, 0, 0)),
            board_after: encode_board(model),
            timestamp: chrono::Utc::now().timestamp(),
        });
    }

    /// Finalize the game with its terminal state
    pub fn finalize(&mut self, model: &Model) {
        self.final_score = model.score();
        self.highest_tile = model.highest_tile();
        self.reached_max_tile = model.max_tile_exists();
    }
}

/// Encodes a board state as a flat vector of tile values, column-major
/// (index = col * size + row, row 0 the south edge); 0 marks an empty cell.
pub fn encode_board(model: &Model) -> Vec<u32> {
    let size = model.size();
    let mut values = Vec::with_capacity(size * size);
    for col in 0..size {
        for row in 0..size {
            values.push(model.tile(col, row).map(|t| t.value()).unwrap_or(0));
        }
    }
    values
}
