//! Game recording module.
//!
//! Records played games move by move for later analysis: who played, which
//! direction each turn went, what spawned, and the resulting board.
//!
//! # Components
//!
//! - `game_record`: data structures for game records
//! - `csv_writer`: CSV output and loading of recorded games

pub mod csv_writer;
pub mod game_record;

pub use csv_writer::{load_games_from_csv, CsvWriter, LoadedMoveRecord};
pub use game_record::{encode_board, GameRecord, MoveRecord, PlayerKind};
