pub mod board;
pub mod legal_moves;
pub mod model;
pub mod side;
pub mod simulate_game;
pub mod spawn_tile;
pub mod tile;
