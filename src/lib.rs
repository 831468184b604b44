//! # 2048 Rules Engine Library
//!
//! A rules engine for the 2048 tile puzzle: tilt/merge state machine with a
//! rotating viewing perspective, plus the harness to actually play it.
//!
//! ## Features
//!
//! - **Game Engine**: board, tilt algorithm, scoring and game-over detection
//! - **Strategies**: random and greedy auto-play move choosers
//! - **Recording**: per-move CSV records of played games
//! - **Persistence**: JSON save/load of a game in progress
//!
//! ## Usage
//!
//! ```rust
//! use twenty_forty_eight::game::{model::Model, side::Side};
//!
//! let mut model = Model::new(4);
//! model.tilt(Side::North);
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Core game logic and rules
pub mod game;

/// Auto-play strategies
pub mod strategy;

/// Game recording (CSV move logs)
pub mod recording;

/// Game session orchestration
pub mod services;

/// Save/load of game state
pub mod data;

/// Logging setup
pub mod logging;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the 2048 library.
///
/// Engine precondition violations (occupied cell, out-of-range index) are
/// caller bugs and panic instead; these variants cover the recoverable
/// failures of the surrounding harness (I/O, parsing, bad user input).
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GameError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
