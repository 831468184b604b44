//! Game session orchestration.

pub mod game_runner;

pub use game_runner::{GameRunner, StepOutcome};
