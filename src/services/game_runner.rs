//! Drives a game session: tilt, spawn, record, detect game over.
//!
//! The runner owns the model and a seeded RNG, so a whole session replays
//! deterministically from its seed. Each turn runs inside one `&mut self`
//! call; the borrow checker is the critical section.

use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::legal_moves::legal_sides;
use crate::game::model::Model;
use crate::game::side::Side;
use crate::game::simulate_game::GameOutcome;
use crate::game::spawn_tile::spawn_random_tile;
use crate::game::tile::Tile;
use crate::recording::game_record::{GameRecord, PlayerKind};
use crate::strategy::policy::{choose_side, Policy};
use crate::Result;

/// What one turn did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// Whether the tilt changed the board (a real turn)
    pub moved: bool,
    /// Score gained by this turn's merges
    pub score_gained: u32,
    /// Tile spawned after the move, if the move was a real turn
    pub spawned: Option<Tile>,
    /// Whether the game is now over
    pub over: bool,
}

/// A single game session.
pub struct GameRunner {
    model: Model,
    rng: StdRng,
    recorder: Option<GameRecord>,
    turn: usize,
}

impl GameRunner {
    /// Start a fresh game with the two opening tiles already spawned.
    /// `None` seeds from the OS.
    pub fn new(size: usize, seed: Option<u64>) -> Self {
        let mut runner = Self::from_model(Model::new(size), seed);
        spawn_random_tile(&mut runner.model, &mut runner.rng);
        spawn_random_tile(&mut runner.model, &mut runner.rng);
        runner
    }

    /// Resume from an existing model (e.g. a loaded save) without spawning.
    pub fn from_model(model: Model, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        GameRunner {
            model,
            rng,
            recorder: None,
            turn: 0,
        }
    }

    /// Record every turn of this session under the given player kind.
    pub fn with_recording(mut self, player: PlayerKind) -> Self {
        self.recorder = Some(GameRecord::new(player, self.model.size()));
        self
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Play one turn toward `side`. A tilt that changes nothing is not a
    /// turn: no spawn, no recording, no turn counter tick.
    pub fn step(&mut self, side: Side) -> StepOutcome {
        let score_before = self.model.score();
        if !self.model.tilt(side) {
            return StepOutcome {
                moved: false,
                score_gained: 0,
                spawned: None,
                over: self.model.game_over(),
            };
        }

        let spawned = if self.model.game_over() {
            None
        } else {
            spawn_random_tile(&mut self.model, &mut self.rng)
        };
        self.turn += 1;

        if let Some(recorder) = &mut self.recorder {
            let spawn_triple = spawned.map(|t| (t.value(), t.col(), t.row()));
            recorder.record_move(side, spawn_triple, &self.model);
        }

        StepOutcome {
            moved: true,
            score_gained: self.model.score() - score_before,
            spawned,
            over: self.model.game_over(),
        }
    }

    /// Text-mode game loop: print the board, read a direction (n/s/e/w,
    /// q to quit), play it. Returns when the game ends or the player quits.
    pub fn play_interactive<I: BufRead, O: Write>(
        &mut self,
        input: I,
        mut output: O,
    ) -> Result<()> {
        writeln!(output, "{}", self.model)?;
        for line in input.lines() {
            let command = line?.trim().to_lowercase();
            let side = match command.as_str() {
                "n" | "north" => Side::North,
                "s" | "south" => Side::South,
                "e" | "east" => Side::East,
                "w" | "west" => Side::West,
                "q" | "quit" => break,
                "" => continue,
                other => {
                    writeln!(output, "unknown command '{}', use n/s/e/w or q", other)?;
                    continue;
                }
            };
            let outcome = self.step(side);
            if !outcome.moved {
                writeln!(output, "no tile can move {}", side)?;
                continue;
            }
            writeln!(output, "{}", self.model)?;
            if outcome.over {
                writeln!(output, "game over, final score {}", self.model.score())?;
                break;
            }
        }
        Ok(())
    }

    /// Policy-driven loop to game over.
    pub fn play_auto(&mut self, policy: Policy) -> GameOutcome {
        loop {
            let side = match choose_side(&self.model, policy, &mut self.rng) {
                Some(side) => side,
                None => break,
            };
            let outcome = self.step(side);
            debug_assert!(outcome.moved, "chosen sides always change the board");
            if outcome.over {
                break;
            }
            if self.turn % 100 == 0 {
                log::debug!(
                    "turn {}: score {}, highest {}",
                    self.turn,
                    self.model.score(),
                    self.model.highest_tile()
                );
            }
        }
        GameOutcome {
            score: self.model.score(),
            highest_tile: self.model.highest_tile(),
            moves: self.turn,
            reached_max_tile: self.model.max_tile_exists(),
        }
    }

    /// Finalize and hand over the recording, if one was kept.
    pub fn into_record(mut self) -> Option<GameRecord> {
        let mut record = self.recorder.take()?;
        record.finalize(&self.model);
        Some(record)
    }

    /// A uniformly random legal side, for exploration from outside a policy.
    pub fn random_legal_side(&mut self) -> Option<Side> {
        let sides = legal_sides(&self.model);
        if sides.is_empty() {
            None
        } else {
            Some(sides[self.rng.random_range(0..sides.len())])
        }
    }
}
