use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::game::legal_moves::{legal_sides, tilt_changes_board};
use crate::game::model::Model;
use crate::game::side::Side;
use crate::strategy::evaluation::evaluate_board;

/// An auto-play move chooser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    /// Uniformly random legal side.
    Random,
    /// One-ply lookahead: score gain plus board evaluation after the tilt.
    Greedy,
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Policy::Random => write!(f, "Random"),
            Policy::Greedy => write!(f, "Greedy"),
        }
    }
}

/// Pick the next side to tilt, or `None` when no side changes the board.
pub fn choose_side<R: Rng>(model: &Model, policy: Policy, rng: &mut R) -> Option<Side> {
    match policy {
        Policy::Random => {
            let sides = legal_sides(model);
            if sides.is_empty() {
                None
            } else {
                Some(sides[rng.random_range(0..sides.len())])
            }
        }
        Policy::Greedy => {
            let mut best: Option<(Side, f64)> = None;
            for side in Side::ALL {
                if !tilt_changes_board(model, side) {
                    continue;
                }
                let mut probe = model.clone();
                probe.tilt(side);
                let gain = (probe.score() - model.score()) as f64;
                let value = gain + evaluate_board(&probe);
                // Strict comparison keeps the first side in N/S/E/W order
                // on ties, so greedy play is deterministic.
                if best.map_or(true, |(_, v)| value > v) {
                    best = Some((side, value));
                }
            }
            best.map(|(side, _)| side)
        }
    }
}
