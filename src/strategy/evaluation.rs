use crate::game::model::Model;

// Weights tuned by hand on random-vs-greedy playouts; empties dominate
// because a cramped board dies fast.
const EMPTY_WEIGHT: f64 = 10.0;
const MERGE_POTENTIAL_WEIGHT: f64 = 4.0;
const CORNER_BONUS: f64 = 20.0;

/// Static board heuristic used by the greedy policy.
///
/// Scores a position by how much room is left, how many adjacent equal pairs
/// could still merge, and whether the highest tile sits in a corner (where
/// it stays out of the way of merge chains).
pub fn evaluate_board(model: &Model) -> f64 {
    let empties = model.board().empty_positions().len() as f64;
    let merges = adjacent_equal_pairs(model) as f64;
    let corner = if highest_tile_in_corner(model) {
        CORNER_BONUS
    } else {
        0.0
    };
    empties * EMPTY_WEIGHT + merges * MERGE_POTENTIAL_WEIGHT + corner
}

/// Count of orthogonally adjacent pairs of equal value. Each pair counts
/// once (neighbors checked east and north only).
fn adjacent_equal_pairs(model: &Model) -> usize {
    let size = model.size();
    let mut pairs = 0;
    for col in 0..size {
        for row in 0..size {
            let value = match model.tile(col, row) {
                Some(tile) => tile.value(),
                None => continue,
            };
            if col + 1 < size && model.tile(col + 1, row).map(|t| t.value()) == Some(value) {
                pairs += 1;
            }
            if row + 1 < size && model.tile(col, row + 1).map(|t| t.value()) == Some(value) {
                pairs += 1;
            }
        }
    }
    pairs
}

fn highest_tile_in_corner(model: &Model) -> bool {
    let highest = model.highest_tile();
    if highest == 0 {
        return false;
    }
    let last = model.size() - 1;
    [(0, 0), (0, last), (last, 0), (last, last)]
        .into_iter()
        .any(|(col, row)| model.tile(col, row).map(|t| t.value()) == Some(highest))
}
