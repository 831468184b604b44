use rand::Rng;

use crate::game::model::Model;
use crate::game::tile::Tile;

/// Probability that a spawned tile is a 4 rather than a 2.
const FOUR_PROBABILITY: f64 = 0.1;

/// Pick a random tile for the next spawn: a uniform choice over the empty
/// cells, valued 4 with probability 0.1 and 2 otherwise. Returns `None` on a
/// full board.
pub fn random_tile<R: Rng>(model: &Model, rng: &mut R) -> Option<Tile> {
    let empty = model.board().empty_positions();
    if empty.is_empty() {
        return None;
    }
    let (col, row) = empty[rng.random_range(0..empty.len())];
    let value = if rng.random_bool(FOUR_PROBABILITY) { 4 } else { 2 };
    Some(Tile::new(value, col, row))
}

/// Spawn a random tile onto the board and return it, or `None` when the
/// board is full.
pub fn spawn_random_tile<R: Rng>(model: &mut Model, rng: &mut R) -> Option<Tile> {
    let tile = random_tile(model, rng)?;
    model.add_tile(tile);
    Some(tile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_lands_on_an_empty_cell() {
        let mut model = Model::from_raw_values(&[&[2, 0], &[0, 4]], 0, 0);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2 {
            let tile = spawn_random_tile(&mut model, &mut rng)
                .expect("two cells were empty, a spawn must succeed");
            assert!(
                tile.value() == 2 || tile.value() == 4,
                "Spawned values are only 2 or 4, got {}.",
                tile.value()
            );
        }
        assert!(model.board().empty_positions().is_empty());
    }

    #[test]
    fn test_spawn_on_full_board_returns_none() {
        let mut model = Model::from_raw_values(&[&[2, 4], &[4, 2]], 0, 0);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(spawn_random_tile(&mut model, &mut rng), None);
    }

    #[test]
    fn test_spawn_is_deterministic_under_a_seed() {
        let model = Model::new(4);
        let a = random_tile(&model, &mut StdRng::seed_from_u64(42));
        let b = random_tile(&model, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b, "Equal seeds must produce equal spawns.");
    }

    #[test]
    fn test_spawn_distribution_favors_twos() {
        let model = Model::new(4);
        let mut rng = StdRng::seed_from_u64(1);
        let fours = (0..1000)
            .filter(|_| random_tile(&model, &mut rng).unwrap().value() == 4)
            .count();
        assert!(
            (50..200).contains(&fours),
            "Roughly 10% of spawns should be 4s, saw {}/1000.",
            fours
        );
    }
}
