use crate::game::model::Model;
use crate::game::side::Side;

/// True iff tilting toward `side` would move or merge at least one tile.
/// A tilt that changes nothing is a legal call but not a turn: it must not
/// trigger a tile spawn.
pub fn tilt_changes_board(model: &Model, side: Side) -> bool {
    let mut probe = model.clone();
    probe.tilt(side)
}

/// All sides whose tilt would change the board, in N/S/E/W order.
pub fn legal_sides(model: &Model) -> Vec<Side> {
    Side::ALL
        .into_iter()
        .filter(|&side| tilt_changes_board(model, side))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lone_tile_in_a_corner() {
        // A single tile in the south-west corner can move north or east.
        let model = Model::from_raw_values(&[&[0, 0], &[2, 0]], 0, 0);
        assert_eq!(legal_sides(&model), vec![Side::North, Side::East]);
        assert!(!tilt_changes_board(&model, Side::South));
        assert!(!tilt_changes_board(&model, Side::West));
    }

    #[test]
    fn test_blocked_board_has_no_legal_side() {
        let model = Model::from_raw_values(&[&[2, 4], &[4, 2]], 0, 0);
        assert!(legal_sides(&model).is_empty());
    }

    #[test]
    fn test_full_board_with_merge_still_has_moves() {
        let model = Model::from_raw_values(&[&[2, 2], &[4, 8]], 0, 0);
        let sides = legal_sides(&model);
        assert!(
            sides.contains(&Side::East) && sides.contains(&Side::West),
            "The mergeable row should make east and west legal: {:?}",
            sides
        );
    }

    #[test]
    fn test_probe_does_not_mutate_the_model() {
        let model = Model::from_raw_values(&[&[0, 0], &[2, 0]], 0, 0);
        let snapshot = model.clone();
        let _ = legal_sides(&model);
        assert_eq!(model, snapshot);
    }
}
