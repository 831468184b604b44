use serde::{Deserialize, Serialize};

/// A compass direction: the side of the board tiles travel toward on a tilt.
///
/// A `Side` also names a viewing perspective for the board. Re-orienting the
/// board so a side "plays north" lets one northbound slide routine serve all
/// four directions; `to_physical` is the rotation from that logical frame
/// back to storage coordinates. `North` is the identity perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Side {
    #[default]
    North,
    South,
    East,
    West,
}

impl Side {
    /// All four sides, in the order used for deterministic tie-breaks.
    pub const ALL: [Side; 4] = [Side::North, Side::South, Side::East, Side::West];

    /// Map logical (col, row) — in the frame where `self` is north — to the
    /// physical storage cell, on a board of the given size.
    ///
    /// Rows grow northward in the logical frame, so the slide routine always
    /// moves tiles toward high logical rows no matter which side was chosen.
    pub fn to_physical(self, col: usize, row: usize, size: usize) -> (usize, usize) {
        let last = size - 1;
        match self {
            Side::North => (col, row),
            Side::East => (row, last - col),
            Side::South => (last - col, last - row),
            Side::West => (last - row, col),
        }
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::North => Side::South,
            Side::South => Side::North,
            Side::East => Side::West,
            Side::West => Side::East,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::North => write!(f, "North"),
            Side::South => write!(f, "South"),
            Side::East => write!(f, "East"),
            Side::West => write!(f, "West"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_north_is_identity() {
        for col in 0..4 {
            for row in 0..4 {
                assert_eq!(Side::North.to_physical(col, row, 4), (col, row));
            }
        }
    }

    #[test]
    fn test_transforms_are_bijections() {
        // Every side must map the logical grid onto the whole physical grid
        // with no collisions, otherwise a tilt would drop or duplicate tiles.
        for side in Side::ALL {
            let mut seen = [[false; 4]; 4];
            for col in 0..4 {
                for row in 0..4 {
                    let (pc, pr) = side.to_physical(col, row, 4);
                    assert!(
                        !seen[pc][pr],
                        "{} maps two cells onto ({}, {})",
                        side, pc, pr
                    );
                    seen[pc][pr] = true;
                }
            }
        }
    }

    #[test]
    fn test_logical_top_lands_on_the_named_side() {
        // The top logical row (the slide destination) must land on the
        // physical edge the side names. Board size 4, top row = 3.
        assert_eq!(Side::North.to_physical(0, 3, 4).1, 3, "north edge is row 3");
        assert_eq!(Side::South.to_physical(0, 3, 4).1, 0, "south edge is row 0");
        assert_eq!(Side::East.to_physical(0, 3, 4).0, 3, "east edge is col 3");
        assert_eq!(Side::West.to_physical(0, 3, 4).0, 0, "west edge is col 0");
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Side::North.opposite(), Side::South);
        assert_eq!(Side::East.opposite(), Side::West);
        for side in Side::ALL {
            assert_eq!(side.opposite().opposite(), side);
        }
    }
}
