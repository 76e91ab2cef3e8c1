use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    /// Axis-aligned neighbors in N/E/S/W order.
    pub fn neighbors(self) -> [Pos; 4] {
        [
            Pos { y: self.y - 1, x: self.x },
            Pos { y: self.y, x: self.x + 1 },
            Pos { y: self.y + 1, x: self.x },
            Pos { y: self.y, x: self.x - 1 },
        ]
    }

    pub fn distance_squared(self, other: Pos) -> u64 {
        let dx = u64::from(self.x.abs_diff(other.x));
        let dy = u64::from(self.y.abs_diff(other.y));
        dx * dx + dy * dy
    }
}

/// Discrete state of one grid cell.
///
/// `Ice` belongs to a decoration pass applied downstream; the generator
/// itself never emits it, but it keeps a stable serialization code so
/// authored levels that use it survive a round trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tile {
    Wall,
    Floor,
    Start,
    End,
    Star,
    Ice,
}

impl Tile {
    /// Stable byte code used by canonical encodings and integrity hashes.
    pub fn code(self) -> u8 {
        match self {
            Tile::Wall => 0,
            Tile::Floor => 1,
            Tile::Start => 2,
            Tile::End => 3,
            Tile::Star => 4,
            Tile::Ice => 5,
        }
    }

    pub fn is_walkable(self) -> bool {
        self != Tile::Wall
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_are_the_four_axis_cells_in_fixed_order() {
        let pos = Pos { y: 3, x: 7 };
        assert_eq!(
            pos.neighbors(),
            [
                Pos { y: 2, x: 7 },
                Pos { y: 3, x: 8 },
                Pos { y: 4, x: 7 },
                Pos { y: 3, x: 6 },
            ]
        );
    }

    #[test]
    fn distance_squared_is_exact_integer_arithmetic() {
        let a = Pos { y: 0, x: 0 };
        let b = Pos { y: -3, x: 4 };
        assert_eq!(a.distance_squared(b), 25);
        assert_eq!(b.distance_squared(a), 25);
    }

    #[test]
    fn tile_codes_are_stable() {
        for (tile, expected) in [
            (Tile::Wall, 0_u8),
            (Tile::Floor, 1),
            (Tile::Start, 2),
            (Tile::End, 3),
            (Tile::Star, 4),
            (Tile::Ice, 5),
        ] {
            assert_eq!(tile.code(), expected);
        }
    }
}
