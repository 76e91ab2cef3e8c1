//! Corridor widening and endpoint stamping.

use crate::types::{Pos, Tile};

use super::grid::Grid;

/// Widens a 1-cell route into a corridor: a `(2*thickness+1)^2` square of
/// `Floor` around every route cell. Cells already tagged `Start`, `End`, or
/// `Star` are never downgraded; square cells falling outside the grid are
/// skipped (deliberate bounds clamp, not an error).
pub(super) fn carve_region(grid: &mut Grid, path: &[Pos], thickness: u32) {
    let radius = thickness as i32;
    for &center in path {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let pos = Pos { y: center.y + dy, x: center.x + dx };
                if !grid.in_bounds(pos) {
                    continue;
                }
                if matches!(grid.tile_at(pos), Tile::Wall | Tile::Floor) {
                    grid.set_tile(pos, Tile::Floor);
                }
            }
        }
    }
}

/// Stamps the endpoint markers last so they always win over carved floor.
pub(super) fn mark_endpoints(grid: &mut Grid, start: Pos, end: Pos) {
    grid.set_tile(start, Tile::Start);
    grid.set_tile(end, Tile::End);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_thickness_carves_exactly_the_route_cells() {
        let mut grid = Grid::new(5, 5);
        let path = [Pos { y: 4, x: 2 }, Pos { y: 3, x: 2 }, Pos { y: 2, x: 2 }];
        carve_region(&mut grid, &path, 0);
        assert_eq!(grid.count(Tile::Floor), 3);
        for pos in path {
            assert_eq!(grid.tile_at(pos), Tile::Floor);
        }
    }

    #[test]
    fn thickness_two_widens_to_a_five_cell_corridor() {
        let mut grid = Grid::new(11, 11);
        let path = [Pos { y: 5, x: 5 }];
        carve_region(&mut grid, &path, 2);
        // One route cell with radius 2 floors a full 5x5 block.
        assert_eq!(grid.count(Tile::Floor), 25);
        for dy in -2..=2 {
            for dx in -2..=2 {
                assert_eq!(grid.tile_at(Pos { y: 5 + dy, x: 5 + dx }), Tile::Floor);
            }
        }
        assert_eq!(grid.tile_at(Pos { y: 5, x: 8 }), Tile::Wall);
    }

    #[test]
    fn carving_never_downgrades_special_tiles() {
        let mut grid = Grid::new(5, 5);
        grid.set_tile(Pos { y: 2, x: 1 }, Tile::Start);
        grid.set_tile(Pos { y: 2, x: 3 }, Tile::End);
        grid.set_tile(Pos { y: 1, x: 2 }, Tile::Star);

        carve_region(&mut grid, &[Pos { y: 2, x: 2 }], 1);

        assert_eq!(grid.tile_at(Pos { y: 2, x: 1 }), Tile::Start);
        assert_eq!(grid.tile_at(Pos { y: 2, x: 3 }), Tile::End);
        assert_eq!(grid.tile_at(Pos { y: 1, x: 2 }), Tile::Star);
        assert_eq!(grid.tile_at(Pos { y: 2, x: 2 }), Tile::Floor);
    }

    #[test]
    fn squares_overhanging_the_border_are_clipped() {
        let mut grid = Grid::new(4, 4);
        carve_region(&mut grid, &[Pos { y: 0, x: 0 }], 3);
        // The whole grid fits inside the radius; nothing panics.
        assert_eq!(grid.count(Tile::Floor), 16);
    }

    #[test]
    fn endpoint_markers_overwrite_carved_floor() {
        let mut grid = Grid::new(5, 5);
        let path = [Pos { y: 4, x: 2 }, Pos { y: 3, x: 2 }];
        carve_region(&mut grid, &path, 1);
        mark_endpoints(&mut grid, Pos { y: 4, x: 2 }, Pos { y: 3, x: 2 });
        assert_eq!(grid.tile_at(Pos { y: 4, x: 2 }), Tile::Start);
        assert_eq!(grid.tile_at(Pos { y: 3, x: 2 }), Tile::End);
        assert_eq!(grid.count(Tile::Start), 1);
        assert_eq!(grid.count(Tile::End), 1);
    }
}
