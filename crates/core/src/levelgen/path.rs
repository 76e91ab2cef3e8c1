//! Random-walk route search with backtracking.

use std::collections::BTreeSet;

use crate::types::Pos;

use super::grid::Grid;
use super::rng::RandomSource;

/// Walks from `from` to `to` through unvisited cells, backtracking when the
/// walk dead-ends. Returns the ordered route `from..=to`, or `None` when
/// backtracking empties the path before the target is reached.
///
/// Endpoints are clamped into grid bounds before the walk. The visited set
/// only grows, so the walk terminates in at most `width * height` steps.
pub(super) fn carve_path(
    grid: &Grid,
    from: Pos,
    to: Pos,
    curve_percent: u8,
    rng: &mut RandomSource,
) -> Option<Vec<Pos>> {
    let from = grid.clamp(from);
    let to = grid.clamp(to);

    let mut visited = BTreeSet::from([from]);
    let mut path = vec![from];

    while let Some(&current) = path.last() {
        if current == to {
            return Some(path);
        }

        let open: Vec<Pos> = current
            .neighbors()
            .into_iter()
            .filter(|&neighbor| grid.in_bounds(neighbor) && !visited.contains(&neighbor))
            .collect();

        let Some(next) = pick_next(&open, to, curve_percent, rng) else {
            // Dead end: retry from the previous cell. Visited cells stay
            // visited so the walk cannot loop.
            path.pop();
            continue;
        };

        visited.insert(next);
        path.push(next);
    }

    None
}

/// The single weighted choice that controls twistiness: with probability
/// `curve_percent` a uniformly random unvisited neighbor, otherwise the one
/// nearest the target (first wins on distance ties).
fn pick_next(open: &[Pos], to: Pos, curve_percent: u8, rng: &mut RandomSource) -> Option<Pos> {
    if open.is_empty() {
        return None;
    }
    if rng.next_bool(curve_percent) {
        Some(open[rng.next_int(0, open.len() as i32) as usize])
    } else {
        open.iter().copied().min_by_key(|pos| pos.distance_squared(to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manhattan(a: Pos, b: Pos) -> u32 {
        a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
    }

    fn assert_route_shape(path: &[Pos], from: Pos, to: Pos, grid: &Grid) {
        assert_eq!(path.first().copied(), Some(from));
        assert_eq!(path.last().copied(), Some(to));
        for pair in path.windows(2) {
            assert_eq!(manhattan(pair[0], pair[1]), 1, "route must move one axis step at a time");
        }
        let distinct: BTreeSet<Pos> = path.iter().copied().collect();
        assert_eq!(distinct.len(), path.len(), "route must not revisit a cell");
        for &pos in path {
            assert!(grid.in_bounds(pos));
        }
    }

    #[test]
    fn same_endpoint_yields_single_cell_route() {
        let grid = Grid::new(7, 7);
        let mut rng = RandomSource::new(5);
        let pos = Pos { y: 3, x: 3 };
        let path = carve_path(&grid, pos, pos, 50, &mut rng).expect("trivial route");
        assert_eq!(path, vec![pos]);
    }

    #[test]
    fn zero_curve_walks_the_shortest_monotonic_route() {
        let grid = Grid::new(10, 10);
        let mut rng = RandomSource::new(42);
        let from = Pos { y: 9, x: 5 };
        let to = Pos { y: 0, x: 2 };
        let path = carve_path(&grid, from, to, 0, &mut rng).expect("open grid route");
        assert_route_shape(&path, from, to, &grid);
        assert_eq!(path.len() as u32, manhattan(from, to) + 1, "greedy route must be shortest");
    }

    #[test]
    fn full_curve_still_reaches_the_target() {
        let grid = Grid::new(12, 12);
        for seed in [1_u64, 9, 77, 5_000] {
            let mut rng = RandomSource::new(seed);
            let from = Pos { y: 11, x: 6 };
            let to = Pos { y: 0, x: 0 };
            let path = carve_path(&grid, from, to, 100, &mut rng)
                .expect("backtracking walk must find the target on an open grid");
            assert_route_shape(&path, from, to, &grid);
        }
    }

    #[test]
    fn endpoints_outside_the_grid_are_clamped_before_walking() {
        let grid = Grid::new(6, 6);
        let mut rng = RandomSource::new(8);
        let path = carve_path(&grid, Pos { y: -4, x: 50 }, Pos { y: 99, x: -1 }, 30, &mut rng)
            .expect("clamped endpoints route");
        assert_eq!(path.first().copied(), Some(Pos { y: 0, x: 5 }));
        assert_eq!(path.last().copied(), Some(Pos { y: 5, x: 0 }));
    }

    #[test]
    fn same_seed_reproduces_the_same_route() {
        let grid = Grid::new(15, 15);
        let from = Pos { y: 14, x: 7 };
        let to = Pos { y: 1, x: 12 };
        let first = carve_path(&grid, from, to, 80, &mut RandomSource::new(99));
        let second = carve_path(&grid, from, to, 80, &mut RandomSource::new(99));
        assert_eq!(first, second);
    }

    #[test]
    fn one_by_one_grid_routes_trivially() {
        let grid = Grid::new(1, 1);
        let mut rng = RandomSource::new(0);
        let path =
            carve_path(&grid, Pos { y: 0, x: 0 }, Pos { y: 0, x: 0 }, 100, &mut rng).unwrap();
        assert_eq!(path, vec![Pos { y: 0, x: 0 }]);
    }
}
