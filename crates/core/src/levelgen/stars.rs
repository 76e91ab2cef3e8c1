//! Collectible star placement and connector carving.

use crate::types::{Pos, Tile};

use super::carve::carve_region;
use super::grid::Grid;
use super::model::GenEvent;
use super::params::GenerationParams;
use super::path::carve_path;
use super::rng::RandomSource;

pub(super) struct StarContext<'a> {
    pub(super) params: &'a GenerationParams,
    pub(super) start: Pos,
    pub(super) end: Pos,
    pub(super) main_path: &'a [Pos],
}

/// Greedy rejection-sampling placement: walk a shuffled candidate list,
/// accept cells that keep every pairwise star distance at or above
/// `min_star_distance`, and carve a connector from a random main-route cell
/// to each accepted star. Running out of candidates before `star_count` is
/// reached degrades silently to fewer stars.
///
/// A failed connector leaves the star tile placed and is reported as an
/// event; it never aborts placement.
pub(super) fn place_stars(
    grid: &mut Grid,
    context: &StarContext<'_>,
    rng: &mut RandomSource,
    events: &mut Vec<GenEvent>,
) -> Vec<Pos> {
    let target_count = usize::from(context.params.star_count);
    let mut accepted: Vec<Pos> = Vec::with_capacity(target_count);
    if target_count == 0 || context.main_path.is_empty() {
        return accepted;
    }

    let min_distance_squared =
        u64::from(context.params.min_star_distance) * u64::from(context.params.min_star_distance);

    let mut candidates: Vec<Pos> = grid
        .positions()
        .filter(|&pos| pos != context.start && pos != context.end)
        .collect();
    rng.shuffle(&mut candidates);

    for candidate in candidates {
        if accepted.len() >= target_count {
            break;
        }
        if accepted.iter().any(|star| star.distance_squared(candidate) < min_distance_squared) {
            continue;
        }

        grid.set_tile(candidate, Tile::Star);
        connect_star(grid, context, candidate, rng, events);
        accepted.push(candidate);
    }

    accepted
}

fn connect_star(
    grid: &mut Grid,
    context: &StarContext<'_>,
    star: Pos,
    rng: &mut RandomSource,
    events: &mut Vec<GenEvent>,
) {
    let anchor_index = rng.next_int(0, context.main_path.len() as i32) as usize;
    let anchor = context.main_path[anchor_index];

    match carve_path(grid, anchor, star, context.params.curve_percent, rng) {
        Some(connector) => carve_region(grid, &connector, context.params.path_thickness),
        None => events.push(GenEvent::StarConnectorFailed { star }),
    }

    if context.params.stars_connect_to_end {
        match carve_path(grid, star, context.end, context.params.curve_percent, rng) {
            Some(connector) => carve_region(grid, &connector, context.params.path_thickness),
            None => events.push(GenEvent::StarConnectorFailed { star }),
        }
    }
}
