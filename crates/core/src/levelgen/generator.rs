//! High-level generation orchestration that composes endpoints, path
//! carving, corridor widening, and star placement into one deterministic
//! pass.

use crate::types::Pos;

use super::carve::{carve_region, mark_endpoints};
use super::endpoints::{resolve_end, start_pos};
use super::grid::Grid;
use super::model::{GenEvent, GenerationResult};
use super::params::GenerationParams;
use super::path::carve_path;
use super::rng::RandomSource;
use super::stars::{StarContext, place_stars};

/// Owns nothing but the clamped parameters; every call to [`generate`]
/// builds a fresh grid and a fresh [`RandomSource`], so concurrent calls on
/// independent generators share no state.
///
/// [`generate`]: LevelGenerator::generate
pub struct LevelGenerator {
    params: GenerationParams,
}

impl LevelGenerator {
    /// Clamps the parameters once; all later reads assume in-range values.
    pub fn new(params: GenerationParams) -> Self {
        Self { params: params.clamped() }
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Runs the full pipeline. Total: recoverable failures surface as
    /// [`GenEvent`]s on the result, never as an error.
    pub fn generate(&self) -> GenerationResult {
        let used_seed = self.params.seed.resolve();
        let mut rng = RandomSource::new(used_seed);

        let start = start_pos(self.params.grid_width, self.params.grid_height);
        let end = separate_end_from_start(
            resolve_end(&self.params, &mut rng),
            start,
            self.params.grid_width,
            self.params.grid_height,
        );

        let mut grid =
            Grid::new(self.params.grid_width as usize, self.params.grid_height as usize);
        let mut events = Vec::new();

        let Some(main_path) = carve_path(&grid, start, end, self.params.curve_percent, &mut rng)
        else {
            // Endpoint markers are still stamped so downstream consumers
            // always see exactly one Start and one End.
            events.push(GenEvent::MainRouteFailed);
            mark_endpoints(&mut grid, start, end);
            return GenerationResult { grid, used_seed, events };
        };

        carve_region(&mut grid, &main_path, self.params.path_thickness);
        mark_endpoints(&mut grid, start, end);

        let context =
            StarContext { params: &self.params, start, end, main_path: &main_path };
        place_stars(&mut grid, &context, &mut rng, &mut events);

        GenerationResult { grid, used_seed, events }
    }
}

/// Keeps the endpoint markers on distinct cells whenever the grid has more
/// than one cell. The end band sits at the top of the grid and the start at
/// the bottom, so a collision only happens on degenerate dimensions or a
/// full-height band; nudging up (or sideways on a 1-row grid) stays inside
/// the band.
fn separate_end_from_start(end: Pos, start: Pos, width: u32, height: u32) -> Pos {
    if end != start || width * height == 1 {
        return end;
    }
    if start.y > 0 {
        Pos { y: start.y - 1, x: start.x }
    } else if start.x > 0 {
        Pos { y: start.y, x: start.x - 1 }
    } else {
        Pos { y: start.y, x: start.x + 1 }
    }
}
