//! Designer-facing generation parameters.

use serde::{Deserialize, Serialize};

use crate::types::Pos;

use super::seed::SeedChoice;

pub(super) const MAX_STAR_COUNT: u8 = 20;
pub(super) const MIN_STAR_DISTANCE_RANGE: (u8, u8) = (1, 10);

/// Immutable-per-call configuration. These are tunable knobs, not untrusted
/// input: out-of-range values are clamped by [`GenerationParams::clamped`]
/// rather than rejected. The orchestrator clamps once on construction;
/// every later reader assumes in-range values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub grid_width: u32,
    pub grid_height: u32,
    /// Draw the end cell at random inside the height band; otherwise
    /// `fixed_end` is used (clamped into the same band).
    pub random_end: bool,
    pub fixed_end: Pos,
    /// The end cell must lie within the top `percent` of grid rows.
    pub end_max_height_percent: u8,
    pub seed: SeedChoice,
    /// Corridor radius in cells; 0 leaves the carved route 1 cell wide.
    pub path_thickness: u32,
    /// Probability that path search favors a random unvisited neighbor over
    /// the neighbor nearest the target. 0 is near-straight, 100 maximally
    /// wandering.
    pub curve_percent: u8,
    pub star_count: u8,
    /// Minimum pairwise Euclidean distance between accepted stars.
    pub min_star_distance: u8,
    pub stars_connect_to_end: bool,
    // Pass-through fields consumed by the downstream decoration and reward
    // steps; the generator itself never reads them.
    pub ice_ratio_percent: u8,
    pub moving_platform_ratio_percent: u8,
    pub coins_to_earn: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            grid_width: 10,
            grid_height: 10,
            random_end: true,
            fixed_end: Pos { y: 0, x: 0 },
            end_max_height_percent: 30,
            seed: SeedChoice::Random,
            path_thickness: 1,
            curve_percent: 50,
            star_count: 3,
            min_star_distance: 3,
            stars_connect_to_end: false,
            ice_ratio_percent: 0,
            moving_platform_ratio_percent: 0,
            coins_to_earn: 10,
        }
    }
}

impl GenerationParams {
    /// The single clamping pass. Dimensions get a floor of 1, percents a
    /// ceiling of 100, star placement its designer bands.
    pub fn clamped(mut self) -> Self {
        self.grid_width = self.grid_width.max(1);
        self.grid_height = self.grid_height.max(1);
        self.end_max_height_percent = self.end_max_height_percent.min(100);
        self.curve_percent = self.curve_percent.min(100);
        self.star_count = self.star_count.min(MAX_STAR_COUNT);
        self.min_star_distance =
            self.min_star_distance.clamp(MIN_STAR_DISTANCE_RANGE.0, MIN_STAR_DISTANCE_RANGE.1);
        self.ice_ratio_percent = self.ice_ratio_percent.min(100);
        self.moving_platform_ratio_percent = self.moving_platform_ratio_percent.min(100);
        self
    }
}
