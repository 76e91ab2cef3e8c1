//! Public output model for a generation call.

use std::collections::{BTreeSet, VecDeque};

use crate::types::{Pos, Tile};

use super::grid::Grid;

/// Recoverable occurrences during generation. The generator is total; these
/// are its report of what degraded instead of an error channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenEvent {
    /// The start-to-end walk backtracked to nothing. The returned grid has
    /// its endpoint markers stamped but no carved route.
    MainRouteFailed,
    /// A connector walk for this star failed; the star tile is placed but
    /// may be unreachable.
    StarConnectorFailed { star: Pos },
}

/// The sole output artifact: the finished grid, the seed actually consumed
/// (resolved from `SeedChoice::Random` if requested), and any degradation
/// events. The caller owns all of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationResult {
    pub grid: Grid,
    pub used_seed: u64,
    pub events: Vec<GenEvent>,
}

impl GenerationResult {
    /// Stable byte encoding for fingerprinting and determinism checks.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.grid.width() as u32).to_le_bytes());
        bytes.extend((self.grid.height() as u32).to_le_bytes());
        for &tile in self.grid.tiles() {
            bytes.push(tile.code());
        }
        bytes.extend(self.used_seed.to_le_bytes());
        bytes
    }

    /// Strict connectivity check for callers that cannot accept a degraded
    /// grid: flood fill over non-`Wall` cells from the `Start` marker must
    /// reach the `End` marker.
    pub fn start_connects_to_end(&self) -> bool {
        let Some(start) = self.find_tile(Tile::Start) else {
            return false;
        };
        let Some(end) = self.find_tile(Tile::End) else {
            return false;
        };
        if start == end {
            return true;
        }

        let mut open = VecDeque::from([start]);
        let mut seen = BTreeSet::from([start]);
        while let Some(pos) = open.pop_front() {
            for next in pos.neighbors() {
                if !self.grid.in_bounds(next) || seen.contains(&next) {
                    continue;
                }
                if !self.grid.tile_at(next).is_walkable() {
                    continue;
                }
                if next == end {
                    return true;
                }
                seen.insert(next);
                open.push_back(next);
            }
        }
        false
    }

    fn find_tile(&self, wanted: Tile) -> Option<Pos> {
        self.grid.positions().find(|&pos| self.grid.tile_at(pos) == wanted)
    }
}
