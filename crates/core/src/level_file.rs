//! Persisted level format.
//!
//! A JSON record carrying the generation parameters, the flattened
//! row-major tile buffer, and the seed that produced it, so an authored or
//! previously generated level can be replayed byte-for-byte without
//! re-running the algorithm. A SHA-256 over the tile codes guards the
//! buffer against corruption; a mismatch on load is `InvalidData`.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::levelgen::grid::Grid;
use crate::levelgen::{GenerationParams, GenerationResult};
use crate::types::Tile;

pub const LEVEL_FILE_FORMAT_VERSION: u16 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LevelFile {
    pub format_version: u16,
    pub params: GenerationParams,
    pub width: u32,
    pub height: u32,
    /// Row-major, `tile_data[y * width + x]`.
    pub tile_data: Vec<Tile>,
    pub used_seed: u64,
    pub tiles_sha256_hex: String,
}

/// `hex(SHA-256(tile codes))`.
fn compute_tiles_sha256(tiles: &[Tile]) -> String {
    let mut hasher = Sha256::new();
    for &tile in tiles {
        hasher.update([tile.code()]);
    }
    let result = hasher.finalize();
    format!("{result:064x}")
}

impl LevelFile {
    pub fn from_result(params: &GenerationParams, result: &GenerationResult) -> Self {
        let tile_data = result.grid.tiles().to_vec();
        let tiles_sha256_hex = compute_tiles_sha256(&tile_data);
        Self {
            format_version: LEVEL_FILE_FORMAT_VERSION,
            params: params.clone(),
            width: result.grid.width() as u32,
            height: result.grid.height() as u32,
            tile_data,
            used_seed: result.used_seed,
            tiles_sha256_hex,
        }
    }

    /// Write via a temp file and rename so a crash never leaves a
    /// half-written level behind.
    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;

        Ok(())
    }

    /// Load and validate: JSON shape, buffer length, and tile integrity
    /// hash must all check out.
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let level: Self = serde_json::from_str(&content)
            .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;

        let expected_len = (level.width as usize) * (level.height as usize);
        if level.tile_data.len() != expected_len {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "tile buffer holds {} cells, header says {}x{}",
                    level.tile_data.len(),
                    level.width,
                    level.height
                ),
            ));
        }

        let actual_hash = compute_tiles_sha256(&level.tile_data);
        if actual_hash != level.tiles_sha256_hex {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "tile data does not match its recorded SHA-256",
            ));
        }

        Ok(level)
    }

    /// Reconstructs the grid directly from the flattened buffer, bypassing
    /// generation entirely.
    pub fn into_grid(self) -> Grid {
        Grid::from_tiles(self.width as usize, self.height as usize, self.tile_data)
            .expect("load validated the buffer length")
    }
}
