//! Rectangular tile buffer and coordinate utilities.

use crate::types::{Pos, Tile};

/// Row-major tile grid, `tiles[y * width + x]`. Out-of-bounds cell access
/// through `tile_at`/`set_tile` is a programming error and panics; callers
/// that want saturating behavior go through `clamp` first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// All-`Wall` grid of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, tiles: vec![Tile::Wall; width * height] }
    }

    /// Rebuilds a grid from a persisted row-major tile buffer.
    pub fn from_tiles(width: usize, height: usize, tiles: Vec<Tile>) -> Result<Self, String> {
        if tiles.len() != width * height {
            return Err(format!(
                "tile buffer holds {} cells, expected {}x{}={}",
                tiles.len(),
                width,
                height,
                width * height
            ));
        }
        Ok(Self { width, height, tiles })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Component-wise clamp into `[0,width) x [0,height)`.
    pub fn clamp(&self, pos: Pos) -> Pos {
        Pos {
            y: pos.y.clamp(0, self.height as i32 - 1),
            x: pos.x.clamp(0, self.width as i32 - 1),
        }
    }

    pub fn tile_at(&self, pos: Pos) -> Tile {
        assert!(self.in_bounds(pos), "tile_at out of bounds: {pos:?}");
        self.tiles[self.index(pos)]
    }

    pub fn set_tile(&mut self, pos: Pos, tile: Tile) {
        assert!(self.in_bounds(pos), "set_tile out of bounds: {pos:?}");
        let index = self.index(pos);
        self.tiles[index] = tile;
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }

    /// Every in-bounds position, row-major.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let width = self.width;
        (0..self.height).flat_map(move |y| {
            (0..width).map(move |x| Pos { y: y as i32, x: x as i32 })
        })
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&cell| cell == tile).count()
    }

    /// Row-major copy of the tile buffer, for persistence.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}
