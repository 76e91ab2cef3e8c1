pub mod level_file;
pub mod levelgen;
pub mod types;

pub use level_file::LevelFile;
pub use levelgen::{GenEvent, GenerationParams, GenerationResult, LevelGenerator, generate_level};
pub use levelgen::grid::Grid;
pub use levelgen::seed::SeedChoice;
pub use types::{Pos, Tile};
