//! Procedural level generation domain split into coherent submodules.

pub mod grid;
pub mod model;
pub mod params;
pub mod seed;

mod carve;
mod endpoints;
mod generator;
mod path;
mod rng;
mod stars;

pub use generator::LevelGenerator;
pub use model::{GenEvent, GenerationResult};
pub use params::GenerationParams;
pub use rng::RandomSource;

pub fn generate_level(params: &GenerationParams) -> GenerationResult {
    LevelGenerator::new(params.clone()).generate()
}
