pub mod error;
pub mod generator;
pub mod grid;
pub mod logging;
pub mod preset;
pub mod render;
pub mod rng;
pub mod terrain;
pub mod world;

pub use error::GenerationError;
pub use generator::Algorithm;
pub use grid::Grid;
pub use terrain::{classify, Terrain};
pub use world::{generate_world, SeedSet, Tile, World, WorldSettings};
