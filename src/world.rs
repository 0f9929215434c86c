use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    error::GenerationError,
    generator::Algorithm,
    grid::Grid,
    rng::{derive_seed, WorldRng},
    terrain::{classify, Terrain},
};

/// One cell of the world. The terrain is always derived from the three
/// fields and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    height: i32,
    moisture: i32,
    temperature: i32,
}

impl Tile {
    pub fn new(height: i32, moisture: i32, temperature: i32) -> Self {
        Self {
            height,
            moisture,
            temperature,
        }
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn moisture(&self) -> i32 {
        self.moisture
    }

    pub fn temperature(&self) -> i32 {
        self.temperature
    }

    pub fn terrain(&self) -> Terrain {
        classify(self.height, self.moisture, self.temperature)
    }
}

pub type World = Grid<Tile>;

/// Seeds for the three fields. `None` draws that field from OS entropy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSet {
    #[serde(default)]
    pub height: Option<u64>,
    #[serde(default)]
    pub moisture: Option<u64>,
    #[serde(default)]
    pub temperature: Option<u64>,
}

impl SeedSet {
    pub fn new(height: Option<u64>, moisture: Option<u64>, temperature: Option<u64>) -> Self {
        Self {
            height,
            moisture,
            temperature,
        }
    }

    /// Three distinct, reproducible seeds from a single master seed.
    pub fn derived(master_seed: u64) -> Self {
        Self {
            height: Some(derive_seed(master_seed, 0)),
            moisture: Some(derive_seed(master_seed, 1)),
            temperature: Some(derive_seed(master_seed, 2)),
        }
    }

    pub fn is_deterministic(&self) -> bool {
        self.height.is_some() && self.moisture.is_some() && self.temperature.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldSettings {
    pub width: usize,
    pub height: usize,
    pub algorithm: Algorithm,
    pub seeds: SeedSet,
}

impl WorldSettings {
    pub fn generate(&self) -> Result<World, GenerationError> {
        generate_world(self.width, self.height, self.algorithm, self.seeds)
    }
}

/// Generate height, moisture and temperature fields with the same algorithm,
/// one RNG per field, and classify every cell.
pub fn generate_world(
    width: usize,
    height: usize,
    algorithm: Algorithm,
    seeds: SeedSet,
) -> Result<World, GenerationError> {
    if width == 0 || height == 0 {
        return Err(GenerationError::InvalidDimensions { width, height });
    }
    algorithm.validate()?;

    let generator = algorithm.generator();
    let field = |seed: Option<u64>| {
        let mut rng = WorldRng::new(seed);
        generator.generate(width, height, &mut rng)
    };
    let heights = field(seeds.height);
    let moisture = field(seeds.moisture);
    let temperature = field(seeds.temperature);

    let expected = (width, height);
    for (name, grid) in [
        ("height", &heights),
        ("moisture", &moisture),
        ("temperature", &temperature),
    ] {
        if grid.dimensions() != expected {
            return Err(GenerationError::ShapeMismatch {
                field: name,
                expected,
                found: grid.dimensions(),
            });
        }
    }

    let world = Grid::from_fn(width, height, |x, y| {
        Tile::new(heights[y][x], moisture[y][x], temperature[y][x])
    });
    info!(
        width,
        height,
        algorithm = generator.name(),
        deterministic = seeds.is_deterministic(),
        "world generated"
    );
    Ok(world)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSnapshot {
    pub height: i32,
    pub moisture: i32,
    pub temperature: i32,
    pub terrain: Terrain,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub width: usize,
    pub height: usize,
    pub terrain_counts: BTreeMap<Terrain, usize>,
    pub rows: Vec<Vec<TileSnapshot>>,
}

impl Grid<Tile> {
    pub fn terrain_counts(&self) -> BTreeMap<Terrain, usize> {
        let mut counts = BTreeMap::new();
        for tile in self.iter() {
            *counts.entry(tile.terrain()).or_insert(0) += 1;
        }
        counts
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        let rows = self
            .rows()
            .map(|row| {
                row.iter()
                    .map(|tile| TileSnapshot {
                        height: tile.height,
                        moisture: tile.moisture,
                        temperature: tile.temperature,
                        terrain: tile.terrain(),
                    })
                    .collect()
            })
            .collect();
        WorldSnapshot {
            width: self.width(),
            height: self.height(),
            terrain_counts: self.terrain_counts(),
            rows,
        }
    }
}
