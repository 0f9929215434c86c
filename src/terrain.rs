use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    Water,
    Sand,
    Desert,
    Grass,
    Forest,
    Mountain,
    Snow,
    Tundra,
    Taiga,
    Savanna,
    Rainforest,
}

impl Terrain {
    pub const ALL: [Terrain; 11] = [
        Terrain::Water,
        Terrain::Sand,
        Terrain::Desert,
        Terrain::Grass,
        Terrain::Forest,
        Terrain::Mountain,
        Terrain::Snow,
        Terrain::Tundra,
        Terrain::Taiga,
        Terrain::Savanna,
        Terrain::Rainforest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Terrain::Water => "water",
            Terrain::Sand => "sand",
            Terrain::Desert => "desert",
            Terrain::Grass => "grass",
            Terrain::Forest => "forest",
            Terrain::Mountain => "mountain",
            Terrain::Snow => "snow",
            Terrain::Tundra => "tundra",
            Terrain::Taiga => "taiga",
            Terrain::Savanna => "savanna",
            Terrain::Rainforest => "rainforest",
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Terrain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Terrain::ALL
            .into_iter()
            .find(|terrain| terrain.as_str() == s)
            .ok_or_else(|| format!("unknown terrain '{s}'"))
    }
}

/// Map a (height, moisture, temperature) triple to its terrain.
///
/// Rules are checked in order and the first match wins, so height overrides
/// moisture and moisture overrides the moderate-band temperature split. Every
/// integer triple has an answer; values outside `[0, 4]` fall into the
/// nearest band.
pub fn classify(height: i32, moisture: i32, temperature: i32) -> Terrain {
    if height <= 0 {
        return Terrain::Water;
    }

    if height >= 4 {
        return if temperature <= 1 {
            Terrain::Snow
        } else {
            Terrain::Mountain
        };
    }

    if moisture <= 1 {
        return if temperature >= 2 {
            Terrain::Desert
        } else {
            Terrain::Tundra
        };
    }

    if moisture >= 3 {
        return if temperature >= 3 {
            Terrain::Rainforest
        } else {
            Terrain::Forest
        };
    }

    // moderate moisture
    if temperature >= 3 {
        Terrain::Savanna
    } else if temperature <= 1 {
        Terrain::Taiga
    } else {
        Terrain::Grass
    }
}
