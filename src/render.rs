//! Isometric ASCII rendering
//!
//! Read-only consumer of a generated world. Glyph and colour tables live here,
//! not in the generation core.

use crate::{terrain::Terrain, world::World};

const RESET: &str = "\x1b[0m";

/// Two-column glyph for a terrain.
pub fn glyph(terrain: Terrain) -> &'static str {
    match terrain {
        Terrain::Water => "~ ",
        Terrain::Sand => ". ",
        Terrain::Desert => "` ",
        Terrain::Grass => ", ",
        Terrain::Forest => "^ ",
        Terrain::Mountain => "A ",
        Terrain::Snow => "* ",
        Terrain::Tundra => ": ",
        Terrain::Taiga => "; ",
        Terrain::Savanna => "' ",
        Terrain::Rainforest => "! ",
    }
}

/// ANSI foreground colour used for a terrain's glyph.
pub fn ansi_color(terrain: Terrain) -> &'static str {
    match terrain {
        Terrain::Water => "\x1b[34m",
        Terrain::Sand | Terrain::Desert | Terrain::Savanna => "\x1b[33m",
        Terrain::Grass | Terrain::Forest | Terrain::Taiga | Terrain::Rainforest => "\x1b[32m",
        Terrain::Mountain | Terrain::Snow | Terrain::Tundra => "\x1b[37m",
    }
}

/// Draw the world from the back row (`y = height - 1`) to the front, each row
/// shifted right by its `y` so the grid reads as a skewed plane.
pub fn render_isometric(world: &World, color: bool) -> String {
    let mut lines = Vec::with_capacity(world.height());
    for (y, row) in world.rows().enumerate().rev() {
        let mut line = " ".repeat(y);
        for tile in row {
            let terrain = tile.terrain();
            if color {
                line.push_str(ansi_color(terrain));
                line.push_str(glyph(terrain));
                line.push_str(RESET);
            } else {
                line.push_str(glyph(terrain));
            }
        }
        lines.push(line);
    }
    lines.join("\n")
}
