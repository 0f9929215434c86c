use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::{
    generator::Algorithm,
    world::{SeedSet, WorldSettings},
};

pub const DEFAULT_WIDTH: usize = 10;
pub const DEFAULT_HEIGHT: usize = 10;

fn default_width() -> usize {
    DEFAULT_WIDTH
}

fn default_height() -> usize {
    DEFAULT_HEIGHT
}

/// Named world configuration read from YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct Preset {
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Derives all three field seeds when set. Explicit `seeds` entries win.
    #[serde(default)]
    pub master_seed: Option<u64>,
    #[serde(default)]
    pub seeds: SeedSet,
    #[serde(default)]
    pub color: bool,
}

pub struct PresetLoader {
    base_dir: PathBuf,
}

impl PresetLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Preset> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read preset file {}", path.display()))?;
        Preset::from_yaml(&data).with_context(|| format!("Failed to parse {}", path.display()))
    }
}

impl Preset {
    pub fn from_yaml(text: &str) -> Result<Self> {
        let preset: Preset = serde_yaml::from_str(text)?;
        Ok(preset)
    }

    pub fn seeds(&self) -> SeedSet {
        let base = self.master_seed.map(SeedSet::derived).unwrap_or_default();
        SeedSet {
            height: self.seeds.height.or(base.height),
            moisture: self.seeds.moisture.or(base.moisture),
            temperature: self.seeds.temperature.or(base.temperature),
        }
    }

    pub fn settings(&self) -> WorldSettings {
        WorldSettings {
            width: self.width,
            height: self.height,
            algorithm: self.algorithm,
            seeds: self.seeds(),
        }
    }
}
