use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use isoworld::{
    generator::{Algorithm, DEFAULT_ROUGHNESS, DEFAULT_SMOOTHING},
    logging::init_logging,
    preset::{Preset, PresetLoader, DEFAULT_HEIGHT, DEFAULT_WIDTH},
    render::render_isometric,
    world::{SeedSet, WorldSettings},
    GenerationError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Ascii,
    Json,
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Procedural isometric terrain generator")]
struct Cli {
    /// YAML preset to start from; explicit flags override its values
    #[arg(long)]
    preset: Option<PathBuf>,

    /// World width in tiles
    #[arg(long)]
    width: Option<usize>,

    /// World height in tiles
    #[arg(long)]
    height: Option<usize>,

    /// Generation algorithm: simple or fractal
    #[arg(long)]
    algorithm: Option<String>,

    /// Smoothing rounds for the simple algorithm
    #[arg(long)]
    smoothing: Option<u32>,

    /// Roughness for the fractal algorithm
    #[arg(long)]
    roughness: Option<f64>,

    /// Seed for the height field
    #[arg(long)]
    seed: Option<u64>,

    /// Seed for the moisture field
    #[arg(long)]
    moisture_seed: Option<u64>,

    /// Seed for the temperature field
    #[arg(long)]
    temperature_seed: Option<u64>,

    /// Treat --seed as a master seed and derive all three field seeds from it
    #[arg(long, requires = "seed")]
    derive_seeds: bool,

    /// Colour the ASCII output with ANSI escapes
    #[arg(long)]
    color: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,

    /// Log filter used when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn algorithm(&self, base: Algorithm) -> Result<Algorithm, GenerationError> {
        let (smoothing, roughness) = match base {
            Algorithm::Simple { smoothing } => (smoothing, DEFAULT_ROUGHNESS),
            Algorithm::Fractal { roughness } => (DEFAULT_SMOOTHING, roughness),
        };
        let name = self.algorithm.as_deref().unwrap_or(base.name());
        Algorithm::from_selector(
            name,
            self.smoothing.unwrap_or(smoothing),
            self.roughness.unwrap_or(roughness),
        )
    }

    fn seeds(&self, base: SeedSet) -> SeedSet {
        let base = match self.seed {
            Some(master) if self.derive_seeds => SeedSet::derived(master),
            Some(seed) => SeedSet {
                height: Some(seed),
                ..base
            },
            None => base,
        };
        SeedSet {
            height: base.height,
            moisture: self.moisture_seed.or(base.moisture),
            temperature: self.temperature_seed.or(base.temperature),
        }
    }

    fn settings(&self, preset: Option<&Preset>) -> Result<WorldSettings, GenerationError> {
        let base = preset.map(Preset::settings).unwrap_or(WorldSettings {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            algorithm: Algorithm::default(),
            seeds: SeedSet::default(),
        });
        Ok(WorldSettings {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            algorithm: self.algorithm(base.algorithm)?,
            seeds: self.seeds(base.seeds),
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let preset = match &cli.preset {
        Some(path) => Some(PresetLoader::new(".").load(path)?),
        None => None,
    };
    if let Some(preset) = &preset {
        info!(
            preset = %preset.name,
            description = preset.description.as_deref().unwrap_or(""),
            "loaded preset"
        );
    }

    let settings = cli.settings(preset.as_ref())?;
    let world = settings.generate()?;

    match cli.format {
        OutputFormat::Ascii => {
            let color = cli.color || preset.as_ref().is_some_and(|p| p.color);
            println!("{}", render_isometric(&world, color));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&world.snapshot())
                .context("Failed to serialize world")?;
            println!("{json}");
        }
    }
    Ok(())
}
