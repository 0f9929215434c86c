//! Field generators
//!
//! A field is a `Grid<i32>` with values in `[0, 4]`. Both strategies produce
//! the same shape and range, so the world assembler treats them alike.

mod fractal;
mod smoothing;

use serde::{Deserialize, Serialize};

use crate::{error::GenerationError, grid::Grid, rng::WorldRng};

pub use fractal::FractalGenerator;
pub use smoothing::SmoothingGenerator;

/// Inclusive bounds of every generated field value.
pub const FIELD_MIN: i32 = 0;
pub const FIELD_MAX: i32 = 4;

pub const DEFAULT_SMOOTHING: u32 = 2;
pub const DEFAULT_ROUGHNESS: f64 = 1.0;

fn default_smoothing() -> u32 {
    DEFAULT_SMOOTHING
}

fn default_roughness() -> f64 {
    DEFAULT_ROUGHNESS
}

pub trait FieldGenerator {
    fn name(&self) -> &str;
    fn generate(&self, width: usize, height: usize, rng: &mut WorldRng) -> Grid<i32>;
}

/// Generation strategy together with the one parameter it uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Algorithm {
    Simple {
        #[serde(default = "default_smoothing")]
        smoothing: u32,
    },
    Fractal {
        #[serde(default = "default_roughness")]
        roughness: f64,
    },
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::Simple {
            smoothing: DEFAULT_SMOOTHING,
        }
    }
}

impl Algorithm {
    /// Resolve a `"simple"` / `"fractal"` tag. Only the parameter belonging
    /// to the chosen strategy is kept.
    pub fn from_selector(
        name: &str,
        smoothing: u32,
        roughness: f64,
    ) -> Result<Self, GenerationError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(Algorithm::Simple { smoothing }),
            "fractal" => Ok(Algorithm::Fractal { roughness }),
            _ => Err(GenerationError::UnknownAlgorithm(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Simple { .. } => "simple",
            Algorithm::Fractal { .. } => "fractal",
        }
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        match *self {
            Algorithm::Fractal { roughness } if !(roughness.is_finite() && roughness > 0.0) => {
                Err(GenerationError::InvalidRoughness(roughness))
            }
            _ => Ok(()),
        }
    }

    pub fn generator(&self) -> Box<dyn FieldGenerator> {
        match *self {
            Algorithm::Simple { smoothing } => Box::new(SmoothingGenerator::new(smoothing)),
            Algorithm::Fractal { roughness } => Box::new(FractalGenerator::new(roughness)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_parsing() {
        assert_eq!(
            Algorithm::from_selector("simple", 3, 0.5),
            Ok(Algorithm::Simple { smoothing: 3 })
        );
        assert_eq!(
            Algorithm::from_selector("Fractal", 3, 0.5),
            Ok(Algorithm::Fractal { roughness: 0.5 })
        );
        assert_eq!(
            Algorithm::from_selector("perlin", 3, 0.5),
            Err(GenerationError::UnknownAlgorithm("perlin".into()))
        );
    }

    #[test]
    fn test_roughness_validation() {
        assert!(Algorithm::Fractal { roughness: 1.0 }.validate().is_ok());
        assert!(Algorithm::Simple { smoothing: 0 }.validate().is_ok());
        for roughness in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(Algorithm::Fractal { roughness }.validate().is_err());
        }
    }

    #[test]
    fn test_generator_names() {
        assert_eq!(Algorithm::default().generator().name(), "simple");
        assert_eq!(
            Algorithm::Fractal { roughness: 1.0 }.generator().name(),
            "fractal"
        );
    }

    #[test]
    fn test_yaml_defaults() {
        let simple: Algorithm = serde_yaml::from_str("kind: simple").unwrap();
        assert_eq!(simple, Algorithm::Simple { smoothing: 2 });

        let fractal: Algorithm = serde_yaml::from_str("kind: fractal\nroughness: 0.25").unwrap();
        assert_eq!(fractal, Algorithm::Fractal { roughness: 0.25 });
    }
}
