use tracing::debug;

use super::{FieldGenerator, FIELD_MAX};
use crate::{grid::Grid, rng::WorldRng};

/// Diamond-square midpoint displacement.
///
/// The working grid is `(2^k + 1)` square with `2^k >= max(width, height)`.
/// All four corners start from one shared draw. Each round the perturbation
/// range halves, starting from `roughness`. The result is normalised to
/// `[0, 1]`, cropped to the requested size and quantised onto `[0, 4]`.
pub struct FractalGenerator {
    roughness: f64,
}

impl FractalGenerator {
    pub fn new(roughness: f64) -> Self {
        Self { roughness }
    }

    /// Raw diamond-square surface, before normalisation.
    pub(crate) fn surface(&self, width: usize, height: usize, rng: &mut WorldRng) -> Grid<f64> {
        let size = working_size(width, height);
        let last = size - 1;
        let mut grid = Grid::new(size, size, 0.0_f64);

        let corner = rng.next_unit();
        grid[0][0] = corner;
        grid[0][last] = corner;
        grid[last][0] = corner;
        grid[last][last] = corner;

        let mut step = last;
        let mut scale = self.roughness;
        while step > 1 {
            let half = step / 2;

            // diamond
            for y in (half..last).step_by(step) {
                for x in (half..last).step_by(step) {
                    let avg = (grid[y - half][x - half]
                        + grid[y - half][x + half]
                        + grid[y + half][x - half]
                        + grid[y + half][x + half])
                        / 4.0;
                    grid[y][x] = avg + rng.perturbation(scale);
                }
            }

            // square
            for y in (0..size).step_by(half) {
                for x in ((y + half) % step..size).step_by(step) {
                    let mut sum = 0.0;
                    let mut count = 0;
                    if y >= half {
                        sum += grid[y - half][x];
                        count += 1;
                    }
                    if y + half < size {
                        sum += grid[y + half][x];
                        count += 1;
                    }
                    if x >= half {
                        sum += grid[y][x - half];
                        count += 1;
                    }
                    if x + half < size {
                        sum += grid[y][x + half];
                        count += 1;
                    }
                    grid[y][x] = sum / count as f64 + rng.perturbation(scale);
                }
            }

            step = half;
            scale /= 2.0;
        }

        grid
    }
}

impl FieldGenerator for FractalGenerator {
    fn name(&self) -> &str {
        "fractal"
    }

    fn generate(&self, width: usize, height: usize, rng: &mut WorldRng) -> Grid<i32> {
        let surface = self.surface(width, height, rng);
        let normalized = normalize(&surface);
        debug!(
            width,
            height,
            size = surface.width(),
            roughness = self.roughness,
            "fractal field generated"
        );
        normalized
            .crop(width, height)
            .map(|value| (value * FIELD_MAX as f64).round() as i32)
    }
}

/// Side length of the square working grid.
pub(crate) fn working_size(width: usize, height: usize) -> usize {
    width.max(height).max(1).next_power_of_two() + 1
}

/// Rescale to `[0, 1]` by the observed extremes. A flat surface maps to a
/// constant 0.5.
pub(crate) fn normalize(grid: &Grid<f64>) -> Grid<f64> {
    let (min, max) = grid
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
            (min.min(v), max.max(v))
        });
    let range = max - min;
    if range <= 0.0 {
        debug!(min, max, "flat fractal surface, substituting mid-value field");
        return grid.map(|_| 0.5);
    }
    grid.map(|v| (v - min) / range)
}
