use tracing::debug;

use super::{FieldGenerator, FIELD_MAX, FIELD_MIN};
use crate::{grid::Grid, rng::WorldRng};

/// Random noise relaxed by repeated Moore-neighbourhood averaging.
pub struct SmoothingGenerator {
    rounds: u32,
}

impl SmoothingGenerator {
    pub fn new(rounds: u32) -> Self {
        Self { rounds }
    }
}

impl FieldGenerator for SmoothingGenerator {
    fn name(&self) -> &str {
        "simple"
    }

    fn generate(&self, width: usize, height: usize, rng: &mut WorldRng) -> Grid<i32> {
        let mut grid = Grid::from_fn(width, height, |_, _| rng.int_in(FIELD_MIN, FIELD_MAX));
        for _ in 0..self.rounds {
            grid = smooth_once(&grid);
        }
        debug!(width, height, rounds = self.rounds, "smoothed field generated");
        grid
    }
}

/// One smoothing round. Reads `grid` only, so no updated value leaks into a
/// neighbour's average within the same round.
pub(crate) fn smooth_once(grid: &Grid<i32>) -> Grid<i32> {
    Grid::from_fn(grid.width(), grid.height(), |x, y| {
        let (sum, count) = grid
            .moore_neighborhood(x, y)
            .fold((0_i64, 0_i64), |(sum, count), value| {
                (sum + *value as i64, count + 1)
            });
        (sum as f64 / count as f64).round() as i32
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rounds_is_raw_noise() {
        let mut rng = WorldRng::new(Some(42));
        let expected = Grid::from_fn(6, 4, |_, _| rng.int_in(FIELD_MIN, FIELD_MAX));

        let mut rng = WorldRng::new(Some(42));
        let grid = SmoothingGenerator::new(0).generate(6, 4, &mut rng);
        assert_eq!(grid, expected);
    }

    #[test]
    fn test_smooth_once_edge_averages() {
        // 3x2:
        // 0 4 4
        // 0 0 4
        let grid = Grid::from_fn(3, 2, |x, y| [[0, 4, 4], [0, 0, 4]][y][x]);
        let smoothed = smooth_once(&grid);

        // corner (0,0): 0,4,0,0 -> 1.0
        assert_eq!(smoothed[0][0], 1);
        // edge (1,0): all six cells -> 12/6 = 2
        assert_eq!(smoothed[0][1], 2);
        // corner (2,1): 4,4,0,4 -> 3
        assert_eq!(smoothed[1][2], 3);
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        // (1 + 2) / 2 = 1.5 -> 2
        let grid = Grid::from_fn(2, 1, |x, _| [1, 2][x]);
        let smoothed = smooth_once(&grid);
        assert_eq!(smoothed[0], [2, 2]);
    }

    #[test]
    fn test_constant_grid_is_fixed_point() {
        let grid = Grid::new(5, 5, 3);
        assert_eq!(smooth_once(&grid), grid);
    }

    #[test]
    fn test_values_stay_in_range() {
        let mut rng = WorldRng::new(Some(11));
        let grid = SmoothingGenerator::new(4).generate(13, 7, &mut rng);
        assert_eq!(grid.dimensions(), (13, 7));
        assert!(grid.iter().all(|v| (FIELD_MIN..=FIELD_MAX).contains(v)));
    }
}
