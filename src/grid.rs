//! Row-major 2D grid

use std::ops::{Index, IndexMut};

/// Rectangular `width × height` storage. `grid[y]` is row `y`, so cells read
/// as `grid[y][x]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }
}

impl<T> Grid<T> {
    /// Build a grid by calling `f(x, y)` for every cell in row-major order.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.offset(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        self.offset(x, y).map(move |i| &mut self.cells[i])
    }

    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[T]> + ExactSizeIterator + '_ {
        (0..self.height).map(move |y| &self.cells[y * self.width..(y + 1) * self.width])
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.cells.iter()
    }

    /// Cells of the 3×3 block centred on `(x, y)` that lie inside the grid,
    /// the centre included.
    pub fn moore_neighborhood(&self, x: usize, y: usize) -> impl Iterator<Item = &T> + '_ {
        let x0 = x.saturating_sub(1);
        let y0 = y.saturating_sub(1);
        let x1 = (x + 1).min(self.width.saturating_sub(1));
        let y1 = (y + 1).min(self.height.saturating_sub(1));
        (y0..=y1)
            .flat_map(move |ny| (x0..=x1).map(move |nx| (nx, ny)))
            .filter_map(move |(nx, ny)| self.get(nx, ny))
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(&mut f).collect(),
        }
    }

    /// Top-left `width × height` sub-grid. Dimensions are clamped to the
    /// source grid.
    pub fn crop(&self, width: usize, height: usize) -> Grid<T>
    where
        T: Clone,
    {
        let width = width.min(self.width);
        let height = height.min(self.height);
        Grid::from_fn(width, height, |x, y| self.cells[y * self.width + x].clone())
    }
}

impl<T> Index<usize> for Grid<T> {
    type Output = [T];

    fn index(&self, y: usize) -> &[T] {
        assert!(y < self.height, "row {y} out of bounds (height {})", self.height);
        &self.cells[y * self.width..(y + 1) * self.width]
    }
}

impl<T> IndexMut<usize> for Grid<T> {
    fn index_mut(&mut self, y: usize) -> &mut [T] {
        assert!(y < self.height, "row {y} out of bounds (height {})", self.height);
        &mut self.cells[y * self.width..(y + 1) * self.width]
    }
}
