// --- File: grid.rs ---
use crate::constants::{ALIVE_CHAR, DEAD_CHAR};
use crate::error::{LifeError, Result};
use std::fmt;

/// Fixed-size board of alive flags, stored row-major.
///
/// Coordinates are `(row, col)`: `row` runs over `0..height` and `col` over
/// `0..width`. Direct access outside those ranges is a bug in the caller and
/// panics; neighbour lookups go through [`Grid::try_get`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// All-dead grid of `width` columns by `height` rows.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LifeError::ZeroDimension { width, height });
        }
        let cell_count = width
            .checked_mul(height)
            .ok_or(LifeError::GridTooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![false; cell_count],
        })
    }

    /// Copies a caller supplied matrix. It must have exactly `height` rows of
    /// `width` cells each.
    pub fn from_matrix<R: AsRef<[bool]>>(width: usize, height: usize, rows: &[R]) -> Result<Self> {
        let mut grid = Self::new(width, height)?;
        let mismatch = |actual_width: usize| LifeError::DimensionMismatch {
            width,
            height,
            actual_width,
            actual_height: rows.len(),
        };
        if rows.len() != height {
            let actual_width = rows.first().map_or(0, |r| r.as_ref().len());
            return Err(mismatch(actual_width));
        }
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(mismatch(values.len()));
            }
            grid.row_mut(row).copy_from_slice(values);
        }
        Ok(grid)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) is outside the {}x{} grid",
            self.width,
            self.height
        );
        row * self.width + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    /// Checked read, `None` outside the grid.
    #[inline]
    pub fn try_get(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let index = self.index(row, col);
        self.cells[index] = alive;
    }

    pub fn row(&self, row: usize) -> &[bool] {
        let start = self.index(row, 0);
        &self.cells[start..start + self.width]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [bool] {
        let start = self.index(row, 0);
        &mut self.cells[start..start + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.width)
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of every alive cell, row-major.
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(index, _)| (index / width, index % width))
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn same_dimensions(&self, other: &Grid) -> bool {
        self.width == other.width && self.height == other.height
    }
}

/// Writes the pattern file format: one line per row, `1` alive, `0` dead.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut line = String::with_capacity(self.width);
        for row in self.rows() {
            line.clear();
            line.extend(
                row.iter()
                    .map(|&alive| char::from(if alive { ALIVE_CHAR } else { DEAD_CHAR })),
            );
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}


// --- End of File: grid.rs ---
