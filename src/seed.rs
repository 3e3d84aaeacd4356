// --- File: seed.rs ---
use crate::constants::ALIVE_CHAR;
use crate::error::{LifeError, Result};
use crate::grid::Grid;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub type SeedRng = StdRng;

/// Where the first generation comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedSource {
    /// Each cell alive independently with probability `density`.
    /// `seed: None` draws a seed from entropy.
    Random { seed: Option<u64>, density: f64 },
    /// Caller supplied rows, must match the grid exactly.
    Matrix(Vec<Vec<bool>>),
    /// Pattern file, one line per row.
    File(PathBuf),
}

impl SeedSource {
    /// Builds the first generation for a `width` x `height` grid.
    pub fn build(&self, width: usize, height: usize) -> Result<Grid> {
        match self {
            SeedSource::Random { seed, density } => {
                let seed = seed.unwrap_or_else(|| {
                    let seed = rand::random();
                    log::info!("No seed given, using {}", seed);
                    seed
                });
                let mut rng = SeedRng::seed_from_u64(seed);
                random_grid(width, height, *density, &mut rng)
            }
            SeedSource::Matrix(rows) => Grid::from_matrix(width, height, rows),
            SeedSource::File(path) => load_pattern_file(width, height, path),
        }
    }
}

/// Fills a grid cell by cell, each alive with probability `density`.
pub fn random_grid<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    density: f64,
    rng: &mut R,
) -> Result<Grid> {
    if !(0.0..=1.0).contains(&density) {
        return Err(LifeError::InvalidDensity(density));
    }
    let mut grid = Grid::new(width, height)?;
    for row in 0..height {
        for cell in grid.row_mut(row) {
            *cell = rng.gen_bool(density);
        }
    }
    Ok(grid)
}

/// Parses a pattern from `reader`.
///
/// Line `r` describes row `r`; byte `c` of that line set to `'1'` makes
/// `(r, c)` alive. Anything else is dead. Extra lines and columns past the
/// grid are ignored, missing ones stay dead. A read error ends the pattern
/// at the last complete line.
pub fn parse_pattern<B: BufRead>(width: usize, height: usize, reader: B) -> Result<Grid> {
    let mut grid = Grid::new(width, height)?;
    for (row, line) in reader.split(b'\n').take(height).enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::warn!("Stopped reading pattern at line {}: {}", row + 1, e);
                break;
            }
        };
        for (cell, &byte) in grid.row_mut(row).iter_mut().zip(line.iter()) {
            *cell = byte == ALIVE_CHAR;
        }
    }
    Ok(grid)
}

/// Reads a pattern file. A file that cannot be opened gives an all-dead grid.
pub fn load_pattern_file(width: usize, height: usize, path: &Path) -> Result<Grid> {
    match File::open(path) {
        Ok(file) => {
            let grid = parse_pattern(width, height, BufReader::new(file))?;
            log::info!(
                "Loaded {} alive cells from {}",
                grid.alive_count(),
                path.display()
            );
            Ok(grid)
        }
        Err(e) => {
            log::warn!(
                "Could not open pattern file {}: {}. Starting with an empty grid.",
                path.display(),
                e
            );
            Grid::new(width, height)
        }
    }
}


// --- End of File: seed.rs ---
