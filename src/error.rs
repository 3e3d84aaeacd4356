// --- File: error.rs ---
use thiserror::Error;

/// Errors raised while building a simulation from caller input.
///
/// Reading the pattern file has no variant here: a missing or short file
/// only leaves cells dead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LifeError {
    /// A grid needs at least one row and one column.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    /// `width * height` cells do not fit in memory addressing.
    #[error("grid of {width}x{height} cells is too large")]
    GridTooLarge { width: usize, height: usize },

    /// The window for this grid would not fit in `u32` pixels.
    #[error("window for a {width}x{height} grid at {cell_size} px per cell is too large")]
    WindowTooLarge {
        width: usize,
        height: usize,
        cell_size: u32,
    },

    /// A seed matrix does not match the configured grid.
    #[error("seed matrix is {actual_width}x{actual_height}, expected {width}x{height}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        actual_width: usize,
        actual_height: usize,
    },

    /// Random seeding density outside `0.0..=1.0`.
    #[error("alive density must be within 0.0..=1.0, got {0}")]
    InvalidDensity(f64),

    /// A rulestring that is neither `conway` nor `B<digits>/S<digits>`.
    #[error("invalid rule '{rule}': {reason}")]
    InvalidRule { rule: String, reason: String },
}

pub type Result<T> = std::result::Result<T, LifeError>;

// --- End of File: error.rs ---
