// --- File: lib.rs ---
//! Fixed-grid Game of Life engine (B3/S23 by default).
//!
//! The library is headless: the window and GPU drawing live in the binary.

pub mod config;
pub mod constants;
pub mod error;
pub mod grid;
pub mod neighborhood;
pub mod rules;
pub mod seed;
pub mod simulation;

pub use config::SimulationConfig;
pub use error::LifeError;
pub use grid::Grid;
pub use neighborhood::Direction;
pub use rules::Rule;
pub use seed::SeedSource;
pub use simulation::{SimulationState, SpeedChange, next_generation};

// --- End of File: lib.rs ---
