// --- File: constants.rs ---
// --- Grid Defaults ---
pub const DEFAULT_GRID_WIDTH: usize = 100;
pub const DEFAULT_GRID_HEIGHT: usize = 80;
pub const DEFAULT_CELL_SIZE: u32 = 10; // Pixels per cell edge

// --- Seeding ---
// One in three, same odds as drawing 1 from {0, 1, 2}
pub const DEFAULT_ALIVE_DENSITY: f64 = 1.0 / 3.0;

// --- Tick Pacing (milliseconds) ---
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;
pub const TICK_INTERVAL_STEP_MS: u64 = 10;
pub const MAX_TICK_INTERVAL_MS: u64 = 5_000;

// --- Colors (linear RGBA) ---
pub const ALIVE_CELL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const DEAD_CELL_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
pub const BACKGROUND_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 1.0];

// --- Configuration File Format ---
pub const ALIVE_CHAR: u8 = b'1';
pub const DEAD_CHAR: u8 = b'0';

// --- End of File: constants.rs ---
