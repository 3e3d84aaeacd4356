// --- File: simulation.rs ---
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::rules::Rule;
use std::time::Duration;

/// Direction of a tick interval change.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SpeedChange {
    /// Shorter interval.
    Faster,
    /// Longer interval.
    Slower,
}

/// Writes the generation after `current` into `next`.
///
/// Reads only `current`, so the result does not depend on the order cells
/// are visited in. Every cell of `next` is overwritten.
pub fn next_generation(current: &Grid, rule: Rule, next: &mut Grid) {
    assert!(
        current.same_dimensions(next),
        "generation buffers differ in size"
    );
    for row in 0..current.height() {
        for col in 0..current.width() {
            let alive = current.get(row, col);
            let neighbors = current.alive_neighbors(row, col);
            next.set(row, col, rule.next_state(alive, neighbors));
        }
    }
}

pub struct SimulationState {
    current: Grid,
    // Scratch buffer for the generation being evaluated; swapped in on commit.
    next: Grid,
    rule: Rule,
    turn: u64,
    is_paused: bool,
    tick_interval: Duration,
    default_tick_interval: Duration,
    tick_interval_step: Duration,
    max_tick_interval: Duration,
}

impl SimulationState {
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;
        let grid = config.seed.build(config.width, config.height)?;
        let mut state = Self::from_grid(grid, config.rule);
        state.is_paused = config.start_paused;
        state.default_tick_interval = config.tick_interval;
        state.tick_interval = config.tick_interval;
        state.tick_interval_step = config.tick_interval_step;
        state.max_tick_interval = config.max_tick_interval.max(config.tick_interval);
        log::info!(
            "Simulation {}x{} with rule {}, {} cells alive",
            config.width,
            config.height,
            config.rule,
            state.current.alive_count()
        );
        Ok(state)
    }

    /// Wraps an existing grid with default pacing.
    pub fn from_grid(grid: Grid, rule: Rule) -> Self {
        let defaults = SimulationConfig::default();
        let next = grid.clone();
        Self {
            current: grid,
            next,
            rule,
            turn: 0,
            is_paused: false,
            tick_interval: defaults.tick_interval,
            default_tick_interval: defaults.tick_interval,
            tick_interval_step: defaults.tick_interval_step,
            max_tick_interval: defaults.max_tick_interval,
        }
    }

    /// Runs one turn: evaluate into the scratch buffer, then commit.
    pub fn step(&mut self) {
        next_generation(&self.current, self.rule, &mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);
        self.turn += 1;
        log::debug!(
            "Turn {}: {} cells alive",
            self.turn,
            self.current.alive_count()
        );
    }

    pub fn step_n(&mut self, turns: u64) {
        for _ in 0..turns {
            self.step();
        }
    }

    /// Frame entry point. Runs a turn unless paused; returns whether it did.
    pub fn update(&mut self) -> bool {
        if self.is_paused {
            return false;
        }
        self.step();
        true
    }

    pub fn toggle_pause(&mut self) {
        self.is_paused = !self.is_paused;
        log::info!(
            "Simulation {} at turn {}",
            if self.is_paused { "paused" } else { "resumed" },
            self.turn
        );
    }

    pub fn adjust_tick_interval(&mut self, change: SpeedChange) {
        self.tick_interval = match change {
            SpeedChange::Faster => self.tick_interval.saturating_sub(self.tick_interval_step),
            SpeedChange::Slower => (self.tick_interval + self.tick_interval_step)
                .min(self.max_tick_interval),
        };
        log::info!("Tick interval: {} ms", self.tick_interval.as_millis());
    }

    pub fn reset_tick_interval(&mut self) {
        self.tick_interval = self.default_tick_interval;
        log::info!(
            "Tick interval reset to {} ms",
            self.tick_interval.as_millis()
        );
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    #[inline]
    pub fn rule(&self) -> Rule {
        self.rule
    }

    #[inline]
    pub fn turn(&self) -> u64 {
        self.turn
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    #[inline]
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    #[inline]
    pub fn default_tick_interval(&self) -> Duration {
        self.default_tick_interval
    }
}


// --- End of File: simulation.rs ---
