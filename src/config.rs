// --- File: config.rs ---
use crate::constants::*;
use crate::error::{LifeError, Result};
use crate::rules::Rule;
use crate::seed::SeedSource;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    pub cell_size: u32,
    pub tick_interval: Duration,
    pub tick_interval_step: Duration,
    pub max_tick_interval: Duration,
    pub rule: Rule,
    pub seed: SeedSource,
    pub start_paused: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            tick_interval_step: Duration::from_millis(TICK_INTERVAL_STEP_MS),
            max_tick_interval: Duration::from_millis(MAX_TICK_INTERVAL_MS),
            rule: Rule::Conway,
            seed: SeedSource::Random {
                seed: None,
                density: DEFAULT_ALIVE_DENSITY,
            },
            start_paused: false,
        }
    }
}

impl SimulationConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: SeedSource) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }

    /// Checks what can be checked before the grid is built.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(LifeError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.width.checked_mul(self.height).is_none() {
            return Err(LifeError::GridTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        if self.window_size().is_none() {
            return Err(LifeError::WindowTooLarge {
                width: self.width,
                height: self.height,
                cell_size: self.cell_size,
            });
        }
        if let SeedSource::Random { density, .. } = self.seed {
            if !(0.0..=1.0).contains(&density) {
                return Err(LifeError::InvalidDensity(density));
            }
        }
        Ok(())
    }

    /// Window size in pixels for the configured grid, `None` past `u32`.
    pub fn window_size(&self) -> Option<(u32, u32)> {
        let pixels = |cells: usize| u32::try_from(cells).ok()?.checked_mul(self.cell_size);
        Some((pixels(self.width)?, pixels(self.height)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_width_is_invalid() {
        let config = SimulationConfig::new(0, 10);
        assert_eq!(
            config.validate(),
            Err(LifeError::ZeroDimension { width: 0, height: 10 })
        );
    }

    #[test]
    fn density_out_of_range_is_invalid() {
        let config = SimulationConfig::new(4, 4).with_seed(SeedSource::Random {
            seed: Some(1),
            density: -0.1,
        });
        assert_eq!(config.validate(), Err(LifeError::InvalidDensity(-0.1)));
    }

    #[test]
    fn window_size_scales_by_cell() {
        let mut config = SimulationConfig::new(30, 20);
        config.cell_size = 8;
        assert_eq!(config.window_size(), Some((240, 160)));
    }

    #[test]
    fn oversized_window_is_invalid() {
        let mut config = SimulationConfig::new(20_000_000, 1);
        config.cell_size = 256;
        assert_eq!(config.window_size(), None);
        assert_eq!(
            config.validate(),
            Err(LifeError::WindowTooLarge {
                width: 20_000_000,
                height: 1,
                cell_size: 256,
            })
        );
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn width_past_u32_has_no_window() {
        let mut config = SimulationConfig::new(u32::MAX as usize + 1, 1);
        config.cell_size = 1;
        assert_eq!(config.window_size(), None);
    }

    #[test]
    fn cell_count_overflow_is_invalid() {
        let config = SimulationConfig::new(usize::MAX, 2);
        assert_eq!(
            config.validate(),
            Err(LifeError::GridTooLarge {
                width: usize::MAX,
                height: 2,
            })
        );
    }
}

// --- End of File: config.rs ---
