// --- File: main.rs ---
use anyhow::{Context, Result};
use clap::Parser;
use lifegrid::constants::*;
use lifegrid::{Rule, SeedSource, SimulationConfig, SimulationState, SpeedChange};
use std::{path::PathBuf, sync::Arc, time::Duration, time::Instant};
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, MouseScrollDelta, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

mod renderer;

use renderer::Renderer;

const WINDOW_TITLE: &str = "Game of Life";

/// Conway's Game of Life on a fixed grid.
///
/// Controls: Space pauses, R resets the tick interval, scroll or arrow keys
/// change speed, Escape quits.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Pattern file: one line per row, '1' marks an alive cell. Random seeding when omitted.
    #[arg(value_name = "PATTERN")]
    pattern: Option<PathBuf>,
    /// Number of columns.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH as u32, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,
    /// Number of rows.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT as u32, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,
    /// Edge length of a cell on screen.
    #[arg(long, value_name = "PIXELS", default_value_t = DEFAULT_CELL_SIZE, value_parser = clap::value_parser!(u32).range(1..=256))]
    cell_size: u32,
    /// Delay between turns; R restores it while running.
    #[arg(long, value_name = "MILLISECONDS", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    interval_ms: u64,
    /// How much one scroll notch changes the delay.
    #[arg(long, value_name = "MILLISECONDS", default_value_t = TICK_INTERVAL_STEP_MS)]
    interval_step_ms: u64,
    /// Seed for random seeding, for reproducible runs.
    #[arg(long, conflicts_with = "pattern")]
    seed: Option<u64>,
    /// Probability that a randomly seeded cell starts alive.
    #[arg(long, default_value_t = DEFAULT_ALIVE_DENSITY, conflicts_with = "pattern")]
    density: f64,
    /// `conway` or a rulestring such as B36/S23.
    #[arg(long, default_value = "conway")]
    rule: Rule,
    /// Run this many turns without a window, then print the final grid.
    #[arg(long, value_name = "TURNS")]
    generations: Option<u64>,
    /// Start with the simulation paused.
    #[arg(long)]
    paused: bool,
}

impl CliArgs {
    fn into_config(self) -> SimulationConfig {
        let seed = match self.pattern {
            Some(path) => SeedSource::File(path),
            None => SeedSource::Random {
                seed: self.seed,
                density: self.density,
            },
        };
        let mut config = SimulationConfig::new(self.width as usize, self.height as usize)
            .with_seed(seed)
            .with_rule(self.rule);
        config.cell_size = self.cell_size;
        config.tick_interval = Duration::from_millis(self.interval_ms);
        config.tick_interval_step = Duration::from_millis(self.interval_step_ms);
        config.start_paused = self.paused;
        config
    }
}

fn run_headless(mut state: SimulationState, turns: u64) {
    state.step_n(turns);
    print!("{}", state.grid());
    println!("Total turns executed: {}", state.turn());
}

fn window_title(state: &SimulationState) -> String {
    format!(
        "{} - Turn {} - Alive {} - {} ms{}",
        WINDOW_TITLE,
        state.turn(),
        state.grid().alive_count(),
        state.tick_interval().as_millis(),
        if state.is_paused() { " [PAUSED]" } else { "" }
    )
}

// Scroll up shortens the interval, scroll down lengthens it.
fn scroll_to_speed_change(delta: MouseScrollDelta) -> Option<SpeedChange> {
    let dy = match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    };
    if dy > 0.0 {
        Some(SpeedChange::Faster)
    } else if dy < 0.0 {
        Some(SpeedChange::Slower)
    } else {
        None
    }
}

// A changed interval takes effect on the pending turn, not only the next one.
fn clamp_next_tick(next_tick: Instant, now: Instant, interval: Duration) -> Instant {
    next_tick.min(now + interval)
}

// --- Main Function ---
fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();
    let generations = args.generations;
    let config = args.into_config();
    let mut simulation_state =
        SimulationState::new(&config).context("failed to set up the simulation")?;

    if let Some(turns) = generations {
        run_headless(simulation_state, turns);
        return Ok(());
    }

    let (window_width, window_height) = config
        .window_size()
        .context("grid does not fit in a window")?;
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(window_width, window_height))
            .with_resizable(false)
            .build(&event_loop)?,
    );
    let mut renderer = pollster::block_on(Renderer::new(
        window.clone(),
        config.width * config.height,
        config.cell_size,
    ))
    .context("failed to initialise the renderer")?;
    let mut next_tick = Instant::now();

    event_loop.run(move |event, elwt: &EventLoopWindowTarget<()>| match event {
        Event::AboutToWait => {
            if simulation_state.is_paused() {
                elwt.set_control_flow(ControlFlow::Wait);
                return;
            }
            let now = Instant::now();
            if now >= next_tick {
                if simulation_state.update() {
                    window.request_redraw();
                }
                next_tick = now + simulation_state.tick_interval();
            }
            elwt.set_control_flow(ControlFlow::WaitUntil(next_tick));
        }
        Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(physical_size) => {
                renderer.resize(physical_size);
                window.request_redraw();
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                renderer.resize(window.inner_size());
                window.request_redraw();
            }
            WindowEvent::MouseWheel { delta, .. } => {
                if let Some(change) = scroll_to_speed_change(delta) {
                    simulation_state.adjust_tick_interval(change);
                    next_tick = clamp_next_tick(
                        next_tick,
                        Instant::now(),
                        simulation_state.tick_interval(),
                    );
                    window.request_redraw();
                }
            }
            WindowEvent::KeyboardInput {
                event: key_event, ..
            } => {
                if key_event.state == ElementState::Pressed && !key_event.repeat {
                    let interval_changed = match key_event.physical_key {
                        PhysicalKey::Code(KeyCode::ArrowUp) => {
                            simulation_state.adjust_tick_interval(SpeedChange::Faster);
                            true
                        }
                        PhysicalKey::Code(KeyCode::ArrowDown) => {
                            simulation_state.adjust_tick_interval(SpeedChange::Slower);
                            true
                        }
                        PhysicalKey::Code(KeyCode::KeyR) => {
                            simulation_state.reset_tick_interval();
                            true
                        }
                        PhysicalKey::Code(KeyCode::Space) => {
                            simulation_state.toggle_pause();
                            next_tick = Instant::now();
                            false
                        }
                        PhysicalKey::Code(KeyCode::Escape) => {
                            elwt.exit();
                            false
                        }
                        _ => false,
                    };
                    if interval_changed {
                        next_tick = clamp_next_tick(
                            next_tick,
                            Instant::now(),
                            simulation_state.tick_interval(),
                        );
                    }
                    window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => {
                match renderer.render(simulation_state.grid()) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        renderer.reconfigure()
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("GPU out of memory, exiting");
                        elwt.exit();
                    }
                    Err(e) => log::error!("Render error: {:?}", e),
                }
                window.set_title(&window_title(&simulation_state));
            }
            _ => {}
        },
        Event::LoopExiting => {
            println!("Total turns executed: {}", simulation_state.turn());
        }
        _ => {}
    })?;
    Ok(())
}


// --- End of File: main.rs ---
