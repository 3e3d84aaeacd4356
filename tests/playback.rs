use std::time::Duration;

use lifegrid::{SeedSource, SimulationConfig, SimulationState, SpeedChange};

fn random_state(seed: u64) -> SimulationState {
    let config = SimulationConfig::new(20, 20).with_seed(SeedSource::Random {
        seed: Some(seed),
        density: 0.35,
    });
    SimulationState::new(&config).unwrap()
}

#[test]
fn pause_freezes_turns_and_grid() {
    let mut state = random_state(11);
    for _ in 0..3 {
        state.update();
    }
    assert_eq!(state.turn(), 3);

    state.toggle_pause();
    let frozen = state.grid().clone();
    for _ in 0..50 {
        assert!(!state.update());
    }
    assert_eq!(state.turn(), 3);
    assert_eq!(state.grid(), &frozen);

    state.toggle_pause();
    assert!(state.update());
    assert_eq!(state.turn(), 4);
}

#[test]
fn turn_counter_never_goes_back() {
    let mut state = random_state(5);
    let mut last = state.turn();
    for frame in 0..40 {
        if frame % 7 == 0 {
            state.toggle_pause();
        }
        if frame % 5 == 0 {
            state.reset_tick_interval();
        }
        let ran = state.update();
        let now = state.turn();
        assert_eq!(now, last + u64::from(ran));
        last = now;
    }
}

#[test]
fn same_seed_same_history() {
    let mut a = random_state(99);
    let mut b = random_state(99);
    for _ in 0..15 {
        a.step();
        b.step();
        assert_eq!(a.grid(), b.grid());
    }
}

#[test]
fn speed_controls() {
    let mut config = SimulationConfig::new(4, 4);
    config.tick_interval = Duration::from_millis(25);
    config.tick_interval_step = Duration::from_millis(10);
    let mut state = SimulationState::new(&config).unwrap();

    state.adjust_tick_interval(SpeedChange::Faster);
    assert_eq!(state.tick_interval(), Duration::from_millis(15));
    state.adjust_tick_interval(SpeedChange::Faster);
    state.adjust_tick_interval(SpeedChange::Faster);
    assert_eq!(state.tick_interval(), Duration::ZERO);
    state.adjust_tick_interval(SpeedChange::Slower);
    assert_eq!(state.tick_interval(), Duration::from_millis(10));
    state.reset_tick_interval();
    assert_eq!(state.tick_interval(), Duration::from_millis(25));
}
