use std::fs;
use std::path::PathBuf;

use lifegrid::seed::load_pattern_file;
use lifegrid::{Rule, SeedSource, SimulationConfig, SimulationState};

fn write_pattern(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("lifegrid-{}-{}.txt", name, std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn two_line_file_sets_expected_cells() {
    let path = write_pattern("two-line", "101\n010");
    let grid = load_pattern_file(5, 4, &path).unwrap();
    fs::remove_file(&path).unwrap();

    let alive: Vec<_> = grid.iter_alive().collect();
    assert_eq!(alive, vec![(0, 0), (0, 2), (1, 1)]);
    for row in 2..4 {
        assert!(grid.row(row).iter().all(|&alive| !alive), "row {row} should be dead");
    }
}

#[test]
fn grid_text_reloads_to_same_grid() {
    let config = SimulationConfig::new(7, 5).with_seed(SeedSource::Random {
        seed: Some(3),
        density: 0.5,
    });
    let state = SimulationState::new(&config).unwrap();

    let path = write_pattern("reload", &state.grid().to_string());
    let reloaded = load_pattern_file(7, 5, &path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(&reloaded, state.grid());
}

#[test]
fn file_seeded_blinker_runs() {
    let path = write_pattern("blinker", "00000\n00000\n01110\n");
    let config = SimulationConfig::new(5, 5)
        .with_seed(SeedSource::File(path.clone()))
        .with_rule(Rule::Conway);
    let mut state = SimulationState::new(&config).unwrap();
    fs::remove_file(&path).unwrap();

    state.step();
    let alive: Vec<_> = state.grid().iter_alive().collect();
    assert_eq!(alive, vec![(1, 2), (2, 2), (3, 2)]);
}

#[test]
fn missing_file_starts_empty() {
    let path = std::env::temp_dir().join("lifegrid-this-file-is-not-here.txt");
    let config = SimulationConfig::new(4, 4).with_seed(SeedSource::File(path));
    let state = SimulationState::new(&config).unwrap();
    assert_eq!(state.grid().alive_count(), 0);
}
