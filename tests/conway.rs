use std::collections::HashSet;

use lifegrid::seed::{SeedRng, random_grid};
use lifegrid::{Grid, Rule, SimulationState};
use rand::SeedableRng;

fn grid_with(width: usize, height: usize, cells: &[(usize, usize)]) -> Grid {
    let mut grid = Grid::new(width, height).unwrap();
    for &(row, col) in cells {
        grid.set(row, col, true);
    }
    grid
}

fn collect_live(grid: &Grid) -> HashSet<(usize, usize)> {
    grid.iter_alive().collect()
}

// Reference step on a bounded board: anything off the board is dead.
fn step_naive(cells: &HashSet<(usize, usize)>, width: usize, height: usize) -> HashSet<(usize, usize)> {
    let mut next = HashSet::new();
    for row in 0..height as i64 {
        for col in 0..width as i64 {
            let mut neighbors = 0;
            for dr in -1..=1 {
                for dc in -1..=1 {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    let (r, c) = (row + dr, col + dc);
                    if r < 0 || c < 0 {
                        continue;
                    }
                    if cells.contains(&(r as usize, c as usize)) {
                        neighbors += 1;
                    }
                }
            }
            let alive = cells.contains(&(row as usize, col as usize));
            let next_alive = if alive {
                neighbors == 2 || neighbors == 3
            } else {
                neighbors == 3
            };
            if next_alive {
                next.insert((row as usize, col as usize));
            }
        }
    }
    next
}

#[test]
fn every_three_by_three_board_matches_reference() {
    for bits in 0u16..512 {
        let cells: Vec<_> = (0..9)
            .filter(|i| bits & (1 << i) != 0)
            .map(|i| (i / 3, i % 3))
            .collect();
        let grid = grid_with(3, 3, &cells);
        let expected = step_naive(&collect_live(&grid), 3, 3);

        let mut state = SimulationState::from_grid(grid, Rule::Conway);
        state.step();
        assert_eq!(collect_live(state.grid()), expected, "board {bits:09b}");
    }
}

#[test]
fn centre_follows_neighbour_thresholds() {
    for bits in 0u16..512 {
        let cells: Vec<_> = (0..9)
            .filter(|i| bits & (1 << i) != 0)
            .map(|i| (i / 3, i % 3))
            .collect();
        let grid = grid_with(3, 3, &cells);
        let was_alive = grid.get(1, 1);
        let neighbors = grid.alive_neighbors(1, 1);

        let mut state = SimulationState::from_grid(grid, Rule::Conway);
        state.step();
        let now_alive = state.grid().get(1, 1);
        match neighbors {
            0 | 1 => assert!(!now_alive, "underpopulated centre in {bits:09b}"),
            2 => assert_eq!(now_alive, was_alive, "two neighbours must keep state in {bits:09b}"),
            3 => assert!(now_alive, "three neighbours must give life in {bits:09b}"),
            _ => assert!(!now_alive, "overcrowded centre in {bits:09b}"),
        }
    }
}

#[test]
fn random_boards_match_reference_over_many_turns() {
    let (width, height) = (12, 9);
    for seed in 0..8 {
        let mut rng = SeedRng::seed_from_u64(seed);
        let grid = random_grid(width, height, 0.4, &mut rng).unwrap();
        let mut expected = collect_live(&grid);
        let mut state = SimulationState::from_grid(grid, Rule::Conway);
        for turn in 1..=20 {
            state.step();
            expected = step_naive(&expected, width, height);
            assert_eq!(collect_live(state.grid()), expected, "seed {seed}, turn {turn}");
        }
    }
}

#[test]
fn glider_moves_like_the_textbook() {
    let glider = [(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)];
    let mut state = SimulationState::from_grid(grid_with(10, 10, &glider), Rule::Conway);

    state.step();
    let expected: HashSet<_> = [(2, 1), (2, 3), (3, 2), (3, 3), (4, 2)].into_iter().collect();
    assert_eq!(state.grid().alive_count(), 5);
    assert_eq!(collect_live(state.grid()), expected);

    state.step_n(3);
    let shifted: HashSet<_> = glider.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
    assert_eq!(collect_live(state.grid()), shifted);
    assert_eq!(state.turn(), 4);
}

#[test]
fn all_dead_board_stays_dead() {
    let rows = vec![vec![false; 3]; 3];
    let mut state = SimulationState::from_grid(Grid::from_matrix(3, 3, &rows).unwrap(), Rule::Conway);
    for _ in 0..25 {
        state.step();
        assert_eq!(state.grid().alive_count(), 0);
    }
    assert_eq!(state.turn(), 25);
}

#[test]
fn corner_cell_only_counts_on_board_neighbours() {
    let full = Grid::from_matrix(3, 3, &vec![vec![true; 3]; 3]).unwrap();
    assert_eq!(full.alive_neighbors(0, 0), 3);
    assert!(!full.top_is_alive(0, 0));
    assert!(!full.left_is_alive(0, 0));
    assert!(!full.top_left_is_alive(0, 0));
    assert!(!full.top_right_is_alive(0, 0));
    assert!(!full.bottom_left_is_alive(0, 0));
    assert!(full.right_is_alive(0, 0));
    assert!(full.bottom_is_alive(0, 0));
    assert!(full.bottom_right_is_alive(0, 0));
}

#[test]
fn glider_dies_against_the_corner_without_wrapping() {
    let glider = [(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)];
    let mut state = SimulationState::from_grid(grid_with(6, 6, &glider), Rule::Conway);
    state.step_n(40);
    // It turns into a block once it hits the bottom-right corner.
    let block: HashSet<_> = [(4, 4), (4, 5), (5, 4), (5, 5)].into_iter().collect();
    assert_eq!(collect_live(state.grid()), block);
}
