// --- File: neighborhood.rs ---
//! Neighbour lookups over a single grid snapshot.
//!
//! Every predicate reads the grid it is called on and nothing else, so during
//! a turn all eight directions see the previous generation. Anything past an
//! edge counts as dead.

use crate::grid::Grid;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::TopLeft,
        Direction::Top,
        Direction::TopRight,
        Direction::Left,
        Direction::Right,
        Direction::BottomLeft,
        Direction::Bottom,
        Direction::BottomRight,
    ];

    /// `(row, col)` offset of the neighbour. Top is `row - 1`, left is `col - 1`.
    #[inline]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::TopLeft => (-1, -1),
            Direction::Top => (-1, 0),
            Direction::TopRight => (-1, 1),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::BottomLeft => (1, -1),
            Direction::Bottom => (1, 0),
            Direction::BottomRight => (1, 1),
        }
    }
}

impl Grid {
    /// Coordinate of the neighbour in `direction`, if it is on the grid.
    #[inline]
    pub fn neighbor_of(&self, row: usize, col: usize, direction: Direction) -> Option<(usize, usize)> {
        let (d_row, d_col) = direction.offset();
        let n_row = row.checked_add_signed(d_row)?;
        let n_col = col.checked_add_signed(d_col)?;
        (n_row < self.height() && n_col < self.width()).then_some((n_row, n_col))
    }

    #[inline]
    pub fn neighbor_is_alive(&self, row: usize, col: usize, direction: Direction) -> bool {
        self.neighbor_of(row, col, direction)
            .is_some_and(|(n_row, n_col)| self.get(n_row, n_col))
    }

    pub fn top_is_alive(&self, row: usize, col: usize) -> bool {
        self.neighbor_is_alive(row, col, Direction::Top)
    }

    pub fn bottom_is_alive(&self, row: usize, col: usize) -> bool {
        self.neighbor_is_alive(row, col, Direction::Bottom)
    }

    pub fn left_is_alive(&self, row: usize, col: usize) -> bool {
        self.neighbor_is_alive(row, col, Direction::Left)
    }

    pub fn right_is_alive(&self, row: usize, col: usize) -> bool {
        self.neighbor_is_alive(row, col, Direction::Right)
    }

    pub fn top_left_is_alive(&self, row: usize, col: usize) -> bool {
        self.neighbor_is_alive(row, col, Direction::TopLeft)
    }

    pub fn top_right_is_alive(&self, row: usize, col: usize) -> bool {
        self.neighbor_is_alive(row, col, Direction::TopRight)
    }

    pub fn bottom_left_is_alive(&self, row: usize, col: usize) -> bool {
        self.neighbor_is_alive(row, col, Direction::BottomLeft)
    }

    pub fn bottom_right_is_alive(&self, row: usize, col: usize) -> bool {
        self.neighbor_is_alive(row, col, Direction::BottomRight)
    }

    /// Number of alive cells among the eight around `(row, col)`, 0 to 8.
    pub fn alive_neighbors(&self, row: usize, col: usize) -> u8 {
        Direction::ALL
            .iter()
            .filter(|&&direction| self.neighbor_is_alive(row, col, direction))
            .count() as u8
    }
}


// --- End of File: neighborhood.rs ---
