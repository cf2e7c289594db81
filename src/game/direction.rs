use super::grid::Grid;

/// One of the four sliding directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// Convert an index (0=Up, 1=Left, 2=Down, 3=Right) to a direction.
    /// Out-of-range values are rejected.
    pub fn from_index(index: usize) -> Option<Direction> {
        Self::ALL.get(index).copied()
    }

    /// Rearrange `grid` so that moving in this direction is a left move.
    pub fn orient(self, grid: &Grid) -> Grid {
        match self {
            Direction::Left => grid.clone(),
            Direction::Right => grid.invert(),
            Direction::Up => grid.transpose(),
            Direction::Down => grid.transpose().invert(),
        }
    }

    /// Undo [`Direction::orient`].
    pub fn restore(self, grid: &Grid) -> Grid {
        match self {
            Direction::Left => grid.clone(),
            Direction::Right => grid.invert(),
            Direction::Up => grid.transpose(),
            Direction::Down => grid.invert().transpose(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Left => "Left",
            Direction::Down => "Down",
            Direction::Right => "Right",
        }
    }
}

/// A discrete player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Move(Direction),
    Restart,
    Exit,
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Action::Move(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap()
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Direction::from_index(0), Some(Direction::Up));
        assert_eq!(Direction::from_index(3), Some(Direction::Right));
        assert_eq!(Direction::from_index(4), None);
    }

    #[test]
    fn test_restore_undoes_orient() {
        let grid = sample();
        for direction in Direction::ALL {
            assert_eq!(direction.restore(&direction.orient(&grid)), grid, "{direction:?}");
        }
    }

    #[test]
    fn test_orient_puts_move_edge_first() {
        let grid = sample();
        // The edge tiles slide towards must land in column 0.
        assert_eq!(Direction::Right.orient(&grid).rows()[0][0], 3);
        assert_eq!(Direction::Up.orient(&grid).rows()[0], vec![1, 4]);
        assert_eq!(Direction::Down.orient(&grid).rows()[0], vec![4, 1]);
    }

    #[test]
    fn test_action_from_direction() {
        assert_eq!(Action::from(Direction::Down), Action::Move(Direction::Down));
    }
}
