use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::direction::Direction;
use super::grid::{row_can_slide_left, slide_row_left, Grid, Tile};
use crate::error::EngineError;

pub const DEFAULT_HEIGHT: usize = 4;
pub const DEFAULT_WIDTH: usize = 4;
pub const DEFAULT_WIN_THRESHOLD: Tile = 2048;

/// Tiles placed on the board by [`GridEngine::reset`].
const INITIAL_TILES: usize = 2;
/// Spawn draws come from `0..SPAWN_DRAW_RANGE`.
const SPAWN_DRAW_RANGE: u32 = 100;
/// A spawn draw above this yields a 4, otherwise a 2: 10% fours.
const FOUR_DRAW_CUTOFF: u32 = 89;

/// Tile value for a spawn draw in `0..100`.
fn tile_for_draw(draw: u32) -> Tile {
    if draw > FOUR_DRAW_CUTOFF {
        4
    } else {
        2
    }
}

/// Owns the tile grid, the score and the high score, and applies moves.
#[derive(Debug, Clone)]
pub struct GridEngine {
    grid: Grid,
    score: u64,
    high_score: u64,
    win_threshold: Tile,
    rng: StdRng,
}

impl GridEngine {
    /// Create an engine seeded from the OS and start a new game.
    pub fn new(height: usize, width: usize, win_threshold: Tile) -> Result<Self, EngineError> {
        Self::with_rng(height, width, win_threshold, StdRng::from_os_rng())
    }

    /// Create an engine with an explicit RNG and start a new game.
    pub fn with_rng(
        height: usize,
        width: usize,
        win_threshold: Tile,
        rng: StdRng,
    ) -> Result<Self, EngineError> {
        if height == 0 || width == 0 {
            return Err(EngineError::InvalidDimensions { height, width });
        }

        let mut engine = GridEngine {
            grid: Grid::new(height, width),
            score: 0,
            high_score: 0,
            win_threshold,
            rng,
        };
        engine.reset();
        Ok(engine)
    }

    /// Wrap an explicit grid without spawning anything. Score starts at 0.
    pub fn from_rows(rows: Vec<Vec<Tile>>, win_threshold: Tile) -> Result<Self, EngineError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let grid =
            Grid::from_rows(rows).ok_or(EngineError::InvalidDimensions { height, width })?;

        Ok(GridEngine {
            grid,
            score: 0,
            high_score: 0,
            win_threshold,
            rng: StdRng::from_os_rng(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn win_threshold(&self) -> Tile {
        self.win_threshold
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn max_tile(&self) -> Tile {
        self.grid.max_tile()
    }

    pub fn empty_count(&self) -> usize {
        self.grid.empty_count()
    }

    /// Start a new game: record the finished game's score as the high score
    /// if it beats it, clear the board and place the opening tiles.
    pub fn reset(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        self.score = 0;
        self.grid = Grid::new(self.grid.height(), self.grid.width());

        // A board with fewer cells than opening tiles just gets filled.
        let cells = self.grid.height() * self.grid.width();
        for _ in 0..INITIAL_TILES.min(cells) {
            if let Err(err) = self.spawn() {
                unreachable!("fresh board ran out of cells: {err}");
            }
        }
    }

    /// Place a 2 (90%) or a 4 (10%) on a uniformly chosen empty cell.
    pub fn spawn(&mut self) -> Result<(), EngineError> {
        let empty = self.grid.empty_cells();
        if empty.is_empty() {
            return Err(EngineError::NoEmptyCell);
        }

        let tile = self.draw_tile();
        let (row, col) = empty[self.rng.random_range(0..empty.len())];
        self.grid.set(row, col, tile);
        debug!("spawned {tile} at ({row}, {col})");
        Ok(())
    }

    fn draw_tile(&mut self) -> Tile {
        tile_for_draw(self.rng.random_range(0..SPAWN_DRAW_RANGE))
    }

    /// True if moving in `direction` would change the grid.
    pub fn move_is_possible(&self, direction: Direction) -> bool {
        direction
            .orient(&self.grid)
            .rows()
            .iter()
            .any(|row| row_can_slide_left(row))
    }

    /// Apply a move. Returns `Ok(false)` and leaves everything untouched when
    /// the move would not change the grid; otherwise slides, scores, spawns
    /// one tile and returns `Ok(true)`. A merge past the tile type's range
    /// fails with `TileOverflow` before anything is changed.
    pub fn move_in(&mut self, direction: Direction) -> Result<bool, EngineError> {
        if !self.move_is_possible(direction) {
            return Ok(false);
        }

        let mut gained = 0u64;
        let moved = direction.orient(&self.grid).try_map_rows(|row| {
            let (row, points) = slide_row_left(row)?;
            gained += points;
            Ok::<_, EngineError>(row)
        })?;
        self.grid = direction.restore(&moved);
        self.score += gained;
        debug!(
            "moved {}: +{gained} points, score {}",
            direction.name(),
            self.score
        );

        self.spawn()?;
        Ok(true)
    }

    /// True once any tile reaches the win threshold.
    pub fn is_win(&self) -> bool {
        self.grid.max_tile() >= self.win_threshold
    }

    /// True when no direction can change the grid.
    pub fn is_gameover(&self) -> bool {
        !Direction::ALL
            .iter()
            .any(|&direction| self.move_is_possible(direction))
    }
}
