use crate::error::EngineError;

/// A single cell value. `0` is an empty cell.
pub type Tile = u32;

pub const EMPTY: Tile = 0;

/// Rectangular matrix of tiles, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: Vec<Vec<Tile>>,
}

impl Grid {
    /// Create a grid of the given size with every cell empty
    pub fn new(height: usize, width: usize) -> Self {
        Grid {
            rows: vec![vec![EMPTY; width]; height],
        }
    }

    /// Build a grid from explicit rows. Returns `None` for empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Option<Self> {
        let width = rows.first()?.len();
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return None;
        }
        Some(Grid { rows })
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.rows
    }

    /// Get the tile at a specific position
    /// Row 0 is the top, column 0 is the left edge
    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.rows[row][col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, tile: Tile) {
        self.rows[row][col] = tile;
    }

    /// Positions of every empty cell, in row-major order
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, &tile)| tile == EMPTY)
                    .map(move |(c, _)| (r, c))
            })
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&tile| tile == EMPTY).count())
            .sum()
    }

    pub fn max_tile(&self) -> Tile {
        self.rows
            .iter()
            .flat_map(|row| row.iter().copied())
            .max()
            .unwrap_or(EMPTY)
    }

    /// Swap rows and columns
    pub fn transpose(&self) -> Grid {
        let rows = (0..self.width())
            .map(|c| self.rows.iter().map(|row| row[c]).collect())
            .collect();
        Grid { rows }
    }

    /// Reverse every row
    pub fn invert(&self) -> Grid {
        let rows = self
            .rows
            .iter()
            .map(|row| row.iter().rev().copied().collect())
            .collect();
        Grid { rows }
    }

    pub(crate) fn try_map_rows<F, E>(&self, mut f: F) -> Result<Grid, E>
    where
        F: FnMut(&[Tile]) -> Result<Vec<Tile>, E>,
    {
        let rows = self
            .rows
            .iter()
            .map(|row| f(row.as_slice()))
            .collect::<Result<Vec<_>, E>>()?;
        Ok(Grid { rows })
    }
}

/// Shift non-empty tiles to the left, padding the right with empty cells.
pub fn compact(row: &[Tile]) -> Vec<Tile> {
    let mut out: Vec<Tile> = row.iter().copied().filter(|&t| t != EMPTY).collect();
    out.resize(row.len(), EMPTY);
    out
}

/// One left-to-right merge pass. Each equal pair becomes `0, 2v` and a tile
/// takes part in at most one merge. Returns the new row and the points gained,
/// or `TileOverflow` if a doubled tile does not fit in a [`Tile`].
pub fn merge(row: &[Tile]) -> Result<(Vec<Tile>, u64), EngineError> {
    let mut out = Vec::with_capacity(row.len());
    let mut points = 0u64;
    let mut pending = false;

    for (i, &tile) in row.iter().enumerate() {
        if pending {
            let doubled = tile
                .checked_mul(2)
                .ok_or(EngineError::TileOverflow { tile })?;
            out.push(doubled);
            points += u64::from(doubled);
            pending = false;
        } else if tile != EMPTY && row.get(i + 1) == Some(&tile) {
            pending = true;
            out.push(EMPTY);
        } else {
            out.push(tile);
        }
    }

    debug_assert_eq!(out.len(), row.len());
    Ok((out, points))
}

/// Full left move of a single row: compact, merge, compact.
pub fn slide_row_left(row: &[Tile]) -> Result<(Vec<Tile>, u64), EngineError> {
    let (merged, points) = merge(&compact(row))?;
    Ok((compact(&merged), points))
}

/// True if a left move would change this row.
pub fn row_can_slide_left(row: &[Tile]) -> bool {
    row.windows(2).any(|pair| {
        let (left, right) = (pair[0], pair[1]);
        (left == EMPTY && right != EMPTY) || (left != EMPTY && left == right)
    })
}
