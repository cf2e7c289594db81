//! Core 2048 logic: the tile grid and its row primitives, the move engine,
//! and the session state machine that drives a game.

mod direction;
mod engine;
mod grid;
mod session;

pub use direction::{Action, Direction};
pub use engine::{GridEngine, DEFAULT_HEIGHT, DEFAULT_WIDTH, DEFAULT_WIN_THRESHOLD};
pub use grid::{compact, merge, row_can_slide_left, slide_row_left, Grid, Tile, EMPTY};
pub use session::{InputSource, MoveOutcome, Renderer, SessionController, SessionState, Snapshot};

#[cfg(test)]
pub(crate) use session::test_support;
