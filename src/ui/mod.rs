//! Terminal front end: a Ratatui renderer for the board, crossterm keyboard
//! input, and the `App` that joins them to a game session.

mod app;
pub mod board_widget;
mod game_view;
pub mod input;

pub use app::{App, TerminalRenderer};
pub use input::{action_for_key, KeyboardInput};
