//! # Twenty48 TUI
//!
//! The sliding-tile merge puzzle 2048 in the terminal. Tiles shift and merge
//! under four directional moves; reaching the goal tile wins, running out of
//! moves loses. The front end is built with Ratatui and crossterm.
//!
//! ## Modules
//!
//! - [`game`]: Core logic: grid, move engine, session state machine
//! - [`ui`]: Terminal UI: board rendering, keyboard input, app wiring
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
