use crate::error::GameError;
use crate::game::{GridEngine, Renderer, SessionController, Snapshot};
use ratatui::{backend::Backend, Terminal};
use std::io;

use super::input::KeyboardInput;

/// Draws snapshots to a Ratatui terminal. Every call is a full redraw.
pub struct TerminalRenderer<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
}

impl<'a, B: Backend> TerminalRenderer<'a, B> {
    pub fn new(terminal: &'a mut Terminal<B>) -> Self {
        TerminalRenderer { terminal }
    }
}

impl<B: Backend> Renderer for TerminalRenderer<'_, B> {
    fn render(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        self.terminal.draw(|f| super::game_view::render(f, snapshot))?;
        Ok(())
    }
}

/// Interactive game: a session over the terminal and the keyboard.
pub struct App {
    engine: GridEngine,
}

impl App {
    pub fn new(engine: GridEngine) -> Self {
        App { engine }
    }

    /// Main application loop. Returns once the player exits.
    pub fn run<B: Backend>(self, terminal: &mut Terminal<B>) -> Result<(), GameError> {
        let mut session = SessionController::new(
            self.engine,
            TerminalRenderer::new(terminal),
            KeyboardInput::new(),
        );
        session.run()
    }
}
