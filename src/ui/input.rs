use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::{Action, Direction, InputSource};

/// Map a key press to a game action. Letters are case-insensitive.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Exit);
    }

    match key.code {
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Some(Action::Move(Direction::Up)),
            'a' => Some(Action::Move(Direction::Left)),
            's' => Some(Action::Move(Direction::Down)),
            'd' => Some(Action::Move(Direction::Right)),
            'r' => Some(Action::Restart),
            'q' => Some(Action::Exit),
            _ => None,
        },
        KeyCode::Up => Some(Action::Move(Direction::Up)),
        KeyCode::Left => Some(Action::Move(Direction::Left)),
        KeyCode::Down => Some(Action::Move(Direction::Down)),
        KeyCode::Right => Some(Action::Move(Direction::Right)),
        KeyCode::Esc => Some(Action::Exit),
        _ => None,
    }
}

/// Reads actions from the terminal keyboard, blocking until a mapped key is pressed.
#[derive(Debug, Default)]
pub struct KeyboardInput;

impl KeyboardInput {
    pub fn new() -> Self {
        KeyboardInput
    }
}

impl InputSource for KeyboardInput {
    fn next_action(&mut self) -> io::Result<Action> {
        loop {
            // Resize and mouse events are dropped; the next render redraws anyway.
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = action_for_key(key) {
                    return Ok(action);
                }
            }
        }
    }
}
