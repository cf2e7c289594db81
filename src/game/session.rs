use std::io;

use log::info;

use super::direction::Action;
use super::engine::GridEngine;
use super::grid::{Grid, Tile};
use crate::error::GameError;

/// States of the play loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    Init,
    Game,
    Win,
    Gameover,
    Exit,
}

impl SessionState {
    /// Next state after `action` was read in this state. `outcome` is the
    /// engine's answer to a movement action and is ignored otherwise.
    ///
    /// `Init` and `Exit` never read input and map to themselves.
    pub fn after_action(self, action: Action, outcome: MoveOutcome) -> SessionState {
        match (self, action) {
            (SessionState::Init, _) | (SessionState::Exit, _) => self,
            (_, Action::Restart) => SessionState::Init,
            (_, Action::Exit) => SessionState::Exit,
            (SessionState::Game, Action::Move(_)) => match outcome {
                MoveOutcome::Moved { win: true, .. } => SessionState::Win,
                MoveOutcome::Moved { gameover: true, .. } => SessionState::Gameover,
                MoveOutcome::Moved { .. } | MoveOutcome::Blocked => SessionState::Game,
            },
            (SessionState::Win, Action::Move(_)) | (SessionState::Gameover, Action::Move(_)) => {
                self
            }
        }
    }

    pub fn is_terminal(self) -> bool {
        self == SessionState::Exit
    }
}

/// What a movement action did to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The grid could not change; nothing happened.
    Blocked,
    Moved { win: bool, gameover: bool },
}

/// Everything a renderer needs for one full redraw.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub grid: &'a Grid,
    pub score: u64,
    pub high_score: u64,
    pub win_threshold: Tile,
    pub state: SessionState,
    pub is_win: bool,
    pub is_gameover: bool,
}

impl<'a> Snapshot<'a> {
    pub fn of(engine: &'a GridEngine, state: SessionState) -> Self {
        Snapshot {
            grid: engine.grid(),
            score: engine.score(),
            high_score: engine.high_score(),
            win_threshold: engine.win_threshold(),
            state,
            is_win: engine.is_win(),
            is_gameover: engine.is_gameover(),
        }
    }
}

/// Draws the current game. Called once per loop iteration.
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()>;
}

/// Blocking source of player actions. Returns exactly one action per call.
pub trait InputSource {
    fn next_action(&mut self) -> io::Result<Action>;
}

/// Runs the Init → Game → Win/Gameover → Exit loop over a [`GridEngine`].
pub struct SessionController<R, I> {
    engine: GridEngine,
    renderer: R,
    input: I,
    state: SessionState,
}

impl<R: Renderer, I: InputSource> SessionController<R, I> {
    pub fn new(engine: GridEngine, renderer: R, input: I) -> Self {
        SessionController {
            engine,
            renderer,
            input,
            state: SessionState::Init,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn engine(&self) -> &GridEngine {
        &self.engine
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Run until the player exits.
    pub fn run(&mut self) -> Result<(), GameError> {
        while !self.state.is_terminal() {
            self.step()?;
        }
        Ok(())
    }

    /// Evaluate the current state once and return the new state.
    pub fn step(&mut self) -> Result<SessionState, GameError> {
        let next = match self.state {
            SessionState::Init => {
                self.engine.reset();
                if self.engine.high_score() > 0 {
                    info!("new game, high score {}", self.engine.high_score());
                }
                SessionState::Game
            }
            SessionState::Exit => SessionState::Exit,
            state => {
                self.renderer.render(&Snapshot::of(&self.engine, state))?;
                let action = self.input.next_action()?;

                let outcome = match (state, action) {
                    (SessionState::Game, Action::Move(direction)) => {
                        if self.engine.move_in(direction)? {
                            MoveOutcome::Moved {
                                win: self.engine.is_win(),
                                gameover: self.engine.is_gameover(),
                            }
                        } else {
                            MoveOutcome::Blocked
                        }
                    }
                    _ => MoveOutcome::Blocked,
                };
                state.after_action(action, outcome)
            }
        };

        if next != self.state {
            self.log_transition(next);
        }
        self.state = next;
        Ok(next)
    }

    fn log_transition(&self, next: SessionState) {
        match next {
            SessionState::Win => info!(
                "reached {} with score {}",
                self.engine.max_tile(),
                self.engine.score()
            ),
            SessionState::Gameover => info!("game over with score {}", self.engine.score()),
            SessionState::Init => info!("restart requested at score {}", self.engine.score()),
            SessionState::Exit => info!("exiting at score {}", self.engine.score()),
            SessionState::Game => {}
        }
    }
}
