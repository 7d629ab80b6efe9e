#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use session::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod session;
mod types;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Mark that moves first in every game of the session.
    pub starting_mark: Mark,
}

impl GameConfig {
    pub const fn new(starting_mark: Mark) -> Self {
        Self { starting_mark }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    NoChange,
    Placed,
    Won(Mark),
    Draw,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            NoChange => false,
            Placed => true,
            Won(_) => true,
            Draw => true,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won(_) | Self::Draw)
    }
}
