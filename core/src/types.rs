use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Position of a cell on the board, `0..9` in row-major order.
pub type CellIndex = u8;

/// Three cell indices that win the game when they hold the same mark.
pub type Line = [CellIndex; 3];

/// Width and height of the board.
pub const BOARD_SIDE: CellIndex = 3;

/// Total number of cells on the board.
pub const BOARD_CELLS: usize = (BOARD_SIDE * BOARD_SIDE) as usize;

/// Symbol a player places on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub const fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }

    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'X' | 'x' => Some(Self::X),
            'O' | 'o' => Some(Self::O),
            _ => None,
        }
    }
}

impl Default for Mark {
    fn default() -> Self {
        Self::X
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "X",
            Self::O => "O",
        })
    }
}

impl FromStr for Mark {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::from_char(ch).ok_or(GameError::InvalidMark),
            _ => Err(GameError::InvalidMark),
        }
    }
}
