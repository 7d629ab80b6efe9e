use serde::{Deserialize, Serialize};

use crate::Mark;

/// Content of a single board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Occupied(Mark),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn mark(self) -> Option<Mark> {
        match self {
            Self::Empty => None,
            Self::Occupied(mark) => Some(mark),
        }
    }

    pub(crate) const fn as_char(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Occupied(mark) => mark.as_char(),
        }
    }

    pub(crate) const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' | '-' | '_' => Some(Self::Empty),
            _ => match Mark::from_char(ch) {
                Some(mark) => Some(Self::Occupied(mark)),
                None => None,
            },
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Self::Occupied(mark)
    }
}
