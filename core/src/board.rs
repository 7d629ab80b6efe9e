use core::fmt;
use core::ops::Index;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Nine cells in row-major order.
///
/// The board is `Copy`, so every snapshot handed out is independent of the
/// live game. Text notation lists the rows separated by `/`, using `X`, `O`
/// and `.` (or `-`, `_`) for empty cells: `XOX/XOO/OXX`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    pub const fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    pub const fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    pub fn get(&self, index: CellIndex) -> Option<Cell> {
        self.cells.get(usize::from(index)).copied()
    }

    pub fn is_empty_at(&self, index: CellIndex) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        if usize::from(index) < BOARD_CELLS {
            Ok(index)
        } else {
            Err(GameError::InvalidIndex)
        }
    }

    pub fn occupied_count(&self) -> u8 {
        self.cells.iter().filter(|cell| !cell.is_empty()).count() as u8
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Iterates over `(index, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, Cell)> + '_ {
        (0..).zip(self.cells.iter().copied())
    }

    /// Writes `mark` into an empty cell. Occupied cells are never overwritten.
    pub(crate) fn place(&mut self, index: CellIndex, mark: Mark) -> Result<()> {
        let index = self.validate_index(index)?;
        let cell = &mut self.cells[usize::from(index)];
        if !cell.is_empty() {
            return Err(GameError::CellOccupied);
        }
        *cell = Cell::Occupied(mark);
        Ok(())
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[usize::from(index)]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        for (index, cell) in self.iter() {
            if index > 0 && index % BOARD_SIDE == 0 {
                f.write_char('/')?;
            }
            f.write_char(cell.as_char())?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let mut cells = [Cell::Empty; BOARD_CELLS];
        let mut len = 0;

        for ch in s.chars().filter(|&ch| !ch.is_whitespace() && ch != '/') {
            let cell = Cell::from_char(ch).ok_or(GameError::InvalidMark)?;
            *cells.get_mut(len).ok_or(GameError::InvalidBoardShape)? = cell;
            len += 1;
        }

        if len != BOARD_CELLS {
            return Err(GameError::InvalidBoardShape);
        }

        Ok(Self::from_cells(cells))
    }
}
