use serde::{Deserialize, Serialize};

use crate::*;

/// Every winning line, in the order they are checked.
pub const LINES: [Line; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Draw,
}

impl GameStatus {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Draw)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Playing
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinResult {
    pub winner: Mark,
    pub line: Line,
}

/// Finds the first line, in [`LINES`] order, fully held by one mark.
pub fn evaluate(board: &Board) -> Option<WinResult> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line.map(|index| board[index]);
        match a {
            Cell::Occupied(winner) if a == b && a == c => Some(WinResult { winner, line }),
            _ => None,
        }
    })
}

/// Whether no empty cell remains. Says nothing about a winner, so check
/// [`evaluate`] first.
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}

pub fn terminal_state(board: &Board) -> GameStatus {
    if evaluate(board).is_some() {
        GameStatus::Won
    } else if is_draw(board) {
        GameStatus::Draw
    } else {
        GameStatus::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(notation: &str) -> Board {
        notation.parse().unwrap()
    }

    /// Decodes `n` as nine base-3 digits: 0 empty, 1 X, 2 O.
    fn board_from_code(mut n: u32) -> Board {
        let mut cells = [Cell::Empty; BOARD_CELLS];
        for cell in cells.iter_mut() {
            *cell = match n % 3 {
                0 => Cell::Empty,
                1 => Cell::Occupied(Mark::X),
                _ => Cell::Occupied(Mark::O),
            };
            n /= 3;
        }
        Board::from_cells(cells)
    }

    fn is_uniform(board: &Board, line: Line) -> bool {
        let first = board[line[0]];
        !first.is_empty() && line.iter().all(|&index| board[index] == first)
    }

    #[test]
    fn empty_board_has_no_winner() {
        assert_eq!(evaluate(&Board::new()), None);
        assert!(!is_draw(&Board::new()));
        assert_eq!(terminal_state(&Board::new()), GameStatus::Playing);
    }

    #[test]
    fn every_line_is_detected_for_both_marks() {
        for line in LINES {
            for mark in [Mark::X, Mark::O] {
                let mut cells = [Cell::Empty; BOARD_CELLS];
                for index in line {
                    cells[usize::from(index)] = Cell::Occupied(mark);
                }

                let result = evaluate(&Board::from_cells(cells));

                assert_eq!(result, Some(WinResult { winner: mark, line }));
            }
        }
    }

    #[test]
    fn top_row_win() {
        let result = evaluate(&board("XXX/OO./..."));

        assert_eq!(
            result,
            Some(WinResult {
                winner: Mark::X,
                line: [0, 1, 2]
            })
        );
    }

    #[test]
    fn anti_diagonal_win() {
        let result = evaluate(&board("XXO/XO./O.."));

        assert_eq!(
            result,
            Some(WinResult {
                winner: Mark::O,
                line: [2, 4, 6]
            })
        );
    }

    #[test]
    fn first_line_in_order_wins_ties() {
        // Row [0,1,2] and column [0,3,6] both belong to X.
        let result = evaluate(&board("XXX/XOO/XOO"));

        assert_eq!(result.map(|win| win.line), Some([0, 1, 2]));
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        assert_eq!(evaluate(&board("XXO/.../...")), None);
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        let full = board("XOX/XOO/OXX");

        assert_eq!(evaluate(&full), None);
        assert!(is_draw(&full));
        assert_eq!(terminal_state(&full), GameStatus::Draw);
    }

    #[test]
    fn full_board_with_line_is_a_win_not_a_draw() {
        let full = board("XXX/OOX/XOO");

        assert!(is_draw(&full));
        assert_eq!(terminal_state(&full), GameStatus::Won);
    }

    #[test]
    fn exhaustive_over_all_boards() {
        for code in 0..3u32.pow(9) {
            let board = board_from_code(code);

            match evaluate(&board) {
                Some(WinResult { winner, line }) => {
                    assert!(is_uniform(&board, line), "{board}");
                    assert_eq!(board[line[0]], Cell::Occupied(winner), "{board}");
                    let earlier = LINES.iter().take_while(|&&other| other != line);
                    assert!(!earlier.copied().any(|other| is_uniform(&board, other)));
                }
                None => assert!(!LINES.iter().any(|&line| is_uniform(&board, line))),
            }

            let has_empty = board.cells().iter().any(|cell| cell.is_empty());
            assert_eq!(is_draw(&board), !has_empty, "{board}");
        }
    }
}
