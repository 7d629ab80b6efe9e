use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell index out of range")]
    InvalidIndex,
    #[error("Cell is already occupied")]
    CellOccupied,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Board must have exactly 9 cells")]
    InvalidBoardShape,
    #[error("Unknown mark")]
    InvalidMark,
}

pub type Result<T> = core::result::Result<T, GameError>;
