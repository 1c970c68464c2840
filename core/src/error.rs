use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board dimensions must be positive")]
    InvalidDimensions,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Coordinates out of bounds")]
    OutOfBounds,
    #[error("Mines were already placed on this board")]
    AlreadyInitialized,
    #[error("Mines have not been placed yet")]
    NotInitialized,
    #[error("Board cells or mine layout do not fit the board")]
    InvalidBoardShape,
    #[error("Mine layout holds a different number of mines than the board")]
    MineCountMismatch,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Game state does not match its board")]
    StateMismatch,
}

pub type Result<T> = core::result::Result<T, GameError>;
