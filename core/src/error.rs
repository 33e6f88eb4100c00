use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates outside the grid")]
    OutOfBounds,
    #[error("Invalid grid configuration")]
    InvalidConfiguration,
}

pub type Result<T> = core::result::Result<T, GameError>;
