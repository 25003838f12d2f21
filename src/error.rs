//! Error types for maze sessions and settings.

use thiserror::Error;

/// Reasons a move request is rejected.
///
/// `OutOfBounds` and `HitWall` are deaths: the session has already counted
/// them and logged the move when the error is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Invalid direction: {0:?}")]
    InvalidDirection(String),

    #[error("Out of bounds")]
    OutOfBounds,

    #[error("Hit a wall")]
    HitWall,

    #[error("Game is over")]
    GameOver,
}

impl MoveError {
    pub fn is_death(&self) -> bool {
        matches!(self, MoveError::OutOfBounds | MoveError::HitWall)
    }
}

/// Invalid values in the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid number: {value:?}")]
    NotANumber { var: &'static str, value: String },

    #[error("maze size must be at least 2, got {0}")]
    SizeTooSmall(usize),

    #[error("minimum start/exit distance must be at least 1")]
    MinDistanceZero,
}
