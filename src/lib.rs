//! Maze generation, start/exit placement and a stepwise movement game.
//!
//! [`carve::generate`] builds a fully connected square maze,
//! [`select::select`] picks a start and an exit far apart on it, and
//! [`game::Session`] plays moves against the result.

pub mod carve;
pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod maze;
pub mod select;
pub mod solve;

pub use config::Settings;
pub use error::{ConfigError, MoveError};
pub use game::{Direction, GameState, MoveOutcome, MoveRecord, Session};
pub use grid::{Cell, CellState, Grid};
pub use maze::Maze;
pub use select::{CellPair, DEFAULT_MIN_DISTANCE};
