//! The stepwise movement protocol played on a generated maze.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::MoveError;
use crate::grid::{Cell, CellState, Grid};
use crate::maze::Maze;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(MoveError::InvalidDirection(other.to_string())),
        }
    }
}

/// One entry of the move log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
    pub direction: Direction,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub died: bool,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveOutcome {
    pub position: Cell,
    pub win: bool,
    pub maze_view: Grid,
}

/// Snapshot of a session, shaped for transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub player: Cell,
    pub maze: Grid,
    pub exit: Cell,
    pub death_count: u32,
    pub move_history: Vec<MoveRecord>,
    pub win: bool,
}

pub struct Session {
    rng: StdRng,
    settings: Settings,
    maze: Maze,
    player: Cell,
    death_count: u32,
    move_history: Vec<MoveRecord>,
    game_over: bool,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self::with_rng(settings.rng(), settings)
    }

    pub fn with_rng(mut rng: StdRng, settings: Settings) -> Self {
        let maze = Maze::generate(&mut rng, settings.size, settings.min_distance);
        Self {
            rng,
            settings,
            player: maze.start,
            maze,
            death_count: 0,
            move_history: Vec::new(),
            game_over: false,
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn player(&self) -> Cell {
        self.player
    }

    pub fn death_count(&self) -> u32 {
        self.death_count
    }

    pub fn move_history(&self) -> &[MoveRecord] {
        &self.move_history
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn has_won(&self) -> bool {
        self.player == self.maze.exit
    }

    /// Parses `direction` and moves. Unknown directions are rejected before
    /// anything is recorded.
    pub fn step_named(
        &mut self,
        direction: &str,
        player_name: Option<&str>,
    ) -> Result<MoveOutcome, MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        let direction = direction.parse::<Direction>()?;
        self.step(direction, player_name)
    }

    pub fn step(
        &mut self,
        direction: Direction,
        player_name: Option<&str>,
    ) -> Result<MoveOutcome, MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }

        let size = self.maze.grid.size();
        let Some(next) = self.player.step(direction, size) else {
            self.record_death(direction, player_name);
            return Err(MoveError::OutOfBounds);
        };
        if self.maze.grid.get(next) == CellState::Wall {
            self.record_death(direction, player_name);
            return Err(MoveError::HitWall);
        }

        self.player = next;
        let win = next == self.maze.exit;
        if win {
            self.game_over = true;
            tracing::info!(
                player = player_name.unwrap_or("anonymous"),
                deaths = self.death_count,
                moves = self.move_history.len() + 1,
                "exit reached"
            );
        }
        self.record(direction, player_name, false);

        Ok(MoveOutcome {
            position: next,
            win,
            maze_view: self.maze.grid.clone(),
        })
    }

    pub fn state(&self) -> GameState {
        GameState {
            player: self.player,
            maze: self.maze.grid.clone(),
            exit: self.maze.exit,
            death_count: self.death_count,
            move_history: self.move_history.clone(),
            win: self.has_won(),
        }
    }

    /// Replaces the maze and clears all per-game state.
    pub fn reset(&mut self) -> GameState {
        self.maze = Maze::generate(
            &mut self.rng,
            self.settings.size,
            self.settings.min_distance,
        );
        self.player = self.maze.start;
        self.death_count = 0;
        self.move_history.clear();
        self.game_over = false;
        tracing::info!(size = self.settings.size, "maze reset");
        self.state()
    }

    fn record_death(&mut self, direction: Direction, player_name: Option<&str>) {
        self.death_count += 1;
        tracing::debug!(%direction, deaths = self.death_count, "player died");
        self.record(direction, player_name, true);
    }

    fn record(&mut self, direction: Direction, player_name: Option<&str>, died: bool) {
        self.move_history.push(MoveRecord {
            player_name: player_name.map(str::to_string),
            direction,
            died,
            timestamp: Utc::now(),
        });
    }
}
