//! Common types for the engine: guess results, notifications and errors.

use crate::coordinate::Coordinate;
use core::fmt;

/// Result of resolving a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// The guess landed on a ship cell (new or previously hit).
    Hit,
    /// The guess landed on open water.
    Miss,
}

/// Current status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Notifications for the output side, queued in the order they happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A ship took its final hit.
    ShipSunk(&'static str),
    /// Every ship is sunk.
    Win,
    /// The miss limit was reached.
    Loss,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::ShipSunk(name) => write!(f, "You sunk the {}!", name),
            Event::Win => write!(f, "YOU WIN!"),
            Event::Loss => write!(f, "SORRY! NO GUESSES LEFT."),
        }
    }
}

/// Errors returned by placement and guess resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// No valid position was found for a ship within the attempt budget.
    PlacementExhausted { ship: &'static str, attempts: usize },
    /// The ship would run off the grid.
    ShipOutOfBounds { ship: &'static str, start: Coordinate },
    /// The ship would cover a cell that is already occupied.
    ShipOverlaps { ship: &'static str, cell: Coordinate },
    /// A ship with this name is already in the fleet.
    DuplicateShip(&'static str),
    /// Rejected configuration value.
    InvalidConfig(&'static str),
    /// The round already ended with the given status.
    GameOver(GameStatus),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::PlacementExhausted { ship, attempts } => {
                write!(f, "could not place {} after {} attempts", ship, attempts)
            }
            GameError::ShipOutOfBounds { ship, start } => {
                write!(f, "{} placed at {} runs off the board", ship, start)
            }
            GameError::ShipOverlaps { ship, cell } => {
                write!(f, "{} overlaps another ship at {}", ship, cell)
            }
            GameError::DuplicateShip(name) => write!(f, "{} is already placed", name),
            GameError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
            GameError::GameOver(status) => write!(f, "game is over ({:?})", status),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
