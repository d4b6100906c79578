//! Common types for the game: errors, cell states and shot outcomes.

use crate::ship::{Ship, ShipType};

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Water nobody has fired at.
    Fog,
    /// An undamaged ship segment.
    Ship,
    /// A ship segment that has been hit.
    Hit,
    /// Water that has been fired at.
    Miss,
}

/// Result of resolving a shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// The cell was already a hit or a miss; nothing changed.
    AlreadyShot,
    /// Shot landed in water.
    Miss,
    /// Shot damaged a ship that is still afloat.
    Hit,
    /// Shot destroyed the last segment of a ship. Carries the ship itself
    /// and the fleet slot class it was placed under.
    Sunk { class: ShipType, ship: Ship },
}

impl ShotOutcome {
    /// `true` for every outcome that consumed the turn.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, ShotOutcome::AlreadyShot)
    }
}

/// Errors returned by coordinate parsing, placement and the session.
///
/// Every variant is recoverable: the caller reports it and asks again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Malformed or out-of-range coordinate text.
    InvalidCoordinate,
    /// The two ends of a ship share neither a row nor a column.
    InvalidShipShape,
    /// Ship length differs from the one required by the current slot.
    LengthMismatch {
        class: &'static str,
        expected: usize,
        actual: usize,
    },
    /// Ship would touch an already placed ship, diagonals included.
    TooClose,
    /// Target cell has already been fired at.
    AlreadyShot,
    /// Every fleet slot is already filled.
    FleetComplete,
    /// No legal placement exists for the current slot.
    UnableToPlaceShip,
    /// Operation does not belong to the current phase of the game.
    OutOfPhase,
    /// The game has already been won.
    GameOver,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidCoordinate => write!(f, "You entered the wrong coordinates!"),
            GameError::InvalidShipShape => write!(f, "Wrong ship location!"),
            GameError::LengthMismatch {
                class,
                expected,
                actual,
            } => write!(
                f,
                "Wrong length of the {}! Expected {} cells, got {}.",
                class, expected, actual
            ),
            GameError::TooClose => write!(f, "You placed it too close to another one."),
            GameError::AlreadyShot => write!(f, "Bad location!"),
            GameError::FleetComplete => write!(f, "All ships are already placed."),
            GameError::UnableToPlaceShip => write!(f, "There is no room left for this ship."),
            GameError::OutOfPhase => write!(f, "That move is not allowed right now."),
            GameError::GameOver => write!(f, "The game is already over."),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
