//! Common types for Battleship: sides, orientation, shot outcomes and engine errors.

use core::fmt;
use thiserror::Error;

use crate::ship::ShipKind;

/// Identifier of a placed ship. Assigned sequentially per grid, starting at 0.
pub type ShipId = usize;

/// One of the two parties of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    A,
    B,
}

impl Side {
    /// The other party.
    pub fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "player A"),
            Side::B => write!(f, "player B"),
        }
    }
}

/// Orientation of a ship on the grid. Ships extend right or down from their anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Row and column increments between consecutive ship cells.
    pub fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// Result of a shot that was accepted by a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// The shot landed on water.
    Miss,
    /// The shot hit a ship that still has un-hit cells.
    Hit(ShipId),
    /// The shot hit the last standing cell of a ship.
    Sunk(ShipId),
}

impl ShotOutcome {
    /// Id of the ship that was hit, if any.
    pub fn ship_id(self) -> Option<ShipId> {
        match self {
            ShotOutcome::Miss => None,
            ShotOutcome::Hit(id) | ShotOutcome::Sunk(id) => Some(id),
        }
    }

    pub fn is_miss(self) -> bool {
        matches!(self, ShotOutcome::Miss)
    }

    pub fn is_sunk(self) -> bool {
        matches!(self, ShotOutcome::Sunk(_))
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Miss => write!(f, "miss"),
            ShotOutcome::Hit(id) => write!(f, "hit ship #{}", id),
            ShotOutcome::Sunk(id) => write!(f, "sunk ship #{}", id),
        }
    }
}

/// Why a move was refused on policy grounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// The target cell has already been shot.
    AlreadyShot,
    /// Shooting before both fleets are placed.
    NotYourPhase,
    /// A move was issued on behalf of the side that is not to move.
    NotYourTurn,
    /// The match already has a winner.
    MatchFinished,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveReason::AlreadyShot => write!(f, "cell has been shot before"),
            IllegalMoveReason::NotYourPhase => write!(f, "fleets are not placed yet"),
            IllegalMoveReason::NotYourTurn => write!(f, "it is the other player's turn"),
            IllegalMoveReason::MatchFinished => write!(f, "the match is over"),
        }
    }
}

/// Errors returned by grid and engine operations.
///
/// Geometric infeasibility of a placement (out of bounds, overlap) is not an
/// error: `place_ship` reports it as `Ok(false)`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("ship kind {0} is not part of the fleet")]
    InvalidShipKind(ShipKind),
    #[error("every {0} has already been placed")]
    FleetLimitExceeded(ShipKind),
    #[error("coordinates ({row}, {col}) are outside the grid")]
    IndexOutOfRange { row: usize, col: usize },
    #[error("illegal move: {0}")]
    IllegalMove(IllegalMoveReason),
}

pub type Result<T> = core::result::Result<T, EngineError>;
