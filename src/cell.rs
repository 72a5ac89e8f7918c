//! Smallest unit of grid state.

use crate::common::ShipId;

/// What a cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Occupancy {
    #[default]
    Empty,
    ShipPart(ShipId),
}

/// Combined view of occupancy and hit status, handy for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Water that has not been shot.
    Empty,
    /// Ship part that has not been shot.
    Ship,
    /// Water that has been shot.
    Missed,
    /// Ship part that has been shot.
    Destroyed,
}

/// A grid cell. Once hit, a cell stays hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    occupancy: Occupancy,
    hit: bool,
}

impl Cell {
    pub const fn new() -> Self {
        Self {
            occupancy: Occupancy::Empty,
            hit: false,
        }
    }

    pub fn occupancy(&self) -> Occupancy {
        self.occupancy
    }

    /// Id of the ship covering this cell.
    pub fn ship_id(&self) -> Option<ShipId> {
        match self.occupancy {
            Occupancy::Empty => None,
            Occupancy::ShipPart(id) => Some(id),
        }
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    /// A ship part may go here: no ship, and never shot.
    pub fn can_place(&self) -> bool {
        self.occupancy == Occupancy::Empty && !self.hit
    }

    /// The cell may still be shot at.
    pub fn can_target(&self) -> bool {
        !self.hit
    }

    pub fn state(&self) -> CellState {
        match (self.occupancy, self.hit) {
            (Occupancy::Empty, false) => CellState::Empty,
            (Occupancy::ShipPart(_), false) => CellState::Ship,
            (Occupancy::Empty, true) => CellState::Missed,
            (Occupancy::ShipPart(_), true) => CellState::Destroyed,
        }
    }

    pub(crate) fn occupy(&mut self, id: ShipId) {
        self.occupancy = Occupancy::ShipPart(id);
    }

    pub(crate) fn strike(&mut self) {
        self.hit = true;
    }
}
