//! One player's grid: ship layout, placement validation and shot resolution.

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::cell::{Cell, Occupancy};
use crate::common::{EngineError, IllegalMoveReason, Orientation, Result, ShipId, ShotOutcome};
use crate::ship::{ShipCatalogue, ShipKind};

/// Placement phase of a grid. Turns `Ready` once, when the fleet is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridPhase {
    Placing,
    Ready,
}

/// A `height` x `width` grid of cells stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    catalogue: Arc<ShipCatalogue>,
    placed: Vec<usize>,
    alive_ships: usize,
    next_ship_id: ShipId,
    phase: GridPhase,
}

impl Grid {
    /// Create an empty grid. Both dimensions must be at least 1 and their
    /// product must fit in `usize`.
    pub fn new(width: usize, height: usize, catalogue: Arc<ShipCatalogue>) -> Result<Self> {
        let size = match width.checked_mul(height) {
            Some(size) if width > 0 && height > 0 => size,
            _ => return Err(EngineError::InvalidDimensions { width, height }),
        };
        let cells = alloc::vec![Cell::new(); size];
        let placed = alloc::vec![0; catalogue.classes().len()];
        Ok(Self {
            width,
            height,
            cells,
            catalogue,
            placed,
            alive_ships: 0,
            next_ship_id: 0,
            phase: GridPhase::Placing,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn catalogue(&self) -> &ShipCatalogue {
        &self.catalogue
    }

    pub fn phase(&self) -> GridPhase {
        self.phase
    }

    /// Returns `true` once every ship of the fleet has been placed.
    pub fn is_ready(&self) -> bool {
        self.phase == GridPhase::Ready
    }

    /// Number of placed ships that still have at least one un-hit cell.
    pub fn alive_ship_count(&self) -> usize {
        self.alive_ships
    }

    /// Id the next successfully placed ship will receive.
    pub fn next_ship_id(&self) -> ShipId {
        self.next_ship_id
    }

    /// Ships of `kind` placed so far, `None` if the kind is not in the fleet.
    pub fn placed_count(&self, kind: ShipKind) -> Option<usize> {
        self.catalogue.index_of(kind).map(|i| self.placed[i])
    }

    /// Ships of `kind` still to be placed, `None` if the kind is not in the fleet.
    pub fn remaining(&self, kind: ShipKind) -> Option<usize> {
        self.catalogue
            .index_of(kind)
            .map(|i| self.catalogue.classes()[i].max_count - self.placed[i])
    }

    /// Every kind of the fleet with the number of ships still to be placed.
    pub fn remaining_kinds(&self) -> impl Iterator<Item = (ShipKind, usize)> + '_ {
        self.catalogue
            .classes()
            .iter()
            .zip(self.placed.iter())
            .map(|(class, placed)| (class.kind, class.max_count - placed))
    }

    /// Cell access. Fails with `IndexOutOfRange` outside the grid.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<&Cell> {
        let idx = self.index(row, col)?;
        Ok(&self.cells[idx])
    }

    /// All cells with their `(row, col)` coordinates, row by row.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i / width, i % width), cell))
    }

    /// Coordinates of every cell covered by ship `id`.
    pub fn ship_cells(&self, id: ShipId) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells()
            .filter(move |(_, cell)| cell.occupancy() == Occupancy::ShipPart(id))
            .map(|(coord, _)| coord)
    }

    /// Returns `true` if ship `id` exists and every one of its cells has been hit.
    pub fn ship_sunk(&self, id: ShipId) -> bool {
        let mut found = false;
        for cell in &self.cells {
            if cell.occupancy() == Occupancy::ShipPart(id) {
                if !cell.is_hit() {
                    return false;
                }
                found = true;
            }
        }
        found
    }

    /// Returns `true` if no ship part is left un-hit.
    pub fn all_ships_sunk(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.ship_id().is_none() || cell.is_hit())
    }

    /// Check whether a ship of `kind` would fit at the given anchor without
    /// placing it. Only the catalogue lookup can fail.
    pub fn fits(
        &self,
        kind: ShipKind,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<bool> {
        let class = self
            .catalogue
            .get(kind)
            .ok_or(EngineError::InvalidShipKind(kind))?;
        Ok(self.footprint(class.length, row, col, orientation).is_some())
    }

    /// Place a ship of `kind` with its upper-left cell at (`row`, `col`).
    ///
    /// Fails with `InvalidShipKind` for kinds outside the fleet and with
    /// `FleetLimitExceeded` when every ship of the kind is already placed.
    /// A ship that would leave the grid or overlap another ship is not an
    /// error: the call returns `Ok(false)` and the grid is left untouched.
    pub fn place_ship(
        &mut self,
        kind: ShipKind,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<bool> {
        let idx = self
            .catalogue
            .index_of(kind)
            .ok_or(EngineError::InvalidShipKind(kind))?;
        let class = self.catalogue.classes()[idx];
        if self.placed[idx] == class.max_count {
            return Err(EngineError::FleetLimitExceeded(kind));
        }
        let footprint = match self.footprint(class.length, row, col, orientation) {
            Some(cells) => cells,
            None => return Ok(false),
        };

        let id = self.next_ship_id;
        for i in footprint {
            self.cells[i].occupy(id);
        }
        self.placed[idx] += 1;
        self.alive_ships += 1;
        self.next_ship_id += 1;

        let complete = self
            .catalogue
            .classes()
            .iter()
            .zip(self.placed.iter())
            .all(|(class, placed)| *placed == class.max_count);
        if complete {
            self.phase = GridPhase::Ready;
        }
        Ok(true)
    }

    /// Shoot the cell at (`row`, `col`).
    ///
    /// Fails with `IndexOutOfRange` outside the grid and with `IllegalMove`
    /// if the cell was shot before. A hit on the last standing cell of a ship
    /// is reported as `Sunk` and lowers the alive ship count.
    pub fn shoot_at(&mut self, row: usize, col: usize) -> Result<ShotOutcome> {
        let idx = self.index(row, col)?;
        let occupancy = {
            let cell = &mut self.cells[idx];
            if !cell.can_target() {
                return Err(EngineError::IllegalMove(IllegalMoveReason::AlreadyShot));
            }
            cell.strike();
            cell.occupancy()
        };
        match occupancy {
            Occupancy::Empty => Ok(ShotOutcome::Miss),
            Occupancy::ShipPart(id) => {
                // full rescan keeps the count tied to cell state
                if self.ship_sunk(id) {
                    self.alive_ships -= 1;
                    Ok(ShotOutcome::Sunk(id))
                } else {
                    Ok(ShotOutcome::Hit(id))
                }
            }
        }
    }

    /// Mirror the outcome of a shot fired at the opponent onto this tracking grid.
    pub(crate) fn record_shot(&mut self, row: usize, col: usize, outcome: ShotOutcome) -> Result<()> {
        let idx = self.index(row, col)?;
        let cell = &mut self.cells[idx];
        if let Some(id) = outcome.ship_id() {
            cell.occupy(id);
        }
        cell.strike();
        Ok(())
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.height || col >= self.width {
            Err(EngineError::IndexOutOfRange { row, col })
        } else {
            Ok(row * self.width + col)
        }
    }

    /// Indices of the cells a ship would cover, or `None` if any of them is
    /// outside the grid or unavailable.
    fn footprint(
        &self,
        length: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Option<Vec<usize>> {
        let (dr, dc) = orientation.step();
        let mut cells = Vec::with_capacity(length);
        for k in 0..length {
            let r = row.checked_add(dr * k)?;
            let c = col.checked_add(dc * k)?;
            if r >= self.height || c >= self.width {
                return None;
            }
            let idx = r * self.width + c;
            if !self.cells[idx].can_place() {
                return None;
            }
            cells.push(idx);
        }
        Some(cells)
    }
}
