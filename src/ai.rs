// Probability-based target selection over a shot-tracking grid.
// Uses no_std; floating point powers go through libm.

use alloc::vec::Vec;
use rand::Rng;

use crate::{
    cell::Occupancy,
    common::{Orientation, ShipId, ShotOutcome},
    grid::Grid,
};

/// Placements covering more observed hits receive far more weight, so squares
/// next to confirmed hits stand out.
const HIT_BIAS: f64 = 10.0;

/// Sampling temperature used for suggestions. Below 1 favours likely cells.
pub const DEFAULT_TEMPERATURE: f64 = 0.5;

/// Normalized likelihood of each cell hiding an un-hit ship part.
#[derive(Debug, Clone, PartialEq)]
pub struct Density {
    width: usize,
    height: usize,
    weights: Vec<f64>,
}

impl Density {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Weight at (`row`, `col`); zero outside the grid.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        if row < self.height && col < self.width {
            self.weights[row * self.width + col]
        } else {
            0.0
        }
    }

    /// Cell with the highest weight, if any cell has weight.
    pub fn best(&self) -> Option<(usize, usize)> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &w) in self.weights.iter().enumerate() {
            if w > 0.0 && best.map_or(true, |(_, bw)| w > bw) {
                best = Some((i, w));
            }
        }
        best.map(|(i, _)| (i / self.width, i % self.width))
    }
}

/// Compute a probability density over all cells not yet shot, given the
/// shooter's tracking grid, the ids of ships it has sunk and the lengths of
/// enemy ships still afloat.
///
/// Misses and cells of sunk ships block placements; hits on ships still
/// afloat attract them.
pub fn calc_density(shots: &Grid, sunk: &[ShipId], remaining_lengths: &[usize]) -> Density {
    let (width, height) = (shots.width(), shots.height());
    let mut weights = alloc::vec![0.0f64; width * height];

    let blocked = |r: usize, c: usize| match shots.cell_at(r, c) {
        Ok(cell) => match cell.occupancy() {
            Occupancy::Empty => cell.is_hit(),
            Occupancy::ShipPart(id) => sunk.contains(&id),
        },
        Err(_) => true,
    };
    let open_hit = |r: usize, c: usize| match shots.cell_at(r, c).map(|cell| cell.occupancy()) {
        Ok(Occupancy::ShipPart(id)) => !sunk.contains(&id),
        _ => false,
    };
    let untouched = |r: usize, c: usize| shots.cell_at(r, c).map_or(false, |cell| cell.can_target());

    for &len in remaining_lengths {
        if len == 0 {
            continue;
        }
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let (dr, dc) = orientation.step();
            let max_row = if dr == 1 { height.saturating_sub(len - 1) } else { height };
            let max_col = if dc == 1 { width.saturating_sub(len - 1) } else { width };
            for r in 0..max_row {
                for c in 0..max_col {
                    let mut valid = true;
                    let mut n_hits = 0i32;
                    for k in 0..len {
                        let (rr, cc) = (r + dr * k, c + dc * k);
                        if blocked(rr, cc) {
                            valid = false;
                            break;
                        }
                        if open_hit(rr, cc) {
                            n_hits += 1;
                        }
                    }
                    if !valid {
                        continue;
                    }
                    let weight = libm::pow(HIT_BIAS, n_hits as f64);
                    for k in 0..len {
                        let (rr, cc) = (r + dr * k, c + dc * k);
                        if untouched(rr, cc) {
                            weights[rr * width + cc] += weight;
                        }
                    }
                }
            }
        }
    }

    normalize(shots, Density { width, height, weights })
}

fn normalize(shots: &Grid, mut density: Density) -> Density {
    let total: f64 = density.weights.iter().sum();
    if total == 0.0 {
        // nothing fits: spread evenly over the cells that can still be shot
        let open = shots.cells().filter(|(_, cell)| cell.can_target()).count();
        if open > 0 {
            let uniform = 1.0 / open as f64;
            for ((r, c), cell) in shots.cells() {
                if cell.can_target() {
                    density.weights[r * density.width + c] = uniform;
                }
            }
        }
        return density;
    }
    for w in density.weights.iter_mut() {
        *w /= total;
    }
    density
}

/// Sample a coordinate from a density using a temperature parameter.
/// Returns `None` when no cell carries weight.
pub fn sample_density<R: Rng + ?Sized>(
    density: &Density,
    temperature: f64,
    rng: &mut R,
) -> Option<(usize, usize)> {
    let adjusted: Vec<f64> = density
        .weights
        .iter()
        .map(|&w| if w > 0.0 { libm::pow(w, 1.0 / temperature) } else { 0.0 })
        .collect();
    let total: f64 = adjusted.iter().sum();
    if !(total > 0.0) {
        return None;
    }
    let threshold: f64 = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    let mut last = None;
    for (i, &w) in adjusted.iter().enumerate() {
        if w == 0.0 {
            continue;
        }
        cumulative += w;
        last = Some(i);
        if threshold < cumulative {
            return Some((i / density.width, i % density.width));
        }
    }
    last.map(|i| (i / density.width, i % density.width))
}

/// What a shooter knows about the enemy fleet: which ships it has sunk and
/// which lengths are still afloat. Starts over whenever it sees a tracking
/// grid without any shot on it, so a tracker can serve several matches.
#[derive(Debug, Clone, Default)]
pub struct TargetTracker {
    sunk: Vec<ShipId>,
    remaining: Vec<usize>,
}

impl TargetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lengths of enemy ships not yet sunk.
    pub fn remaining_lengths(&self) -> &[usize] {
        &self.remaining
    }

    pub fn sunk(&self) -> &[ShipId] {
        &self.sunk
    }

    /// Reset to the full fleet of `shots` if no shot has been fired yet.
    fn sync(&mut self, shots: &Grid) {
        if shots.cells().all(|(_, cell)| !cell.is_hit()) {
            self.remaining = shots.catalogue().fleet_lengths();
            self.sunk.clear();
        }
    }

    /// Record the outcome of a shot once it is on the tracking grid.
    pub fn observe(&mut self, shots: &Grid, outcome: ShotOutcome) {
        if let ShotOutcome::Sunk(id) = outcome {
            let length = shots.ship_cells(id).count();
            if let Some(pos) = self.remaining.iter().position(|&l| l == length) {
                self.remaining.swap_remove(pos);
            }
            self.sunk.push(id);
        }
    }

    pub fn density(&mut self, shots: &Grid) -> Density {
        self.sync(shots);
        calc_density(shots, &self.sunk, &self.remaining)
    }

    /// Calculate the density and immediately pick a target from it.
    pub fn suggest<R: Rng + ?Sized>(&mut self, shots: &Grid, rng: &mut R) -> Option<(usize, usize)> {
        let density = self.density(shots);
        sample_density(&density, DEFAULT_TEMPERATURE, rng)
    }
}
