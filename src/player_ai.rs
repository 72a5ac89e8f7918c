use alloc::string::String;
use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{
    ai::TargetTracker,
    cell::Occupancy,
    game::MoveContext,
    player::{next_unplaced, place_randomly, shoot_randomly, PlayError, Player},
};

/// Place the longest ship still missing from the fleet. Returns `true` if a
/// placement move was made.
fn place_next(ctx: &mut MoveContext<'_, '_>, rng: &mut SmallRng, name: &str) -> Result<bool, PlayError> {
    if ctx.own_grid().is_ready() {
        return Ok(false);
    }
    let kind = match next_unplaced(ctx.own_grid()) {
        Some(kind) => kind,
        None => {
            return Err(PlayError::NoLegalMove {
                player: name.into(),
            })
        }
    };
    place_randomly(ctx, rng, kind, name)?;
    Ok(true)
}

/// Bot that places ships and fires at random.
pub struct RandomBot {
    name: String,
    rng: SmallRng,
}

impl RandomBot {
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self::with_rng(name, SmallRng::seed_from_u64(seed))
    }

    pub fn with_rng(name: impl Into<String>, rng: SmallRng) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl Player for RandomBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn produce_move(&mut self, ctx: &mut MoveContext<'_, '_>) -> Result<(), PlayError> {
        if place_next(ctx, &mut self.rng, &self.name)? {
            return Ok(());
        }
        let ((row, col), outcome) = shoot_randomly(ctx, &mut self.rng, &self.name)?;
        log::info!("{} fired at ({}, {}): {}", self.name, row, col, outcome);
        Ok(())
    }
}

/// Bot that fires where the probability density of enemy ships is highest.
pub struct HunterBot {
    name: String,
    rng: SmallRng,
    tracker: TargetTracker,
}

impl HunterBot {
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self::with_rng(name, SmallRng::seed_from_u64(seed))
    }

    pub fn with_rng(name: impl Into<String>, rng: SmallRng) -> Self {
        Self {
            name: name.into(),
            rng,
            tracker: TargetTracker::new(),
        }
    }
}

impl Player for HunterBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn produce_move(&mut self, ctx: &mut MoveContext<'_, '_>) -> Result<(), PlayError> {
        if place_next(ctx, &mut self.rng, &self.name)? {
            return Ok(());
        }
        let ((row, col), outcome) = match self.tracker.suggest(ctx.shot_grid(), &mut self.rng) {
            Some((row, col)) => ((row, col), ctx.shoot_at(row, col)?),
            None => shoot_randomly(ctx, &mut self.rng, &self.name)?,
        };
        self.tracker.observe(ctx.shot_grid(), outcome);
        log::info!("{} fired at ({}, {}): {}", self.name, row, col, outcome);
        Ok(())
    }
}

/// Bot that, now and then, peeks at the opponent's ship grid and fires at a
/// ship part it saw. Peeking only works when the match allows it; otherwise
/// the bot plays like [`RandomBot`].
pub struct PeekingBot {
    name: String,
    rng: SmallRng,
    peek_probability: f64,
}

impl PeekingBot {
    pub const DEFAULT_PEEK_PROBABILITY: f64 = 0.2;

    /// `peek_probability` is clamped to `[0, 1]`; 0 plays randomly, 1 never misses.
    pub fn new(name: impl Into<String>, seed: u64, peek_probability: f64) -> Self {
        Self::with_rng(name, SmallRng::seed_from_u64(seed), peek_probability)
    }

    pub fn with_rng(name: impl Into<String>, rng: SmallRng, peek_probability: f64) -> Self {
        let peek_probability = if peek_probability.is_nan() {
            0.0
        } else {
            peek_probability.clamp(0.0, 1.0)
        };
        Self {
            name: name.into(),
            rng,
            peek_probability,
        }
    }

    pub fn peek_probability(&self) -> f64 {
        self.peek_probability
    }

    fn peeked_target(&mut self, ctx: &MoveContext<'_, '_>) -> Option<(usize, usize)> {
        let hidden = ctx.peek_opponent()?;
        if !self.rng.random_bool(self.peek_probability) {
            return None;
        }
        let standing: Vec<(usize, usize)> = hidden
            .cells()
            .filter(|(_, cell)| matches!(cell.occupancy(), Occupancy::ShipPart(_)) && !cell.is_hit())
            .map(|(coord, _)| coord)
            .collect();
        if standing.is_empty() {
            return None;
        }
        Some(standing[self.rng.random_range(0..standing.len())])
    }
}

impl Player for PeekingBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn requests_peek(&self) -> bool {
        true
    }

    fn produce_move(&mut self, ctx: &mut MoveContext<'_, '_>) -> Result<(), PlayError> {
        if place_next(ctx, &mut self.rng, &self.name)? {
            return Ok(());
        }
        let ((row, col), outcome) = match self.peeked_target(ctx) {
            Some((row, col)) => {
                log::debug!("{} peeked at the opponent's grid", self.name);
                ((row, col), ctx.shoot_at(row, col)?)
            }
            None => shoot_randomly(ctx, &mut self.rng, &self.name)?,
        };
        log::info!("{} fired at ({}, {}): {}", self.name, row, col, outcome);
        Ok(())
    }
}
