//! Player contract and the retry loops shared by bot players.

use alloc::string::String;
use rand::Rng;
use thiserror::Error;

use crate::{
    common::{EngineError, IllegalMoveReason, Orientation, ShotOutcome},
    game::MoveContext,
    grid::Grid,
    ship::ShipKind,
};

/// Random attempts a bot makes before falling back to a full scan.
const MAX_RANDOM_ATTEMPTS: usize = 1_000;

/// Errors a player can end a match with.
#[derive(Debug, Error)]
pub enum PlayError {
    /// An engine error the player chose not to recover from.
    #[error(transparent)]
    Engine(#[from] EngineError),
    /// The player has no legal move left to try.
    #[error("{player} has no legal move")]
    NoLegalMove { player: String },
    /// The player left the match.
    #[error("{player} abandoned the match")]
    Abandoned { player: String },
    /// The player returned from its turn without a successful move.
    #[error("{player} returned without making a move")]
    NoMove { player: String },
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Interface implemented by different player types.
///
/// The engine calls [`Player::produce_move`] whenever it is this player's
/// turn. The player must call back into `place_ship` or `shoot_at` on the
/// context until one of them is accepted, recovering from rejections itself.
pub trait Player {
    fn name(&self) -> &str;

    /// Make exactly one successful move.
    fn produce_move(&mut self, ctx: &mut MoveContext<'_, '_>) -> Result<(), PlayError>;

    /// Ask for the debug capability of reading the opponent's ship grid.
    fn requests_peek(&self) -> bool {
        false
    }
}

/// Longest kind of the fleet that still has ships to place. Ties go to the
/// kind listed first in the catalogue.
pub fn next_unplaced(grid: &Grid) -> Option<ShipKind> {
    let mut best: Option<(ShipKind, usize)> = None;
    for (kind, left) in grid.remaining_kinds() {
        if left == 0 {
            continue;
        }
        let length = grid.catalogue().get(kind).map_or(0, |class| class.length);
        if best.map_or(true, |(_, longest)| length > longest) {
            best = Some((kind, length));
        }
    }
    best.map(|(kind, _)| kind)
}

/// Try random anchors for `kind` until the engine accepts one. Falls back to
/// scanning every anchor when random probing keeps failing.
pub fn place_randomly<R: Rng + ?Sized>(
    ctx: &mut MoveContext<'_, '_>,
    rng: &mut R,
    kind: ShipKind,
    player: &str,
) -> Result<(), PlayError> {
    let (height, width) = (ctx.own_grid().height(), ctx.own_grid().width());
    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let row = rng.random_range(0..height);
        let col = rng.random_range(0..width);
        let orientation = random_orientation(rng);
        if ctx.place_ship(kind, row, col, orientation)? {
            log::debug!("{} placed {} at ({}, {}) {:?}", player, kind, row, col, orientation);
            return Ok(());
        }
        log::trace!("{} could not fit {} at ({}, {})", player, kind, row, col);
    }
    for row in 0..height {
        for col in 0..width {
            for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                if ctx.place_ship(kind, row, col, orientation)? {
                    log::debug!("{} placed {} at ({}, {}) after scanning", player, kind, row, col);
                    return Ok(());
                }
            }
        }
    }
    Err(PlayError::NoLegalMove {
        player: player.into(),
    })
}

/// Fire at random cells until one is accepted. Cells already shot are
/// retried; every other engine error is returned.
pub fn shoot_randomly<R: Rng + ?Sized>(
    ctx: &mut MoveContext<'_, '_>,
    rng: &mut R,
    player: &str,
) -> Result<((usize, usize), ShotOutcome), PlayError> {
    let (height, width) = (ctx.shot_grid().height(), ctx.shot_grid().width());
    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let row = rng.random_range(0..height);
        let col = rng.random_range(0..width);
        match ctx.shoot_at(row, col) {
            Ok(outcome) => return Ok(((row, col), outcome)),
            Err(EngineError::IllegalMove(IllegalMoveReason::AlreadyShot)) => {
                log::trace!("{} already shot ({}, {})", player, row, col);
            }
            Err(err) => return Err(err.into()),
        }
    }
    let open = ctx
        .shot_grid()
        .cells()
        .find(|(_, cell)| cell.can_target())
        .map(|(coord, _)| coord);
    match open {
        Some((row, col)) => Ok(((row, col), ctx.shoot_at(row, col)?)),
        None => Err(PlayError::NoLegalMove {
            player: player.into(),
        }),
    }
}

pub(crate) fn random_orientation<R: Rng + ?Sized>(rng: &mut R) -> Orientation {
    if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    }
}
