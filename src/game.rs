//! Match engine: turn arbitration and win detection over two players' grids.

use alloc::sync::Arc;

use crate::{
    common::{EngineError, IllegalMoveReason, Orientation, Result, ShipId, ShotOutcome, Side},
    config::MatchConfig,
    grid::Grid,
    player::{PlayError, Player},
    ship::{ShipCatalogue, ShipKind},
};

/// Phase of the whole match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// At least one fleet is incomplete.
    Placing,
    /// Both fleets are placed and nobody has won yet.
    Shooting,
    /// One fleet is sunk.
    Finished,
}

/// A successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Placement {
        kind: ShipKind,
        row: usize,
        col: usize,
        orientation: Orientation,
        ship_id: ShipId,
    },
    Shot {
        row: usize,
        col: usize,
        outcome: ShotOutcome,
    },
}

/// A successful move and the side that made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub side: Side,
    pub action: Move,
}

/// The two grids a side owns.
#[derive(Debug, Clone)]
struct Seat {
    /// Ship placements, targeted by the opponent.
    own: Grid,
    /// Private record of shots fired at the opponent.
    shots: Grid,
    shots_fired: usize,
}

impl Seat {
    fn new(config: &MatchConfig, catalogue: &Arc<ShipCatalogue>) -> Result<Self> {
        Ok(Self {
            own: Grid::new(config.width, config.height, Arc::clone(catalogue))?,
            shots: Grid::new(config.width, config.height, Arc::clone(catalogue))?,
            shots_fired: 0,
        })
    }
}

/// Core game logic for one match between side A and side B.
///
/// Side A moves first. Placement turns always alternate; during shooting the
/// turn passes to the opponent only on a miss.
#[derive(Debug, Clone)]
pub struct GameEngine {
    seats: [Seat; 2],
    turn: Side,
    finished: bool,
    winner: Option<Side>,
    last_move: Option<MoveRecord>,
    moves: usize,
    allow_peeking: bool,
}

impl GameEngine {
    /// Create the four grids of a match. Fails with `InvalidDimensions` if
    /// either axis is zero.
    pub fn new(config: &MatchConfig) -> Result<Self> {
        let catalogue = Arc::new(config.catalogue.clone());
        Ok(Self {
            seats: [Seat::new(config, &catalogue)?, Seat::new(config, &catalogue)?],
            turn: Side::A,
            finished: false,
            winner: None,
            last_move: None,
            moves: 0,
            allow_peeking: config.allow_peeking,
        })
    }

    /// Side to move.
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Winning side; `None` while the match is running.
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn phase(&self) -> MatchPhase {
        if self.finished {
            MatchPhase::Finished
        } else if self.seats.iter().all(|seat| seat.own.is_ready()) {
            MatchPhase::Shooting
        } else {
            MatchPhase::Placing
        }
    }

    pub fn catalogue(&self) -> &ShipCatalogue {
        self.seats[0].own.catalogue()
    }

    /// Ship placement grid of `side`.
    pub fn own_grid(&self, side: Side) -> &Grid {
        &self.seats[side.index()].own
    }

    /// Grid recording the shots `side` has fired at its opponent.
    pub fn shot_grid(&self, side: Side) -> &Grid {
        &self.seats[side.index()].shots
    }

    pub fn shots_fired(&self, side: Side) -> usize {
        self.seats[side.index()].shots_fired
    }

    pub fn total_shots(&self) -> usize {
        self.seats.iter().map(|seat| seat.shots_fired).sum()
    }

    pub fn last_move(&self) -> Option<MoveRecord> {
        self.last_move
    }

    /// Successful placements and shots so far.
    pub fn move_count(&self) -> usize {
        self.moves
    }

    pub fn allows_peeking(&self) -> bool {
        self.allow_peeking
    }

    /// Place a ship on the current side's own grid.
    ///
    /// Grid errors are returned unchanged. On `Ok(true)` the turn passes to
    /// the opponent, whether or not the fleet is now complete; on `Ok(false)`
    /// the same side may retry.
    pub fn place_ship(
        &mut self,
        kind: ShipKind,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<bool> {
        if self.finished {
            return Err(EngineError::IllegalMove(IllegalMoveReason::MatchFinished));
        }
        let side = self.turn;
        let grid = &mut self.seats[side.index()].own;
        let ship_id = grid.next_ship_id();
        let placed = grid.place_ship(kind, row, col, orientation)?;
        if placed {
            self.last_move = Some(MoveRecord {
                side,
                action: Move::Placement {
                    kind,
                    row,
                    col,
                    orientation,
                    ship_id,
                },
            });
            self.moves += 1;
            self.turn = side.opponent();
        }
        Ok(placed)
    }

    /// Current side shoots at (`row`, `col`) on the opponent's own grid.
    ///
    /// Grid errors are returned unchanged. The outcome is mirrored onto the
    /// shooter's tracking grid. Sinking the opponent's last ship finishes the
    /// match; only a miss hands the turn to the opponent.
    pub fn shoot_at(&mut self, row: usize, col: usize) -> Result<ShotOutcome> {
        if self.finished {
            return Err(EngineError::IllegalMove(IllegalMoveReason::MatchFinished));
        }
        let side = self.turn;
        let target = side.opponent();
        if !self.seats[side.index()].own.is_ready() || !self.seats[target.index()].own.is_ready() {
            return Err(EngineError::IllegalMove(IllegalMoveReason::NotYourPhase));
        }

        let outcome = self.seats[target.index()].own.shoot_at(row, col)?;
        let seat = &mut self.seats[side.index()];
        seat.shots.record_shot(row, col, outcome)?;
        seat.shots_fired += 1;

        if outcome.is_sunk() && self.seats[target.index()].own.alive_ship_count() == 0 {
            self.finished = true;
            self.winner = Some(side);
        }
        if outcome.is_miss() {
            self.turn = target;
        }
        self.last_move = Some(MoveRecord {
            side,
            action: Move::Shot { row, col, outcome },
        });
        self.moves += 1;
        Ok(outcome)
    }

    /// Bind two externally owned players to this match. The engine never takes
    /// ownership of them.
    pub fn bind<'g>(
        &'g mut self,
        a: &'g mut dyn Player,
        b: &'g mut dyn Player,
    ) -> BoundMatch<'g> {
        let peek = [
            self.allow_peeking && a.requests_peek(),
            self.allow_peeking && b.requests_peek(),
        ];
        BoundMatch {
            engine: self,
            players: [a, b],
            peek,
            observer: None,
        }
    }
}

/// Receives every successful move of a running match.
pub trait Observer {
    fn on_move(&mut self, engine: &GameEngine, record: &MoveRecord);

    fn on_finish(&mut self, _engine: &GameEngine, _winner: Side) {}
}

/// A match with both players bound, ready to be driven to completion.
pub struct BoundMatch<'g> {
    engine: &'g mut GameEngine,
    players: [&'g mut dyn Player; 2],
    peek: [bool; 2],
    observer: Option<&'g mut dyn Observer>,
}

impl<'g> BoundMatch<'g> {
    /// Attach an observer notified after each successful move.
    pub fn observe(mut self, observer: &'g mut dyn Observer) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Invoke the player whose turn it is until the match is finished and
    /// return the winner. Player errors are returned unchanged; a player that
    /// returns without a successful move ends the match with `NoMove`.
    pub fn start(self) -> core::result::Result<Side, PlayError> {
        let BoundMatch {
            engine,
            players,
            peek,
            mut observer,
        } = self;
        loop {
            if let Some(winner) = engine.winner {
                if let Some(observer) = observer.as_deref_mut() {
                    observer.on_finish(&*engine, winner);
                }
                return Ok(winner);
            }
            let side = engine.turn;
            let moves_before = engine.moves;
            let mut ctx = MoveContext {
                engine: &mut *engine,
                side,
                peek: peek[side.index()],
                observer: observer.as_deref_mut(),
            };
            let player = &mut *players[side.index()];
            player.produce_move(&mut ctx)?;
            if engine.moves == moves_before {
                return Err(PlayError::NoMove {
                    player: player.name().into(),
                });
            }
        }
    }
}

/// What a player sees and may do while it is its turn.
pub struct MoveContext<'a, 'o> {
    engine: &'a mut GameEngine,
    side: Side,
    peek: bool,
    observer: Option<&'a mut (dyn Observer + 'o)>,
}

impl<'a, 'o> MoveContext<'a, 'o> {
    /// Side this context acts for.
    pub fn side(&self) -> Side {
        self.side
    }

    /// `false` once the turn has passed to the opponent (after a miss) or the
    /// match is over.
    pub fn is_my_turn(&self) -> bool {
        !self.engine.finished && self.engine.turn == self.side
    }

    pub fn phase(&self) -> MatchPhase {
        self.engine.phase()
    }

    pub fn catalogue(&self) -> &ShipCatalogue {
        self.engine.catalogue()
    }

    pub fn own_grid(&self) -> &Grid {
        self.engine.own_grid(self.side)
    }

    pub fn shot_grid(&self) -> &Grid {
        self.engine.shot_grid(self.side)
    }

    /// See [`GameEngine::place_ship`].
    pub fn place_ship(
        &mut self,
        kind: ShipKind,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<bool> {
        self.check_turn()?;
        let placed = self.engine.place_ship(kind, row, col, orientation)?;
        if placed {
            self.notify();
        }
        Ok(placed)
    }

    /// See [`GameEngine::shoot_at`].
    pub fn shoot_at(&mut self, row: usize, col: usize) -> Result<ShotOutcome> {
        self.check_turn()?;
        let outcome = self.engine.shoot_at(row, col)?;
        self.notify();
        Ok(outcome)
    }

    /// Debug capability: the opponent's ship placement grid. `Some` only if the
    /// match allows peeking and this player asked for it when bound.
    pub fn peek_opponent(&self) -> Option<&Grid> {
        if self.peek {
            Some(self.engine.own_grid(self.side.opponent()))
        } else {
            None
        }
    }

    fn check_turn(&self) -> Result<()> {
        if self.engine.finished {
            Err(EngineError::IllegalMove(IllegalMoveReason::MatchFinished))
        } else if self.engine.turn != self.side {
            Err(EngineError::IllegalMove(IllegalMoveReason::NotYourTurn))
        } else {
            Ok(())
        }
    }

    fn notify(&mut self) {
        let record = self.engine.last_move;
        if let (Some(observer), Some(record)) = (self.observer.as_deref_mut(), record) {
            observer.on_move(&*self.engine, &record);
        }
    }
}
