//! Commonly used types for ease of import.

pub use crate::{
    GameEngine, Grid, HunterBot, MatchConfig, MatchPhase, Orientation, PeekingBot, Player,
    RandomBot, ShipCatalogue, ShipKind, ShotOutcome, Side,
};

#[cfg(feature = "std")]
pub use crate::{
    console::{run_match, ConsoleObserver, MatchSummary, OutputMode},
    HumanPlayer,
};
