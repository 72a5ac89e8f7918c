#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod ai;
mod cell;
mod common;
mod config;
mod game;
mod grid;
mod player;
mod player_ai;
mod ship;
#[cfg(feature = "std")]
pub mod console;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
#[cfg(feature = "std")]
pub mod ui;

pub use ai::*;
pub use cell::*;
pub use common::{EngineError, IllegalMoveReason, Orientation, ShipId, ShotOutcome, Side};
pub use config::*;
pub use game::*;
pub use grid::*;
pub use player::*;
pub use player_ai::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use player_cli::*;
