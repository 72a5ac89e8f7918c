#![cfg(feature = "std")]

//! Console driver pieces shared by the binaries: bot selection, a rendering
//! observer and the end-of-match summary.

use std::boxed::Box;
use std::io::Write;
use std::string::String;

use clap::ValueEnum;
use serde::Serialize;

use crate::{
    common::Side,
    config::MatchConfig,
    game::{GameEngine, Move, MoveRecord, Observer},
    player::{PlayError, Player},
    player_ai::{HunterBot, PeekingBot, RandomBot},
    ui,
};

/// Which boards are printed while a match runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Only the result.
    Quiet,
    /// Side A's fleet and shots after every move.
    #[default]
    SideA,
    /// Both sides' views after every move.
    Both,
}

/// Computer opponents selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BotKind {
    Random,
    Hunter,
    Peeking,
}

/// Construct a bot of the given kind. `peek_probability` only matters for
/// [`BotKind::Peeking`].
pub fn build_bot(kind: BotKind, name: &str, seed: u64, peek_probability: f64) -> Box<dyn Player> {
    match kind {
        BotKind::Random => Box::new(RandomBot::new(name, seed)),
        BotKind::Hunter => Box::new(HunterBot::new(name, seed)),
        BotKind::Peeking => Box::new(PeekingBot::new(name, seed, peek_probability)),
    }
}

/// Result of a finished match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub winner: Side,
    pub shots_a: usize,
    pub shots_b: usize,
    pub total_shots: usize,
}

/// Observer printing boards to `out` according to an [`OutputMode`].
pub struct ConsoleObserver<W> {
    out: W,
    mode: OutputMode,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W, mode: OutputMode) -> Self {
        Self { out, mode }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print(&mut self, text: &str) {
        if let Err(err) = self.out.write_all(text.as_bytes()) {
            log::warn!("failed to write match output: {}", err);
        }
    }

    fn print_side(&mut self, engine: &GameEngine, side: Side) {
        let view = ui::render_side_by_side(engine.own_grid(side), engine.shot_grid(side));
        self.print(&format!("== {} ==\n{}\n", side, view));
    }
}

fn describe(record: &MoveRecord) -> String {
    match record.action {
        Move::Placement {
            kind,
            row,
            col,
            orientation,
            ship_id,
        } => format!(
            "{} placed {} #{} at {} {:?}",
            record.side,
            kind,
            ship_id,
            ui::coord_to_string(row, col),
            orientation
        ),
        Move::Shot { row, col, outcome } => format!(
            "{} fired at {}: {}",
            record.side,
            ui::coord_to_string(row, col),
            outcome
        ),
    }
}

impl<W: Write> Observer for ConsoleObserver<W> {
    fn on_move(&mut self, engine: &GameEngine, record: &MoveRecord) {
        let line = describe(record);
        log::info!("{}", line);
        match self.mode {
            OutputMode::Quiet => {}
            OutputMode::SideA => {
                self.print(&format!("{}\n", line));
                self.print_side(engine, Side::A);
            }
            OutputMode::Both => {
                self.print(&format!("{}\n", line));
                self.print_side(engine, Side::A);
                self.print_side(engine, Side::B);
            }
        }
    }

    fn on_finish(&mut self, engine: &GameEngine, winner: Side) {
        log::info!("{} won after {} shots", winner, engine.total_shots());
        self.print(&format!(
            "{} wins! Total shots: {}\n",
            winner,
            engine.total_shots()
        ));
    }
}

/// Play a match between two players to completion, optionally rendering it.
pub fn run_match(
    config: &MatchConfig,
    a: &mut dyn Player,
    b: &mut dyn Player,
    observer: Option<&mut dyn Observer>,
) -> Result<MatchSummary, PlayError> {
    let mut engine = GameEngine::new(config)?;
    let bound = engine.bind(a, b);
    let bound = match observer {
        Some(observer) => bound.observe(observer),
        None => bound,
    };
    let winner = bound.start()?;
    Ok(MatchSummary {
        winner,
        shots_a: engine.shots_fired(Side::A),
        shots_b: engine.shots_fired(Side::B),
        total_shots: engine.total_shots(),
    })
}
