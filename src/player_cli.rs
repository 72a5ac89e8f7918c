#![cfg(feature = "std")]

use std::io::{BufRead, Write};
use std::string::String;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    ai::TargetTracker,
    common::{EngineError, IllegalMoveReason, Orientation},
    game::MoveContext,
    player::{next_unplaced, place_randomly, PlayError, Player},
    ship::ShipKind,
    ui,
};

/// Parse a coordinate such as `A5` into `(row, col)`. Only the syntax is
/// checked; bounds are left to the engine.
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars
        .next()
        .ok_or("No column letter")?
        .to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return Err(format!("Invalid column '{}' - must be a letter", col_ch));
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row_str: String = chars.collect();
    if row_str.is_empty() {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number", row_str))?;
    if row == 0 {
        return Err("Row cannot be 0 - rows start at 1".to_string());
    }
    Ok((row - 1, col))
}

fn parse_orientation(input: &str) -> Result<Orientation, String> {
    match input.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('h') => Ok(Orientation::Horizontal),
        Some('v') => Ok(Orientation::Vertical),
        _ => Err(format!("Invalid orientation '{}' - use h or v", input)),
    }
}

/// Parse `<kind> <coord> <h|v>`. The kind may span several words
/// (`patrol boat B2 h`).
fn parse_placement(line: &str) -> Result<(ShipKind, (usize, usize), Orientation), String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.len() < 3 {
        return Err("Expected: <ship> <coord> <h|v> (e.g. cruiser B2 v)".to_string());
    }
    let (kind_words, rest) = words.split_at(words.len() - 2);
    let kind: ShipKind = kind_words
        .join(" ")
        .parse()
        .map_err(|_| format!("Unknown ship '{}'", kind_words.join(" ")))?;
    let coord = parse_coord(rest[0])?;
    let orientation = parse_orientation(rest[1])?;
    Ok((kind, coord, orientation))
}

/// Interactive player reading moves from `input` and writing prompts to `output`.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
    rng: SmallRng,
    tracker: TargetTracker,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W, seed: u64) -> Self {
        Self {
            name: name.into(),
            input,
            output,
            rng: SmallRng::seed_from_u64(seed),
            tracker: TargetTracker::new(),
        }
    }

    /// Next trimmed line, or `Abandoned` on end of input or `quit`.
    fn read_line(&mut self) -> Result<String, PlayError> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        let line = line.trim().to_string();
        if read == 0 || line.eq_ignore_ascii_case("quit") {
            log::info!("{} left the match", self.name);
            return Err(PlayError::Abandoned {
                player: self.name.clone(),
            });
        }
        Ok(line)
    }

    fn place(&mut self, ctx: &mut MoveContext<'_, '_>) -> Result<(), PlayError> {
        loop {
            write!(
                self.output,
                "{}\nStill to place: {}\nPlace a ship (e.g. cruiser B2 v), enter for random: ",
                ui::render_grid(ctx.own_grid(), true),
                ui::render_remaining(ctx.own_grid()),
            )?;
            self.output.flush()?;
            let line = self.read_line()?;
            if line.is_empty() {
                if let Some(kind) = next_unplaced(ctx.own_grid()) {
                    place_randomly(ctx, &mut self.rng, kind, &self.name)?;
                    return Ok(());
                }
                continue;
            }
            let (kind, (row, col), orientation) = match parse_placement(&line) {
                Ok(parsed) => parsed,
                Err(msg) => {
                    writeln!(self.output, "Error: {}", msg)?;
                    continue;
                }
            };
            match ctx.place_ship(kind, row, col, orientation) {
                Ok(true) => return Ok(()),
                Ok(false) => writeln!(
                    self.output,
                    "The {} does not fit at {}",
                    kind,
                    ui::coord_to_string(row, col)
                )?,
                Err(err @ (EngineError::InvalidShipKind(_) | EngineError::FleetLimitExceeded(_))) => {
                    writeln!(self.output, "Error: {}", err)?
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn shoot(&mut self, ctx: &mut MoveContext<'_, '_>) -> Result<(), PlayError> {
        loop {
            let suggestion = self.tracker.suggest(ctx.shot_grid(), &mut self.rng);
            writeln!(
                self.output,
                "{}",
                ui::render_side_by_side(ctx.own_grid(), ctx.shot_grid())
            )?;
            match suggestion {
                Some((r, c)) => write!(self.output, "Enter guess [{}]: ", ui::coord_to_string(r, c))?,
                None => write!(self.output, "Enter guess: ")?,
            }
            self.output.flush()?;
            let line = self.read_line()?;
            let (row, col) = if line.is_empty() {
                match suggestion {
                    Some(coord) => coord,
                    None => continue,
                }
            } else {
                match parse_coord(&line) {
                    Ok(coord) => coord,
                    Err(msg) => {
                        writeln!(self.output, "Error: {}", msg)?;
                        continue;
                    }
                }
            };
            match ctx.shoot_at(row, col) {
                Ok(outcome) => {
                    self.tracker.observe(ctx.shot_grid(), outcome);
                    writeln!(
                        self.output,
                        "You fired at {} -> {}",
                        ui::coord_to_string(row, col),
                        outcome
                    )?;
                    return Ok(());
                }
                Err(
                    err @ (EngineError::IndexOutOfRange { .. }
                    | EngineError::IllegalMove(IllegalMoveReason::AlreadyShot)),
                ) => writeln!(self.output, "Illegal move, try again: {}", err)?,
                Err(err) => return Err(err.into()),
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn produce_move(&mut self, ctx: &mut MoveContext<'_, '_>) -> Result<(), PlayError> {
        if ctx.own_grid().is_ready() {
            self.shoot(ctx)
        } else {
            self.place(ctx)
        }
    }
}
