#![cfg(feature = "std")]

//! Text rendering of grids and target densities. Read-only.

use std::fmt::Write;
use std::string::String;

use crate::{ai::Density, cell::CellState, grid::Grid};

/// Largest width or height whose columns can all be addressed as `A`..`Z`.
pub const MAX_LABELLED_DIMENSION: usize = 26;

/// Returns `true` if every cell of a `width` x `height` grid has a coordinate
/// a player can type.
pub fn fits_labels(width: usize, height: usize) -> bool {
    width <= MAX_LABELLED_DIMENSION && height <= MAX_LABELLED_DIMENSION
}

/// Column label used in coordinates: `A`..`Z`, `#` beyond.
pub fn column_label(col: usize) -> char {
    if col < MAX_LABELLED_DIMENSION {
        (b'A' + col as u8) as char
    } else {
        '#'
    }
}

/// Format a coordinate as column letter plus 1-based row, e.g. `C7`.
pub fn coord_to_string(row: usize, col: usize) -> String {
    format!("{}{}", column_label(col), row + 1)
}

fn cell_symbol(state: CellState, reveal: bool) -> char {
    match state {
        CellState::Destroyed => 'X',
        CellState::Missed => 'o',
        CellState::Ship if reveal => 'S',
        CellState::Ship | CellState::Empty => '.',
    }
}

fn grid_lines(grid: &Grid, reveal: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(grid.height() + 1);
    let mut header = String::from("   ");
    for c in 0..grid.width() {
        let _ = write!(header, " {}", column_label(c));
    }
    lines.push(header);
    for r in 0..grid.height() {
        let mut line = format!("{:2} ", r + 1);
        for c in 0..grid.width() {
            let symbol = grid
                .cell_at(r, c)
                .map_or('?', |cell| cell_symbol(cell.state(), reveal));
            let _ = write!(line, " {}", symbol);
        }
        lines.push(line);
    }
    lines
}

/// Render one grid. With `reveal` unset, ship parts that were not hit look like water.
pub fn render_grid(grid: &Grid, reveal: bool) -> String {
    let mut out = String::new();
    for line in grid_lines(grid, reveal) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Render a player's own grid (revealed) next to its shot-tracking grid.
pub fn render_side_by_side(own: &Grid, shots: &Grid) -> String {
    let left = grid_lines(own, true);
    let right = grid_lines(shots, false);
    let width = left.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let mut out = format!("{:<width$}      {}\n", "Your fleet", "Your shots", width = width);
    let rows = left.len().max(right.len());
    for i in 0..rows {
        let l = left.get(i).map(String::as_str).unwrap_or("");
        let r = right.get(i).map(String::as_str).unwrap_or("");
        let _ = writeln!(out, "{:<width$}      {}", l, r, width = width);
    }
    out
}

/// Render a density matrix with two decimals per cell.
pub fn render_density(density: &Density) -> String {
    let mut out = String::from("   ");
    for c in 0..density.width() {
        let _ = write!(out, " {:>4}", column_label(c));
    }
    out.push('\n');
    for r in 0..density.height() {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..density.width() {
            let _ = write!(out, " {:4.2}", density.get(r, c));
        }
        out.push('\n');
    }
    out
}

/// Ships still to be placed, e.g. `Cruiser x2 (3), Carrier x1 (5)`.
pub fn render_remaining(grid: &Grid) -> String {
    let mut parts = Vec::new();
    for (kind, left) in grid.remaining_kinds() {
        if left > 0 {
            let length = grid.catalogue().get(kind).map_or(0, |class| class.length);
            parts.push(format!("{} x{} ({})", kind, left, length));
        }
    }
    parts.join(", ")
}
