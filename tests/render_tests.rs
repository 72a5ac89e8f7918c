use std::sync::Arc;

use bship::{
    calc_density,
    console::{ConsoleObserver, MatchSummary, OutputMode},
    ui, GameEngine, Grid, MatchConfig, Observer, Orientation, ShipCatalogue, ShipClass, ShipKind,
    Side,
};

fn tiny_grid() -> Grid {
    let catalogue = ShipCatalogue::new([ShipClass::new(ShipKind::Destroyer, 2, 1)]).unwrap();
    let mut grid = Grid::new(3, 3, Arc::new(catalogue)).unwrap();
    assert!(grid.place_ship(ShipKind::Destroyer, 0, 0, Orientation::Horizontal).unwrap());
    grid.shoot_at(0, 0).unwrap();
    grid.shoot_at(1, 1).unwrap();
    grid
}

#[test]
fn revealed_grid_shows_ships() {
    let text = ui::render_grid(&tiny_grid(), true);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["    A B C", " 1  X S .", " 2  . o .", " 3  . . ."]);
}

#[test]
fn hidden_grid_shows_only_shots() {
    let text = ui::render_grid(&tiny_grid(), false);
    assert_eq!(text.lines().nth(1), Some(" 1  X . ."));
    assert!(!text.contains('S'));
}

#[test]
fn side_by_side_has_both_headers() {
    let grid = tiny_grid();
    let text = ui::render_side_by_side(&grid, &grid);
    assert!(text.starts_with("Your fleet"));
    assert!(text.contains("Your shots"));
    assert_eq!(text.lines().count(), 5);
    assert!(text.lines().nth(2).unwrap().contains("X S ."));
}

#[test]
fn coordinates_use_letters_and_one_based_rows() {
    assert_eq!(ui::coord_to_string(4, 2), "C5");
    assert_eq!(ui::coord_to_string(0, 0), "A1");
    assert_eq!(ui::column_label(25), 'Z');
    assert_eq!(ui::column_label(26), '#');
}

#[test]
fn only_letter_addressable_grids_fit() {
    assert!(ui::fits_labels(26, 26));
    assert!(ui::fits_labels(10, 10));
    assert!(!ui::fits_labels(30, 10));
    assert!(!ui::fits_labels(10, 27));
}

#[test]
fn remaining_lists_unplaced_ships() {
    let grid = Grid::new(10, 10, Arc::new(ShipCatalogue::standard())).unwrap();
    assert_eq!(
        ui::render_remaining(&grid),
        "Destroyer x1 (2), Cruiser x2 (3), Battleship x1 (4), Carrier x1 (5)"
    );
}

#[test]
fn density_renders_one_row_per_grid_row() {
    let grid = tiny_grid();
    let density = calc_density(&grid, &[], &[2]);
    let text = ui::render_density(&density);
    assert_eq!(text.lines().count(), 4);
    assert!(text.contains("0.00"));
}

#[test]
fn quiet_observer_prints_only_result() {
    let mut engine = GameEngine::new(&MatchConfig::default()).unwrap();
    assert!(engine.place_ship(ShipKind::Carrier, 0, 0, Orientation::Horizontal).unwrap());
    let record = engine.last_move().unwrap();

    let mut quiet = ConsoleObserver::new(Vec::new(), OutputMode::Quiet);
    quiet.on_move(&engine, &record);
    quiet.on_finish(&engine, Side::B);
    let text = String::from_utf8(quiet.into_inner()).unwrap();
    assert_eq!(text, "player B wins! Total shots: 0\n");

    let mut verbose = ConsoleObserver::new(Vec::new(), OutputMode::Both);
    verbose.on_move(&engine, &record);
    let text = String::from_utf8(verbose.into_inner()).unwrap();
    assert!(text.starts_with("player A placed Carrier #0 at A1 Horizontal"));
    assert!(text.contains("== player A =="));
    assert!(text.contains("== player B =="));
}

#[test]
fn summary_serializes_to_json() {
    let summary = MatchSummary {
        winner: Side::A,
        shots_a: 30,
        shots_b: 28,
        total_shots: 58,
    };
    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"winner": "A", "shots_a": 30, "shots_b": 28, "total_shots": 58})
    );
}
