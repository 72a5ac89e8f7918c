use std::io::Cursor;

use bship::{
    console::run_match, parse_coord, HumanPlayer, MatchConfig, MoveContext, Orientation, PlayError,
    Player, ShipCatalogue, ShipClass, ShipKind, Side,
};

/// Places its destroyer on the bottom row, then fires along the grid in order.
struct BottomRow {
    next_shot: usize,
}

impl Player for BottomRow {
    fn name(&self) -> &str {
        "bottom row"
    }

    fn produce_move(&mut self, ctx: &mut MoveContext<'_, '_>) -> Result<(), PlayError> {
        if !ctx.own_grid().is_ready() {
            ctx.place_ship(ShipKind::Destroyer, 2, 0, Orientation::Horizontal)?;
            return Ok(());
        }
        let width = ctx.shot_grid().width();
        while ctx.is_my_turn() {
            let (row, col) = (self.next_shot / width, self.next_shot % width);
            self.next_shot += 1;
            ctx.shoot_at(row, col)?;
        }
        Ok(())
    }
}

fn tiny_config() -> MatchConfig {
    let catalogue = ShipCatalogue::new([ShipClass::new(ShipKind::Destroyer, 2, 1)]).unwrap();
    MatchConfig::new(3, 3).with_catalogue(catalogue)
}

#[test]
fn parses_coordinates() {
    assert_eq!(parse_coord("A1"), Ok((0, 0)));
    assert_eq!(parse_coord("c5"), Ok((4, 2)));
    assert_eq!(parse_coord(" B12 "), Ok((11, 1)));
    assert!(parse_coord("").is_err());
    assert!(parse_coord("A").is_err());
    assert!(parse_coord("A0").is_err());
    assert!(parse_coord("5A").is_err());
    assert!(parse_coord("AA").is_err());
}

#[test]
fn human_recovers_from_bad_input_and_wins() {
    let input = "\
cruiser A1 h
destroyer C1 h
destroyer A1 diagonal
destroyer A1 h
Z9
A3
A3
B3
";
    let mut output = Vec::new();
    let mut human = HumanPlayer::new("You", Cursor::new(input), &mut output, 1);
    let mut bot = BottomRow { next_shot: 0 };
    let summary = run_match(&tiny_config(), &mut human, &mut bot, None).unwrap();
    drop(human);

    assert_eq!(summary.winner, Side::A);
    assert_eq!(summary.shots_a, 2);
    assert_eq!(summary.shots_b, 0);
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Error: ship kind Cruiser is not part of the fleet"));
    assert!(text.contains("does not fit at C1"));
    assert!(text.contains("Invalid orientation"));
    assert!(text.contains("Illegal move, try again"));
    assert!(text.contains("You fired at B3 -> sunk ship #0"));
}

#[test]
fn end_of_input_abandons() {
    let mut output = Vec::new();
    let mut human = HumanPlayer::new("You", Cursor::new(""), &mut output, 1);
    let mut bot = BottomRow { next_shot: 0 };
    let err = run_match(&tiny_config(), &mut human, &mut bot, None).unwrap_err();
    assert!(matches!(err, PlayError::Abandoned { ref player } if player == "You"));
}

#[test]
fn quit_abandons_mid_match() {
    let mut output = Vec::new();
    let mut human = HumanPlayer::new("You", Cursor::new("destroyer A1 h\nQUIT\n"), &mut output, 1);
    let mut bot = BottomRow { next_shot: 0 };
    let err = run_match(&tiny_config(), &mut human, &mut bot, None).unwrap_err();
    assert!(matches!(err, PlayError::Abandoned { .. }));
}

#[test]
fn empty_lines_use_random_placement_and_suggestions() {
    let input = "\n".repeat(20);
    let mut output = Vec::new();
    let mut human = HumanPlayer::new("You", Cursor::new(input), &mut output, 9);
    let mut bot = BottomRow { next_shot: 0 };
    let summary = run_match(&tiny_config(), &mut human, &mut bot, None).unwrap();
    assert!(summary.shots_a <= 9);
    assert!(summary.shots_b <= 9);
}

#[test]
fn random_placement_starts_with_longest_ship() {
    let catalogue = ShipCatalogue::new([
        ShipClass::new(ShipKind::Destroyer, 2, 1),
        ShipClass::new(ShipKind::Submarine, 3, 1),
    ])
    .unwrap();
    let mut grid = bship::Grid::new(5, 5, std::sync::Arc::new(catalogue)).unwrap();
    assert_eq!(bship::next_unplaced(&grid), Some(ShipKind::Submarine));
    assert!(grid.place_ship(ShipKind::Submarine, 0, 0, Orientation::Horizontal).unwrap());
    assert_eq!(bship::next_unplaced(&grid), Some(ShipKind::Destroyer));
    assert!(grid.place_ship(ShipKind::Destroyer, 2, 0, Orientation::Horizontal).unwrap());
    assert_eq!(bship::next_unplaced(&grid), None);
}
