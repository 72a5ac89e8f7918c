use std::sync::Arc;

use bship::{
    EngineError, Grid, IllegalMoveReason, Occupancy, Orientation, ShipCatalogue, ShipKind,
    ShotOutcome,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

const SIZE: usize = 10;

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

fn kind() -> impl Strategy<Value = ShipKind> {
    prop_oneof![
        Just(ShipKind::Destroyer),
        Just(ShipKind::Cruiser),
        Just(ShipKind::Battleship),
        Just(ShipKind::Carrier),
    ]
}

/// Grid with the standard fleet placed at random anchors.
fn random_fleet(seed: u64) -> Grid {
    let catalogue = Arc::new(ShipCatalogue::standard());
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut grid = Grid::new(SIZE, SIZE, Arc::clone(&catalogue)).unwrap();
    for kind in catalogue.placement_queue() {
        loop {
            let r = rng.random_range(0..SIZE);
            let c = rng.random_range(0..SIZE);
            let o = if rng.random() { Orientation::Horizontal } else { Orientation::Vertical };
            if grid.place_ship(kind, r, c, o).unwrap() {
                break;
            }
        }
    }
    grid
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placement_covers_contiguous_cells(
        kind in kind(),
        row in 0..SIZE,
        col in 0..SIZE,
        orientation in orientation(),
    ) {
        let mut grid = Grid::new(SIZE, SIZE, Arc::new(ShipCatalogue::standard())).unwrap();
        let length = grid.catalogue().get(kind).unwrap().length;
        let before = grid.clone();
        let placed = grid.place_ship(kind, row, col, orientation).unwrap();
        let (dr, dc) = orientation.step();
        let fits = row + dr * (length - 1) < SIZE && col + dc * (length - 1) < SIZE;
        prop_assert_eq!(placed, fits);
        if placed {
            let expected: Vec<_> = (0..length).map(|k| (row + dr * k, col + dc * k)).collect();
            prop_assert_eq!(grid.ship_cells(0).collect::<Vec<_>>(), expected);
            prop_assert_eq!(grid.alive_ship_count(), 1);
        } else {
            prop_assert_eq!(grid, before);
        }
    }

    #[test]
    fn failed_placement_leaves_grid_unchanged(
        seed in any::<u64>(),
        kind in kind(),
        row in 0..SIZE + 2,
        col in 0..SIZE + 2,
        orientation in orientation(),
    ) {
        let mut grid = Grid::new(SIZE, SIZE, Arc::new(ShipCatalogue::standard())).unwrap();
        let mut rng = SmallRng::seed_from_u64(seed);
        // one random ship to collide with
        let first = ShipKind::Battleship;
        while !grid
            .place_ship(first, rng.random_range(0..SIZE), rng.random_range(0..SIZE), Orientation::Vertical)
            .unwrap()
        {}
        let before = grid.clone();
        match grid.place_ship(kind, row, col, orientation) {
            Ok(true) => {
                let id = grid.next_ship_id() - 1;
                prop_assert!(grid.ship_cells(id).all(|(r, c)| before.cell_at(r, c).unwrap().occupancy() == Occupancy::Empty));
            }
            Ok(false) => prop_assert_eq!(&grid, &before),
            Err(err) => {
                prop_assert_eq!(err, EngineError::FleetLimitExceeded(first));
                prop_assert_eq!(&grid, &before);
            }
        }
    }

    #[test]
    fn double_shot_is_rejected(seed in any::<u64>(), row in 0..SIZE, col in 0..SIZE) {
        let mut grid = random_fleet(seed);
        prop_assert!(grid.is_ready());
        grid.shoot_at(row, col).unwrap();
        let after = grid.clone();
        prop_assert_eq!(
            grid.shoot_at(row, col),
            Err(EngineError::IllegalMove(IllegalMoveReason::AlreadyShot))
        );
        prop_assert_eq!(grid, after);
    }

    #[test]
    fn alive_count_tracks_sunk_ships(seed in any::<u64>(), shots in 0..SIZE * SIZE) {
        let mut grid = random_fleet(seed);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let fleet = grid.catalogue().fleet_size();
        let mut sunk = 0;
        for _ in 0..shots {
            let (r, c) = (rng.random_range(0..SIZE), rng.random_range(0..SIZE));
            match grid.shoot_at(r, c) {
                Ok(ShotOutcome::Sunk(id)) => {
                    sunk += 1;
                    prop_assert!(grid.ship_sunk(id));
                }
                Ok(_) => {}
                Err(err) => prop_assert_eq!(err, EngineError::IllegalMove(IllegalMoveReason::AlreadyShot)),
            }
            prop_assert_eq!(grid.alive_ship_count(), fleet - sunk);
            prop_assert!(grid.is_ready());
        }
        prop_assert_eq!(grid.all_ships_sunk(), grid.alive_ship_count() == 0);
    }
}
