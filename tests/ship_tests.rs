use bship::{CatalogueError, MatchConfig, ShipCatalogue, ShipClass, ShipKind, UnknownShipKind};

#[test]
fn kind_names_parse_loosely() {
    assert_eq!("carrier".parse::<ShipKind>(), Ok(ShipKind::Carrier));
    assert_eq!("Patrol Boat".parse::<ShipKind>(), Ok(ShipKind::PatrolBoat));
    assert_eq!("patrol_boat".parse::<ShipKind>(), Ok(ShipKind::PatrolBoat));
    assert_eq!("SUBMARINE".parse::<ShipKind>(), Ok(ShipKind::Submarine));
    assert_eq!("frigate".parse::<ShipKind>(), Err(UnknownShipKind));
    assert_eq!(ShipKind::PatrolBoat.to_string(), "Patrol Boat");
}

#[test]
fn standard_catalogue() {
    let catalogue = ShipCatalogue::standard();
    assert_eq!(catalogue.fleet_size(), 5);
    assert_eq!(catalogue.total_cells(), 17);
    assert_eq!(catalogue.get(ShipKind::Cruiser), Some(&ShipClass::new(ShipKind::Cruiser, 3, 2)));
    assert_eq!(catalogue.get(ShipKind::Submarine), None);
    assert_eq!(
        catalogue.placement_queue(),
        vec![
            ShipKind::Carrier,
            ShipKind::Battleship,
            ShipKind::Cruiser,
            ShipKind::Cruiser,
            ShipKind::Destroyer
        ]
    );
    assert_eq!(catalogue.fleet_lengths(), vec![5, 4, 3, 3, 2]);
    assert_eq!(ShipCatalogue::default(), catalogue);
}

#[test]
fn catalogue_validation() {
    assert_eq!(ShipCatalogue::new(Vec::new()), Err(CatalogueError::Empty));
    assert_eq!(
        ShipCatalogue::new([ShipClass::new(ShipKind::Carrier, 0, 1)]),
        Err(CatalogueError::ZeroLength(ShipKind::Carrier))
    );
    assert_eq!(
        ShipCatalogue::new([ShipClass::new(ShipKind::Carrier, 5, 0)]),
        Err(CatalogueError::ZeroCount(ShipKind::Carrier))
    );
    assert_eq!(
        ShipCatalogue::new([
            ShipClass::new(ShipKind::Carrier, 5, 1),
            ShipClass::new(ShipKind::Destroyer, 2, 1),
            ShipClass::new(ShipKind::Carrier, 4, 1),
        ]),
        Err(CatalogueError::DuplicateKind(ShipKind::Carrier))
    );
}

#[test]
fn config_defaults() {
    let config = MatchConfig::default();
    assert_eq!((config.width, config.height), (10, 10));
    assert_eq!(config.catalogue, ShipCatalogue::standard());
    assert!(!config.allow_peeking);
}

#[test]
fn config_from_json_fills_defaults() {
    let config = MatchConfig::from_json_str(r#"{"width": 8, "height": 6}"#).unwrap();
    assert_eq!(config, MatchConfig::new(8, 6));

    let config = MatchConfig::from_json_str(
        r#"{
            "width": 5,
            "height": 5,
            "allow_peeking": true,
            "catalogue": [
                {"kind": "patrol_boat", "length": 1, "max_count": 2},
                {"kind": "submarine", "length": 3, "max_count": 1}
            ]
        }"#,
    )
    .unwrap();
    assert!(config.allow_peeking);
    assert_eq!(config.catalogue.fleet_size(), 3);
    assert_eq!(config.catalogue.get(ShipKind::Submarine).map(|c| c.length), Some(3));
}

#[test]
fn config_json_rejects_bad_catalogue() {
    let err = MatchConfig::from_json_str(
        r#"{"width": 5, "height": 5, "catalogue": [{"kind": "carrier", "length": 0, "max_count": 1}]}"#,
    );
    assert!(err.is_err());
    assert!(MatchConfig::from_json_str(r#"{"width": 5, "height": 5, "catalogue": []}"#).is_err());
}
