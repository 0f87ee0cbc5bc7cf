use battleships::{
    FleetComposition, FleetError, Game, GameError, GridError, Orientation, Phase,
    PlacementError, Player,
};

#[test]
fn test_invalid_grid_initialisation() {
    assert_eq!(
        Game::new(4, 10).unwrap_err(),
        GameError::InvalidDimensions { columns: 4, rows: 10 }
    );
    assert_eq!(
        Game::new(5, 0).unwrap_err(),
        GameError::InvalidDimensions { columns: 5, rows: 0 }
    );
}

#[test]
fn test_setting_invalid_fleet_composition() {
    let mut game = Game::default();
    let err = game
        .set_fleet_composition(FleetComposition::new().with(3, 0))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "The fleet composition must map positive integers to positive integers"
    );
    let err = "foo:bar".parse::<FleetComposition>().unwrap_err();
    assert_eq!(err, FleetError::Malformed);
}

#[test]
fn test_fleet_too_large_for_grid() {
    let mut game = Game::new(10, 10).unwrap();
    let fleet = FleetComposition::new().with(3, 10).with(6, 10).with(5, 6);
    assert_eq!(
        game.set_fleet_composition(fleet).unwrap_err(),
        GameError::InvalidFleetComposition(FleetError::CoversGrid {
            covered: 120,
            area: 100
        })
    );
    // Rejected composition leaves the default in place.
    assert_eq!(game.ships_required(3), 1);
}

#[test]
fn test_fleet_with_huge_counts_is_rejected() {
    let mut game = Game::default();
    let texts = [
        format!("2:{}", usize::MAX / 2 + 1),
        format!("2:{},3:1", usize::MAX),
    ];
    for text in texts {
        let fleet: FleetComposition = text.parse().unwrap();
        assert_eq!(
            game.set_fleet_composition(fleet).unwrap_err(),
            GameError::InvalidFleetComposition(FleetError::CoversGrid {
                covered: usize::MAX,
                area: 25
            })
        );
    }
    assert_eq!(game.fleet_composition().total_ships(), 3);
}

#[test]
fn test_place_ship_with_huge_length() {
    let mut game = Game::default();
    assert_eq!(
        game.place_ship(1, 0, usize::MAX, Orientation::Landscape)
            .unwrap_err(),
        GameError::NoShipAvailable { length: usize::MAX }
    );
    assert!(game.active_player_ships().is_empty());
}

#[test]
fn test_ship_too_long_for_grid() {
    let mut game = Game::new(10, 10).unwrap();
    let err = game
        .set_fleet_composition(FleetComposition::new().with(12, 1))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid number of ships given - no ship of length 12 will fit on the grid!"
    );
}

#[test]
fn test_empty_fleet() {
    let mut game = Game::default();
    assert_eq!(
        game.set_fleet_composition(FleetComposition::new())
            .unwrap_err(),
        GameError::InvalidFleetComposition(FleetError::Empty)
    );
}

#[test]
fn test_place_ship_completely_out_of_bounds() {
    let mut game = Game::default();
    assert_eq!(
        game.place_ship(6, 6, 3, Orientation::Landscape).unwrap_err(),
        GameError::InvalidPlacement(PlacementError::OutOfBounds)
    );
    assert_eq!(game.state(), Phase::Initial);
}

#[test]
fn test_place_ship_partially_out_of_bounds() {
    let mut game = Game::default();
    let err = game.place_ship(4, 4, 3, Orientation::Landscape).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Placement not valid - the entire ship does not fit within the grid"
    );
    let err = game.place_ship(1, 3, 3, Orientation::Portrait).unwrap_err();
    assert_eq!(err, GameError::InvalidPlacement(PlacementError::OutOfBounds));
}

#[test]
fn test_set_fleet_after_placement_has_begun() {
    let mut game = Game::default();
    game.place_ship(0, 0, 3, Orientation::Landscape).unwrap();
    assert_eq!(
        game.set_fleet_composition(FleetComposition::new().with(3, 5))
            .unwrap_err(),
        GameError::FleetAlreadyLocked
    );
}

#[test]
fn test_place_ship_when_none_available() {
    let mut game = Game::default();
    assert_eq!(
        game.place_ship(0, 0, 5, Orientation::Landscape).unwrap_err(),
        GameError::NoShipAvailable { length: 5 }
    );
}

#[test]
fn test_place_two_ships_when_one_available() {
    let mut game = Game::default();
    game.set_fleet_composition(FleetComposition::new().with(2, 2).with(3, 1).with(4, 2))
        .unwrap();
    game.place_ship(0, 1, 3, Orientation::Landscape).unwrap();
    let err = game.place_ship(0, 0, 3, Orientation::Landscape).unwrap_err();
    assert_eq!(
        err.to_string(),
        "There are no ships of length 3 available for placement"
    );
    // The other player still has theirs.
    game.change_active_player();
    assert!(game.place_ship(0, 0, 3, Orientation::Landscape).is_ok());
}

#[test]
fn test_start_when_ships_await_placement() {
    let mut game = Game::default();
    assert_eq!(game.start().unwrap_err(), GameError::FleetIncomplete);

    game.set_fleet_composition(FleetComposition::new().with(2, 1))
        .unwrap();
    game.place_ship(0, 0, 2, Orientation::Portrait).unwrap();
    assert_eq!(game.start().unwrap_err(), GameError::FleetIncomplete);
    assert_eq!(game.state(), Phase::Placing);
}

#[test]
fn test_start_when_already_started() {
    let mut game = Game::default();
    game.set_fleet_composition(FleetComposition::new().with(2, 1))
        .unwrap();
    game.place_ship(0, 0, 2, Orientation::Portrait)
        .unwrap()
        .change_active_player()
        .place_ship(0, 0, 2, Orientation::Portrait)
        .unwrap();
    game.start().unwrap();
    assert_eq!(game.start().unwrap_err(), GameError::GameAlreadyStarted);
    assert_eq!(
        game.place_ship(3, 3, 2, Orientation::Portrait).unwrap_err(),
        GameError::GameAlreadyStarted
    );
}

#[test]
fn test_shoot_when_game_not_started() {
    let mut game = Game::default();
    assert_eq!(game.shoot(0, 0).unwrap_err(), GameError::GameNotStarted);
    game.place_ship(0, 0, 2, Orientation::Portrait).unwrap();
    assert_eq!(game.shoot(0, 0).unwrap_err(), GameError::GameNotStarted);
}

#[test]
fn test_shoot_twice_in_a_row() {
    let mut game = Game::default();
    game.set_fleet_composition(FleetComposition::new().with(2, 1))
        .unwrap();
    game.place_ship(2, 2, 2, Orientation::Portrait)
        .unwrap()
        .change_active_player()
        .place_ship(2, 2, 2, Orientation::Landscape)
        .unwrap();
    game.start().unwrap();
    game.shoot(0, 0).unwrap();
    let err = game.shoot(1, 1).unwrap_err();
    assert_eq!(
        err.to_string(),
        "You may not shoot twice in a row - it is the other player's turn"
    );
}

#[test]
fn test_shoot_outside_grid() {
    let mut game = Game::default();
    game.set_fleet_composition(FleetComposition::new().with(2, 1))
        .unwrap();
    game.place_ship(0, 0, 2, Orientation::Portrait)
        .unwrap()
        .change_active_player()
        .place_ship(0, 0, 2, Orientation::Portrait)
        .unwrap();
    game.start().unwrap();
    assert_eq!(
        game.shoot(5, 0).unwrap_err(),
        GameError::Grid(GridError::IndexOutOfBounds { x: 5, y: 0 })
    );
    assert_eq!(game.active_player(), Player::One);
    assert!(game.shoot(4, 0).is_ok());
}
