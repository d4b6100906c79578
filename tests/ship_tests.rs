use seabattle::{parse_coordinate, parse_ship, Coordinate, GameError, Orientation, Ship};

fn c(text: &str) -> Coordinate {
    parse_coordinate(text).unwrap()
}

#[test]
fn test_horizontal_ship() -> Result<(), GameError> {
    let ship = Ship::new(c("A1"), c("A5"))?;
    assert_eq!(ship.orientation(), Orientation::Horizontal);
    assert_eq!(ship.begin(), c("A1"));
    assert_eq!(ship.end(), c("A5"));
    assert_eq!(ship.length(), 5);
    assert_eq!(ship.remaining_hits(), 5);
    assert!(!ship.is_sunk());
    Ok(())
}

#[test]
fn test_ends_are_ordered() -> Result<(), GameError> {
    let forward = Ship::new(c("B3"), c("E3"))?;
    let backward = Ship::new(c("E3"), c("B3"))?;
    assert_eq!(forward, backward);
    assert_eq!(backward.orientation(), Orientation::Vertical);
    assert_eq!(backward.begin(), c("B3"));
    assert_eq!(backward.length(), 4);
    Ok(())
}

#[test]
fn test_diagonal_is_rejected() {
    assert_eq!(Ship::new(c("A1"), c("B2")), Err(GameError::InvalidShipShape));
}

#[test]
fn test_single_cell_is_rejected() {
    assert_eq!(Ship::new(c("D4"), c("D4")), Err(GameError::InvalidShipShape));
}

#[test]
fn test_cells_and_contains() -> Result<(), GameError> {
    let ship = Ship::new(c("C7"), c("F7"))?;
    let cells: Vec<String> = ship.cells().map(|x| x.to_string()).collect();
    assert_eq!(cells, vec!["C7", "D7", "E7", "F7"]);
    assert!(ship.contains(c("D7")));
    assert!(!ship.contains(c("G7")));
    assert!(!ship.contains(c("D8")));
    Ok(())
}

#[test]
fn test_parse_ship() {
    let ship = parse_ship("J10 J9").unwrap();
    assert_eq!(ship.begin(), c("J9"));
    assert_eq!(ship.length(), 2);

    assert_eq!(parse_ship("A1 B2"), Err(GameError::InvalidShipShape));
    assert_eq!(parse_ship("A1 K1"), Err(GameError::InvalidCoordinate));
}

#[test]
fn test_parse_ship_needs_two_tokens() {
    for input in ["", "A1", "A1  A5", "A1 A5 A6", "A1,A5"] {
        assert_eq!(
            parse_ship(input),
            Err(GameError::InvalidCoordinate),
            "input {:?} should be rejected",
            input
        );
    }
}
