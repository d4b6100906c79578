use seabattle::{
    parse_coordinate, Coordinate, GameError, GameSession, Mode, Phase, PlayerId, ShotOutcome,
    NUM_SHIPS, SHIPS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const STANDARD_FLEET: [&str; NUM_SHIPS] = ["A1 A5", "C1 C4", "E1 E3", "G1 G3", "I1 I2"];

fn place_standard(session: &mut GameSession) {
    for input in STANDARD_FLEET {
        session.place(input).unwrap();
    }
}

fn duel_in_combat() -> GameSession {
    let mut session = GameSession::new(Mode::Duel);
    place_standard(&mut session);
    place_standard(&mut session);
    session
}

#[test]
fn test_duel_placement_order() {
    let mut session = GameSession::new(Mode::Duel);
    assert_eq!(session.phase(), Phase::Placement(PlayerId::One));
    assert_eq!(session.required_ship(), Some(SHIPS[0]));
    assert_eq!(session.fire("A1"), Err(GameError::OutOfPhase));

    place_standard(&mut session);
    assert_eq!(session.phase(), Phase::Placement(PlayerId::Two));
    assert_eq!(session.required_ship(), Some(SHIPS[0]));
    assert_eq!(session.board(PlayerId::Two).placed_count(), 0);

    place_standard(&mut session);
    assert_eq!(session.phase(), Phase::Combat(PlayerId::One));
    assert_eq!(session.required_ship(), None);
    assert_eq!(session.place("J9 J10"), Err(GameError::OutOfPhase));
}

#[test]
fn test_placement_report() {
    let mut session = GameSession::new(Mode::Duel);
    let report = session.place("A5 A1").unwrap();
    assert_eq!(report.player, PlayerId::One);
    assert_eq!(report.class, SHIPS[0]);
    assert_eq!(report.ship.begin(), parse_coordinate("A1").unwrap());
    assert_eq!(report.phase, Phase::Placement(PlayerId::One));
}

#[test]
fn test_bad_placement_keeps_slot() {
    let mut session = GameSession::new(Mode::Duel);
    assert_eq!(session.place("K1 K5"), Err(GameError::InvalidCoordinate));
    assert_eq!(session.place("A1 B2"), Err(GameError::InvalidShipShape));
    assert_eq!(
        session.place("A1 A3"),
        Err(GameError::LengthMismatch {
            class: "Aircraft Carrier",
            expected: 5,
            actual: 3
        })
    );
    assert_eq!(session.required_ship(), Some(SHIPS[0]));
    assert_eq!(session.board(PlayerId::One).placed_count(), 0);

    session.place("A1 A5").unwrap();
    assert_eq!(session.place("B2 B5"), Err(GameError::TooClose));
    assert_eq!(session.required_ship(), Some(SHIPS[1]));
}

#[test]
fn test_turns_alternate() {
    let mut session = duel_in_combat();
    let report = session.fire("J10").unwrap();
    assert_eq!(report.shooter, PlayerId::One);
    assert_eq!(report.outcome, ShotOutcome::Miss);
    assert_eq!(report.phase, Phase::Combat(PlayerId::Two));

    let report = session.fire("A1").unwrap();
    assert_eq!(report.shooter, PlayerId::Two);
    assert_eq!(report.outcome, ShotOutcome::Hit);
    assert_eq!(session.phase(), Phase::Combat(PlayerId::One));
}

#[test]
fn test_repeat_shot_keeps_turn() {
    let mut session = duel_in_combat();
    session.fire("A1").unwrap();
    session.fire("B1").unwrap();
    assert_eq!(session.fire("A1"), Err(GameError::AlreadyShot));
    assert_eq!(session.phase(), Phase::Combat(PlayerId::One));
    assert_eq!(session.fire("K1"), Err(GameError::InvalidCoordinate));
    assert_eq!(session.fire("A11"), Err(GameError::InvalidCoordinate));
    assert_eq!(session.phase(), Phase::Combat(PlayerId::One));
}

#[test]
fn test_shots_only_touch_the_defender() {
    let mut session = duel_in_combat();
    let own_before = session.board(PlayerId::One).clone();
    let target_before = session.board(PlayerId::Two).clone();

    session.fire("A1").unwrap();
    assert_eq!(session.board(PlayerId::One), &own_before);
    assert_ne!(session.board(PlayerId::Two), &target_before);
    assert_eq!(session.board(PlayerId::Two).fleet_remaining(), NUM_SHIPS);
    assert_eq!(session.target_of(PlayerId::One), PlayerId::Two);
    assert_eq!(session.target_of(PlayerId::Two), PlayerId::One);
}

#[test]
fn test_game_over_on_last_ship() {
    let mut session = GameSession::new(Mode::Duel);
    let mut rng = SmallRng::seed_from_u64(7);
    assert_eq!(session.auto_place(&mut rng), Ok(PlayerId::One));
    assert_eq!(session.auto_place(&mut rng), Ok(PlayerId::Two));
    assert_eq!(session.phase(), Phase::Combat(PlayerId::One));

    // both players sweep the board in row-major order
    let mut sweeps = [Coordinate::all(), Coordinate::all()];
    let winner = loop {
        let Phase::Combat(shooter) = session.phase() else {
            panic!("game ended without a winning shot");
        };
        let defender = session.target_of(shooter);
        assert!(!session.board(defender).is_fleet_destroyed());
        let slot = if shooter == PlayerId::One { 0 } else { 1 };
        let target = sweeps[slot].next().expect("sweep exhausted before game over");
        let report = session.fire_at(target).unwrap();
        if let Phase::GameOver(winner) = report.phase {
            assert!(matches!(report.outcome, ShotOutcome::Sunk { .. }));
            assert!(session.board(defender).is_fleet_destroyed());
            assert_eq!(winner, shooter);
            break winner;
        }
    };

    assert_eq!(session.winner(), Some(winner));
    assert!(!session.board(winner).is_fleet_destroyed());
    assert_eq!(session.fire("J10"), Err(GameError::GameOver));
    assert_eq!(session.phase(), Phase::GameOver(winner));
}

#[test]
fn test_solo_game() {
    let mut session = GameSession::new(Mode::Solo);
    place_standard(&mut session);
    assert_eq!(session.phase(), Phase::Combat(PlayerId::One));
    assert_eq!(session.target_of(PlayerId::One), PlayerId::One);

    let report = session.fire("J10").unwrap();
    assert_eq!(report.outcome, ShotOutcome::Miss);
    assert_eq!(report.phase, Phase::Combat(PlayerId::One));

    let targets: Vec<Coordinate> = session
        .board(PlayerId::One)
        .ships()
        .flat_map(|(_, ship)| ship.cells().collect::<Vec<_>>())
        .collect();
    let (last, rest) = targets.split_last().unwrap();
    for &target in rest {
        let report = session.fire_at(target).unwrap();
        assert_eq!(report.phase, Phase::Combat(PlayerId::One));
    }
    let report = session.fire_at(*last).unwrap();
    let ShotOutcome::Sunk { class, ship } = report.outcome else {
        panic!("expected a sunk ship, got {:?}", report.outcome);
    };
    assert_eq!(class, SHIPS[4]);
    assert_eq!(ship.begin(), parse_coordinate("I1").unwrap());
    assert_eq!(ship.end(), *last);
    assert_eq!(ship.length(), SHIPS[4].length());
    assert_eq!(session.winner(), Some(PlayerId::One));
}

#[test]
fn test_serde_phase() {
    let json = serde_json::to_string(&Phase::Combat(PlayerId::Two)).unwrap();
    let back: Phase = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Phase::Combat(PlayerId::Two));
}
