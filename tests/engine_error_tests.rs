//! Ошибки движка: неверная рассадка и конфиг, плохая колода,
//! ход вне очереди, вызовы до старта и после конца раздачи.

use holdem_hand_engine::domain::{Card, Chips, ConfigError, GameConfig, PlayerId, Seat, TableError};
use holdem_hand_engine::engine::{Action, Collaborators, EngineError, HandEngine};
use holdem_hand_engine::infra::{FixedCards, NoPacing};

fn seats(n: usize) -> Vec<Seat> {
    (0..n)
        .map(|i| Seat::new(i as PlayerId + 1, Chips::new(1_000)))
        .collect()
}

fn config() -> GameConfig {
    GameConfig::new(Chips::new(10), Chips::new(20))
}

fn with_cards(line: &str) -> Collaborators {
    Collaborators::default()
        .with_card_source(FixedCards::from_line(line).expect("карты"))
        .with_pacer(NoPacing)
}

const SEQUENCE: &str = "Ah Ad Kc Kd Qh Qs Jc Jd 2s 7h 9c 4d 3c";

#[test]
fn single_player_is_rejected() {
    let err = HandEngine::new(seats(1), config(), with_cards(SEQUENCE)).unwrap_err();
    assert!(matches!(
        err,
        EngineError::Table(TableError::NotEnoughPlayers(1))
    ));
}

#[test]
fn duplicate_player_is_rejected() {
    let seats = vec![
        Seat::new(7, Chips::new(1_000)),
        Seat::new(7, Chips::new(500)),
    ];
    let err = HandEngine::new(seats, config(), with_cards(SEQUENCE)).unwrap_err();
    assert!(matches!(err, EngineError::Table(TableError::DuplicatePlayer(7))));
}

#[test]
fn empty_stack_is_rejected() {
    let seats = vec![Seat::new(1, Chips::new(1_000)), Seat::new(2, Chips::ZERO)];
    let err = HandEngine::new(seats, config(), with_cards(SEQUENCE)).unwrap_err();
    assert!(matches!(err, EngineError::Table(TableError::EmptyStack(2))));
}

#[test]
fn bad_blinds_are_rejected() {
    let config = GameConfig::new(Chips::new(20), Chips::new(10));
    let err = HandEngine::new(seats(2), config, with_cards(SEQUENCE)).unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidConfig(ConfigError::BigBelowSmall { .. })
    ));

    let config = GameConfig::new(Chips::ZERO, Chips::new(10));
    let err = HandEngine::new(seats(2), config, with_cards(SEQUENCE)).unwrap_err();
    assert!(matches!(err, EngineError::InvalidConfig(ConfigError::ZeroSmallBlind)));
}

#[test]
fn act_before_start() {
    let mut engine = HandEngine::new(seats(2), config(), with_cards(SEQUENCE)).expect("раздача");
    let err = engine.act(1, Action::check()).unwrap_err();
    assert!(matches!(err, EngineError::HandNotStarted));
}

#[test]
fn acting_out_of_turn() {
    let mut engine = HandEngine::new(seats(3), config(), with_cards(SEQUENCE)).expect("раздача");
    engine.start().expect("старт");

    let before = engine.snapshot();
    let err = engine.act(2, Action::bet(10)).unwrap_err();
    assert!(matches!(
        err,
        EngineError::NotPlayersTurn {
            player: 2,
            expected: 1
        }
    ));
    assert_eq!(engine.snapshot(), before);

    // Незнакомый игрок тоже просто «не его ход».
    let err = engine.act(42, Action::Fold).unwrap_err();
    assert!(matches!(err, EngineError::NotPlayersTurn { player: 42, .. }));
}

#[test]
fn short_card_sequence() {
    let mut engine = HandEngine::new(seats(4), config(), with_cards("Ah Ad Kc Kd Qh Qs Jc Jd 2s 7h"))
        .expect("раздача");
    let err = engine.start().unwrap_err();
    assert!(matches!(
        err,
        EngineError::CardSequenceTooShort { needed: 13, got: 10 }
    ));
}

#[test]
fn duplicate_card_in_sequence() {
    let mut engine = HandEngine::new(seats(2), config(), with_cards("Ah Ad Kc Kd 2s 7h 9c Ah 3d"))
        .expect("раздача");
    let err = engine.start().unwrap_err();

    let ah: Card = "Ah".parse().expect("карта");
    assert!(matches!(err, EngineError::DuplicateCard(c) if c == ah));
}

#[test]
fn errors_have_readable_messages() {
    let err = EngineError::NotPlayersTurn {
        player: 2,
        expected: 1,
    };
    assert!(err.to_string().contains('2'));
    assert!(EngineError::TurnCursorExhausted.to_string().len() > 10);
}
