//! Тесты проверки ставок и уровня ставки.
//!
//! Проверяем:
//! - олл-ин всегда допустим, больше стека – никогда;
//! - колл / минимум двойной колл / чек на пустой улице;
//! - олл-ин без последующего рейза снимает ограничения на размер;
//! - после рейза поверх олл-ина обычные правила возвращаются;
//! - отклонённая ставка ничего не меняет.

use holdem_hand_engine::domain::{Chips, GameConfig, PlayerId, PlayerStatus, Seat, Street};
use holdem_hand_engine::engine::{
    Action, BetRejection, Collaborators, HandEngine, HandEventKind, HandStatus,
};
use holdem_hand_engine::infra::{FixedCards, NoPacing};

const SEQUENCE: &str = "Ah Ad Kc Kd Qh Qs Jc Jd 2s 7h 9c 4d 3c";

fn engine_with_stacks(stacks: &[u64]) -> HandEngine {
    let seats: Vec<Seat> = stacks
        .iter()
        .enumerate()
        .map(|(i, s)| Seat::new(i as PlayerId + 1, Chips::new(*s)))
        .collect();
    let collaborators = Collaborators::default()
        .with_card_source(FixedCards::from_line(SEQUENCE).expect("карты"))
        .with_pacer(NoPacing);

    let mut engine = HandEngine::new(
        seats,
        GameConfig::new(Chips::new(10), Chips::new(20)),
        collaborators,
    )
    .expect("валидная раздача");
    engine.start().expect("старт");
    engine
}

#[test]
fn all_in_is_always_valid_and_more_than_stack_never() {
    let engine = engine_with_stacks(&[1_000, 1_000, 1_000]);

    assert!(engine.is_valid_bet(1, Chips::new(1_000)), "весь стек – олл-ин");
    assert!(!engine.is_valid_bet(1, Chips::new(1_001)));
    assert_eq!(
        engine.validate_bet(1, Chips::new(1_001)),
        Err(BetRejection::ExceedsStack {
            amount: Chips::new(1_001),
            stack: Chips::new(1_000),
        })
    );
}

#[test]
fn call_or_at_least_double_call() {
    let engine = engine_with_stacks(&[1_000, 1_000, 1_000]);

    // Дилер должен 20 до уровня.
    assert!(engine.is_valid_bet(1, Chips::new(20)), "колл");
    assert!(engine.is_valid_bet(1, Chips::new(40)), "ровно двойной колл");
    assert!(engine.is_valid_bet(1, Chips::new(300)), "большой рейз");

    assert_eq!(
        engine.validate_bet(1, Chips::new(30)),
        Err(BetRejection::RaiseTooSmall {
            amount: Chips::new(30),
            to_call: Chips::new(20),
            min_raise: Chips::new(40),
        })
    );
    assert_eq!(
        engine.validate_bet(1, Chips::new(15)),
        Err(BetRejection::BelowCall {
            amount: Chips::new(15),
            to_call: Chips::new(20),
        })
    );
    assert_eq!(
        engine.validate_bet(1, Chips::ZERO),
        Err(BetRejection::CannotCheck {
            to_call: Chips::new(20),
        })
    );
}

#[test]
fn validation_is_pure_and_repeatable() {
    let engine = engine_with_stacks(&[1_000, 1_000, 1_000]);
    let before = engine.snapshot();

    for amount in [0u64, 15, 20, 30, 40, 1_000, 1_001] {
        let first = engine.validate_bet(1, Chips::new(amount));
        let second = engine.validate_bet(1, Chips::new(amount));
        assert_eq!(first, second, "сумма {}", amount);
    }
    assert_eq!(engine.snapshot(), before, "проверка ничего не меняет");
}

#[test]
fn unknown_player_is_not_an_error_just_invalid() {
    let engine = engine_with_stacks(&[1_000, 1_000]);
    assert_eq!(
        engine.validate_bet(99, Chips::new(20)),
        Err(BetRejection::UnknownPlayer(99))
    );
    assert!(engine.seat(99).is_none());
}

#[test]
fn heads_up_raise_sets_conflated_level() {
    let mut engine = engine_with_stacks(&[50_000, 50_000]);

    // Дилер уже поставил SB = 10 и добавляет 25 000.
    let status = engine.act(1, Action::bet(25_000)).expect("рейз");
    assert_eq!(status, HandStatus::Ongoing);

    assert_eq!(engine.bet_of(1), Chips::new(25_010));
    assert_eq!(engine.current_bet_level(), Chips::new(24_990));
    assert_eq!(engine.current_actor(), Some(2));
}

#[test]
fn short_all_in_lets_next_player_add_any_amount() {
    // Стеки 15 / 1000 / 1000, блайнды 10/20.
    let mut engine = engine_with_stacks(&[15, 1_000, 1_000]);

    let status = engine.act(1, Action::bet(15)).expect("олл-ин");
    assert_eq!(status, HandStatus::Ongoing);
    assert_eq!(engine.seat(1).map(|s| s.status), Some(PlayerStatus::AllIn));

    // Олл-ин задаёт потолок: любая сумма меньше стека подходит.
    assert!(engine.is_valid_bet(2, Chips::new(5)));
    assert!(engine.is_valid_bet(2, Chips::new(13)));

    engine.act(2, Action::bet(5)).expect("доплата SB");

    assert_eq!(engine.bet_of(1), Chips::new(15));
    assert_eq!(engine.bet_of(2), Chips::new(15));
    assert_eq!(engine.bet_of(3), Chips::new(20));
    assert_eq!(engine.current_actor(), Some(3), "BB ещё не ходил");
    assert_eq!(engine.street(), Street::Preflop);
}

#[test]
fn raise_over_all_in_restores_sizing_rules() {
    let mut engine = engine_with_stacks(&[15, 1_000, 1_000]);

    engine.act(1, Action::bet(15)).expect("олл-ин");
    // SB добавляет 50: всего 60, уровень max(20, 50 - 10) = 40.
    engine.act(2, Action::bet(50)).expect("рейз поверх олл-ина");
    assert_eq!(engine.current_bet_level(), Chips::new(40));

    // BB должен 40 - 20 = 20: снова либо колл, либо минимум 40.
    assert!(engine.is_valid_bet(3, Chips::new(20)));
    assert!(engine.is_valid_bet(3, Chips::new(40)));
    assert_eq!(
        engine.validate_bet(3, Chips::new(25)),
        Err(BetRejection::RaiseTooSmall {
            amount: Chips::new(25),
            to_call: Chips::new(20),
            min_raise: Chips::new(40),
        })
    );
}

#[test]
fn rejected_bet_changes_nothing_and_keeps_the_turn() {
    let mut engine = engine_with_stacks(&[1_000, 1_000, 1_000]);
    let before = engine.snapshot();

    let status = engine.act(1, Action::bet(30)).expect("вызов проходит");
    assert!(matches!(
        status,
        HandStatus::Rejected(BetRejection::RaiseTooSmall { .. })
    ));

    assert_eq!(engine.snapshot(), before, "состояние не изменилось");
    assert_eq!(engine.current_actor(), Some(1), "ход остался у того же игрока");

    let last = engine.history().iter().last().expect("есть события");
    assert!(matches!(last, HandEventKind::BetRejected { player_id: 1, .. }));

    // Нормальная ставка после отказа проходит.
    let status = engine.act(1, Action::bet(20)).expect("колл");
    assert_eq!(status, HandStatus::Ongoing);
    assert_eq!(engine.current_actor(), Some(2));
}

#[test]
fn opening_check_is_valid_postflop() {
    let mut engine = engine_with_stacks(&[1_000, 1_000, 1_000]);

    engine.act(1, Action::bet(20)).expect("колл");
    engine.act(2, Action::bet(10)).expect("колл SB");
    engine.act(3, Action::check()).expect("чек BB");
    assert_eq!(engine.street(), Street::Flop);

    // На флопе ставок нет: чек допустим, хотя уровень снова равен BB.
    assert_eq!(engine.current_bet_level(), Chips::new(20));
    assert_eq!(engine.current_actor(), Some(2));
    assert!(engine.is_valid_bet(2, Chips::ZERO));
    assert!(engine.is_valid_bet(2, Chips::new(20)));
    assert!(!engine.is_valid_bet(2, Chips::new(30)));

    // После ставки чек уже нельзя.
    engine.act(2, Action::bet(20)).expect("бет");
    assert!(!engine.is_valid_bet(3, Chips::ZERO));
}
