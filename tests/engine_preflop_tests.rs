//! Интеграционные тесты старта раздачи.
//!
//! Проверяем:
//! - раздачу карманных карт по местам (карты 2i, 2i+1 последовательности);
//! - блайнды для 3+ игроков и для heads-up;
//! - кто ходит первым на префлопе;
//! - короткий стек, который не покрывает блайнд.

use holdem_hand_engine::domain::{parse_cards, Chips, GameConfig, PlayerId, PlayerStatus, Seat, Street};
use holdem_hand_engine::engine::{Action, Collaborators, EngineError, HandEngine, HandStatus};
use holdem_hand_engine::infra::{FixedCards, NoPacing};

/// Начальный стек для тестовых игроков.
const TEST_STACK: u64 = 1_000;

/// 13 разных карт: хватает на 4 игроков + борд.
const SEQUENCE: &str = "Ah Ad Kc Kd Qh Qs Jc Jd 2s 7h 9c 4d 3c";

fn config() -> GameConfig {
    GameConfig::new(Chips::new(10), Chips::new(20))
}

/// Сажаем игроков с PlayerId = 1..=n, одинаковый стек; seats[0] – дилер.
fn seats(n: usize) -> Vec<Seat> {
    (0..n)
        .map(|i| Seat::new(i as PlayerId + 1, Chips::new(TEST_STACK)))
        .collect()
}

fn collaborators() -> Collaborators {
    let cards = FixedCards::from_line(SEQUENCE).expect("тестовая последовательность карт");
    Collaborators::default()
        .with_card_source(cards)
        .with_pacer(NoPacing)
}

fn started(seats: Vec<Seat>) -> HandEngine {
    let mut engine = HandEngine::new(seats, config(), collaborators()).expect("валидная раздача");
    let status = engine.start().expect("старт раздачи");
    assert_eq!(status, HandStatus::Ongoing);
    engine
}

#[test]
fn three_handed_blinds_and_first_actor() {
    let engine = started(seats(3));

    assert_eq!(engine.street(), Street::Preflop);
    assert!(engine.board().is_empty(), "на префлопе борд пуст");

    // Дилер – место 0, SB – место 1, BB – место 2.
    assert_eq!(engine.bet_of(1), Chips::ZERO);
    assert_eq!(engine.bet_of(2), Chips::new(10));
    assert_eq!(engine.bet_of(3), Chips::new(20));
    assert_eq!(engine.seat(2).map(|s| s.stack), Some(Chips::new(990)));
    assert_eq!(engine.seat(3).map(|s| s.stack), Some(Chips::new(980)));

    assert_eq!(engine.total_pot(), Chips::new(30));
    assert_eq!(engine.current_bet_level(), Chips::new(20));

    // После BB первым ходит дилер (место после BB по кругу).
    assert_eq!(engine.current_actor(), Some(1));
}

#[test]
fn four_handed_first_actor_is_after_big_blind() {
    let engine = started(seats(4));

    assert_eq!(engine.bet_of(2), Chips::new(10));
    assert_eq!(engine.bet_of(3), Chips::new(20));
    assert_eq!(engine.current_actor(), Some(4), "первым ходит место 3 (UTG)");
}

#[test]
fn heads_up_dealer_posts_small_blind_and_acts_first() {
    let engine = started(seats(2));

    assert_eq!(engine.bet_of(1), Chips::new(10), "дилер в heads-up ставит SB");
    assert_eq!(engine.bet_of(2), Chips::new(20), "второй игрок ставит BB");
    assert_eq!(engine.current_actor(), Some(1), "дилер ходит первым на префлопе");
}

#[test]
fn hole_cards_follow_seat_order_of_the_sequence() {
    let engine = started(seats(4));
    let expected = parse_cards(SEQUENCE.split_whitespace()).expect("карты");

    for (i, seat) in engine.seats().iter().enumerate() {
        let hole = engine.hole_cards(seat.player_id).expect("карты розданы");
        assert_eq!(hole, [expected[2 * i], expected[2 * i + 1]], "место {}", i);
    }
    assert_eq!(engine.all_hole_cards().len(), 4);
}

#[test]
fn big_blind_keeps_option_after_limp() {
    let mut engine = started(seats(2));

    let status = engine.act(1, Action::bet(10)).expect("колл SB");
    assert_eq!(status, HandStatus::Ongoing);

    // Ставки выровнены, но BB ещё не ходил: улица не закрыта.
    assert_eq!(engine.street(), Street::Preflop);
    assert_eq!(engine.current_actor(), Some(2));
    assert!(engine.is_valid_bet(2, Chips::ZERO), "BB может чекнуть");
    assert!(engine.is_valid_bet(2, Chips::new(40)), "BB может повысить");
}

#[test]
fn short_stack_goes_all_in_on_small_blind() {
    let seats = vec![
        Seat::new(1, Chips::new(TEST_STACK)),
        Seat::new(2, Chips::new(5)),
        Seat::new(3, Chips::new(TEST_STACK)),
    ];
    let engine = started(seats);

    let sb = engine.seat(2).expect("место SB");
    assert_eq!(sb.status, PlayerStatus::AllIn);
    assert_eq!(sb.stack, Chips::ZERO);
    assert_eq!(engine.bet_of(2), Chips::new(5), "SB ставит сколько есть");
    assert_eq!(engine.total_pot(), Chips::new(25));
    assert_eq!(engine.current_actor(), Some(1));
}

#[test]
fn start_twice_is_an_error() {
    let mut engine = started(seats(3));
    let err = engine.start().unwrap_err();
    assert!(matches!(err, EngineError::HandAlreadyStarted));
}

#[test]
fn history_records_deal_and_blinds() {
    use holdem_hand_engine::engine::HandEventKind;

    let engine = started(seats(3));
    let kinds: Vec<&HandEventKind> = engine.history().iter().collect();

    assert!(matches!(kinds[0], HandEventKind::HandStarted { dealer: 1, players: 3 }));
    let dealt = kinds
        .iter()
        .filter(|k| matches!(k, HandEventKind::HoleCardsDealt { .. }))
        .count();
    assert_eq!(dealt, 3);

    let blinds: Vec<(PlayerId, Chips)> = kinds
        .iter()
        .filter_map(|k| match k {
            HandEventKind::BlindPosted { player_id, amount } => Some((*player_id, *amount)),
            _ => None,
        })
        .collect();
    assert_eq!(blinds, vec![(2, Chips::new(10)), (3, Chips::new(20))]);

    let events = engine.history().events();
    assert_eq!(events.len(), engine.history().len());
    assert!(events.iter().enumerate().all(|(i, e)| e.seq == i), "номера подряд");
}
