use std::time::{Duration, Instant};

use holdem_hand_engine::domain::{Card, Chips, PotDistribution};
use holdem_hand_engine::engine::{CardSource, Pacer, PayoutSink, RandomSource};
use holdem_hand_engine::infra::{
    DeterministicRng, FixedCards, LoggingPayoutSink, NoPacing, PayoutLog, ShuffledDeck, SleepPacer,
    SystemRng,
};

#[test]
fn shuffled_deck_is_a_full_deck() {
    let mut source = ShuffledDeck::new(SystemRng);
    let mut cards = source.draw_sequence();
    assert_eq!(cards.len(), 52);

    cards.sort();
    cards.dedup();
    assert_eq!(cards.len(), 52, "карты не повторяются");
}

#[test]
fn deterministic_rng_replays_the_same_deck() {
    let a = ShuffledDeck::new(DeterministicRng::from_u64(7)).draw_sequence();
    let b = ShuffledDeck::new(DeterministicRng::from_u64(7)).draw_sequence();
    let c = ShuffledDeck::new(DeterministicRng::from_u64(8)).draw_sequence();

    assert_eq!(a, b, "одинаковый seed – одинаковая колода");
    assert_ne!(a, c, "другой seed – другая колода");
}

#[test]
fn deterministic_rng_shuffles_any_slice() {
    let mut rng = DeterministicRng::from_u64(1);
    let mut v: Vec<u32> = (0..20).collect();
    rng.shuffle(&mut v);

    let mut sorted = v.clone();
    sorted.sort();
    assert_eq!(sorted, (0..20).collect::<Vec<_>>(), "перестановка, а не потеря элементов");
}

#[test]
fn fixed_cards_repeat_the_given_sequence() {
    let mut source = FixedCards::from_line("Ah Kd 7c").expect("карты");
    let expected: Vec<Card> = ["Ah", "Kd", "7c"]
        .iter()
        .map(|s| s.parse().expect("карта"))
        .collect();

    assert_eq!(source.draw_sequence(), expected);
    assert_eq!(source.draw_sequence(), expected);
    assert!(FixedCards::from_line("Ah Xx").is_err());
}

#[test]
fn no_pacing_and_zero_sleep_return_immediately() {
    let started = Instant::now();
    NoPacing.pause(Duration::from_secs(60));
    SleepPacer.pause(Duration::ZERO);
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[test]
fn payout_log_is_shared_between_clones() {
    let log = PayoutLog::new();
    let mut sink = log.clone();

    let distribution = PotDistribution {
        pot_id: 0,
        amount: Chips::new(40),
        winners: vec![1],
        winning_cards: Vec::new(),
    };
    sink.pay(distribution.clone());
    LoggingPayoutSink.pay(distribution.clone());

    assert_eq!(log.entries(), vec![distribution]);
}
