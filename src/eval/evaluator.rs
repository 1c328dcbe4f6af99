use std::collections::BTreeMap;

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::hand::HandRank;
use crate::engine::{EvaluatorError, HandEvaluator, RankedHand, ShowdownHand, WinnerGroup};

use super::hand_rank::{describe_hand, HandCategory};
use super::rank_mask::{mask_of, straight_high};

/// Лучшая пятёрка и её ранг.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BestFive {
    pub rank: HandRank,
    pub cards: [Card; 5],
}

/// Вычислить лучшую 5-карточную руку из hole + board.
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> Result<HandRank, EvaluatorError> {
    Ok(evaluate_best_five(hole, board)?.rank)
}

/// То же, но вместе с пятью картами, которые дают ранг.
///
/// Всего карт должно быть от 5 до 7.
pub fn evaluate_best_five(hole: &[Card], board: &[Card]) -> Result<BestFive, EvaluatorError> {
    let all: Vec<Card> = hole.iter().chain(board.iter()).copied().collect();
    if !(5..=7).contains(&all.len()) {
        return Err(EvaluatorError(format!(
            "для оценки нужно от 5 до 7 карт, получено {}",
            all.len()
        )));
    }

    let mut best: Option<BestFive> = None;
    for five in five_card_combinations(&all) {
        let rank = rank_five(&five);
        if best.map_or(true, |b| rank > b.rank) {
            best = Some(BestFive { rank, cards: five });
        }
    }

    best.map(|mut b| {
        b.cards.sort_by(|x, y| y.cmp(x));
        b
    })
    .ok_or_else(|| EvaluatorError("не найдено ни одной пятёрки".to_string()))
}

/// Все сочетания по 5 из `cards` (C(7,5) = 21 максимум).
fn five_card_combinations(cards: &[Card]) -> Vec<[Card; 5]> {
    let n = cards.len();
    let mut out = Vec::new();
    if n < 5 {
        return out;
    }
    let mut idx = [0usize, 1, 2, 3, 4];
    loop {
        out.push(idx.map(|i| cards[i]));

        // Следующее сочетание в лексикографическом порядке.
        let mut pos = 5;
        while pos > 0 {
            pos -= 1;
            if idx[pos] < n - 5 + pos {
                idx[pos] += 1;
                for k in pos + 1..5 {
                    idx[k] = idx[k - 1] + 1;
                }
                break;
            }
            if pos == 0 {
                return out;
            }
        }
    }
}

/// Ранг строго пяти карт.
fn rank_five(cards: &[Card; 5]) -> HandRank {
    let first_suit: Suit = cards[0].suit;
    let flush = cards.iter().all(|c| c.suit == first_suit);
    let straight = straight_high(mask_of(cards.iter().map(|c| c.rank)));

    // Группы одинаковых рангов: сначала по размеру, затем по рангу.
    let mut counts: BTreeMap<Rank, u8> = BTreeMap::new();
    for c in cards {
        *counts.entry(c.rank).or_insert(0) += 1;
    }
    let mut groups: Vec<(u8, Rank)> = counts.into_iter().map(|(r, n)| (n, r)).collect();
    groups.sort_by(|a, b| b.cmp(a));

    let shape: Vec<u8> = groups.iter().map(|(n, _)| *n).collect();
    let by_group: Vec<Rank> = groups.iter().map(|(_, r)| *r).collect();

    let category = match (flush, straight, shape.as_slice()) {
        (true, Some(_), _) => HandCategory::StraightFlush,
        (_, _, [4, 1]) => HandCategory::FourOfAKind,
        (_, _, [3, 2]) => HandCategory::FullHouse,
        (true, None, _) => HandCategory::Flush,
        (false, Some(_), _) => HandCategory::Straight,
        (_, _, [3, 1, 1]) => HandCategory::ThreeOfAKind,
        (_, _, [2, 2, 1]) => HandCategory::TwoPair,
        (_, _, [2, 1, 1, 1]) => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };

    match (category, straight) {
        (HandCategory::Straight | HandCategory::StraightFlush, Some(high)) => {
            HandRank::pack(category, &[high])
        }
        _ => HandRank::pack(category, &by_group),
    }
}

/// Оценщик по умолчанию: лучшая пятёрка из двух карманных и борда.
#[derive(Clone, Copy, Debug, Default)]
pub struct BestFiveEvaluator;

impl HandEvaluator for BestFiveEvaluator {
    fn evaluate(
        &self,
        hands: &[ShowdownHand],
        board: &[Card],
    ) -> Result<Vec<WinnerGroup>, EvaluatorError> {
        let mut ranked = Vec::with_capacity(hands.len());
        for hand in hands {
            let best = evaluate_best_five(&hand.hole_cards, board)?;
            ranked.push(RankedHand {
                player_id: hand.player_id,
                rank: best.rank,
                description: describe_hand(best.rank),
                cards: best.cards.to_vec(),
            });
        }

        // Сильнейшие вперёд, равные ранги – в одну группу.
        ranked.sort_by(|a, b| b.rank.cmp(&a.rank).then(a.player_id.cmp(&b.player_id)));

        let mut groups: Vec<WinnerGroup> = Vec::new();
        for hand in ranked {
            match groups.last_mut() {
                Some(group) if group.hands.first().map(|h| h.rank) == Some(hand.rank) => {
                    group.hands.push(hand)
                }
                _ => groups.push(WinnerGroup { hands: vec![hand] }),
            }
        }
        Ok(groups)
    }
}
