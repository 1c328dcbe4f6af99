//! Шоудаун: собрать руки живых игроков, отдать их оценщику и разложить банки.

use std::collections::BTreeMap;

use crate::domain::{Card, PlayerId, PotDistribution, Table};
use crate::engine::collaborators::{ShowdownHand, WinnerGroup};
use crate::engine::pot::Pot;

/// Руки всех, кто не сфолдил, в порядке мест.
pub fn live_hands(table: &Table, hole_cards: &BTreeMap<PlayerId, [Card; 2]>) -> Vec<ShowdownHand> {
    table
        .seats()
        .iter()
        .filter(|s| s.is_in_hand())
        .filter_map(|s| {
            hole_cards.get(&s.player_id).map(|cards| ShowdownHand {
                player_id: s.player_id,
                hole_cards: *cards,
            })
        })
        .collect()
}

/// Одно событие выплаты на каждый банк.
///
/// Банк получает лучшая группа оценщика, в которой есть хоть один претендент
/// на этот банк; из группы берутся только претенденты.
pub fn distribute(pots: &[Pot], groups: &[WinnerGroup]) -> Vec<PotDistribution> {
    pots.iter()
        .map(|pot| {
            let winning = groups.iter().find_map(|group| {
                let hands: Vec<_> = group
                    .hands
                    .iter()
                    .filter(|h| pot.eligible.contains(&h.player_id))
                    .collect();
                (!hands.is_empty()).then_some(hands)
            });

            let (winners, winning_cards) = match winning {
                Some(hands) => {
                    let winners = hands.iter().map(|h| h.player_id).collect();
                    let mut cards: Vec<Card> =
                        hands.iter().flat_map(|h| h.cards.iter().copied()).collect();
                    cards.sort();
                    cards.dedup();
                    (winners, cards)
                }
                None => (Vec::new(), Vec::new()),
            };

            PotDistribution {
                pot_id: pot.id,
                amount: pot.amount,
                winners,
                winning_cards,
            }
        })
        .collect()
}

/// Все, кроме одного, сфолдили: все банки ему, карты не показываются.
pub fn distribute_uncontested(pots: &[Pot], winner: PlayerId) -> Vec<PotDistribution> {
    pots.iter()
        .map(|pot| PotDistribution {
            pot_id: pot.id,
            amount: pot.amount,
            winners: vec![winner],
            winning_cards: Vec::new(),
        })
        .collect()
}
