use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::{Chips, PlayerId, PotId};
use crate::engine::side_pots::compute_side_pots;

/// Банк: сумма и игроки, которые могут его выиграть.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    pub id: PotId,
    pub amount: Chips,
    pub eligible: Vec<PlayerId>,
}

impl Pot {
    pub fn new(id: PotId, eligible: Vec<PlayerId>) -> Self {
        Self {
            id,
            amount: Chips::ZERO,
            eligible,
        }
    }
}

/// Учёт банка за всю раздачу.
///
/// Пока идёт торговля, есть ровно один живой банк, куда падает каждая фишка.
/// На шоудауне (в режиме сайд-потов) он раскладывается по уровням вкладов.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PotAccountant {
    pots: Vec<Pot>,
    /// Сколько всего внёс каждый игрок (все улицы).
    contributions: BTreeMap<PlayerId, Chips>,
}

impl PotAccountant {
    pub const MAIN_POT: PotId = 0;

    pub fn new<I>(players: I) -> Self
    where
        I: IntoIterator<Item = PlayerId>,
    {
        let players: Vec<PlayerId> = players.into_iter().collect();
        Self {
            contributions: players.iter().map(|p| (*p, Chips::ZERO)).collect(),
            pots: vec![Pot::new(Self::MAIN_POT, players)],
        }
    }

    pub fn add(&mut self, player_id: PlayerId, amount: Chips) {
        if amount.is_zero() {
            return;
        }
        *self.contributions.entry(player_id).or_insert(Chips::ZERO) += amount;
        if let Some(main) = self.pots.first_mut() {
            main.amount += amount;
        }
    }

    /// Сфолдивший игрок больше ни на что не претендует.
    pub fn mark_folded(&mut self, player_id: PlayerId) {
        for pot in self.pots.iter_mut() {
            pot.eligible.retain(|p| *p != player_id);
        }
    }

    pub fn pots(&self) -> &[Pot] {
        &self.pots
    }

    pub fn total(&self) -> Chips {
        self.pots.iter().map(|p| p.amount).sum()
    }

    pub fn contributions(&self) -> &BTreeMap<PlayerId, Chips> {
        &self.contributions
    }

    pub fn contributed(&self, player_id: PlayerId) -> Chips {
        self.contributions.get(&player_id).copied().unwrap_or(Chips::ZERO)
    }

    /// Итоговые банки перед выплатой.
    ///
    /// Без `split_side_pots` остаётся один общий банк, как было во время торговли.
    pub fn settle(&mut self, split_side_pots: bool) -> &[Pot] {
        if split_side_pots {
            let live: BTreeSet<PlayerId> = self
                .pots
                .iter()
                .flat_map(|p| p.eligible.iter().copied())
                .collect();
            let total = self.total();

            let pots = compute_side_pots(&self.contributions, &live);
            debug_assert_eq!(pots.iter().map(|p| p.amount).sum::<Chips>(), total);
            self.pots = pots;
        }
        &self.pots
    }
}
