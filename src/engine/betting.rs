use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Chips, PlayerId, PlayerStatus, Seat};
use crate::engine::pot::PotAccountant;

/// Учёт ставок на текущей улице.
///
/// `level` – текущий уровень ставки, до которого надо дотянуться, и он же
/// служит минимальным размером рейза (см. `validation`). Пересчитывается как
/// `max(level, добавка - уже_поставленное_игроком)`: в обычной последовательности
/// с одним рейзом это ровно уровень, который надо уравнять, но после ре-рейза
/// он может отставать от максимальной ставки. В начале каждой улицы – big blind.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BetLedger {
    /// Сколько каждый игрок внёс на ЭТОЙ улице. В пределах улицы не уменьшается.
    bets: BTreeMap<PlayerId, Chips>,
    level: Chips,
    big_blind: Chips,
}

impl BetLedger {
    pub fn new<I>(players: I, big_blind: Chips) -> Self
    where
        I: IntoIterator<Item = PlayerId>,
    {
        Self {
            bets: players.into_iter().map(|p| (p, Chips::ZERO)).collect(),
            level: big_blind,
            big_blind,
        }
    }

    pub fn bets(&self) -> &BTreeMap<PlayerId, Chips> {
        &self.bets
    }

    pub fn contribution(&self, player_id: PlayerId) -> Chips {
        self.bets.get(&player_id).copied().unwrap_or(Chips::ZERO)
    }

    pub fn level(&self) -> Chips {
        self.level
    }

    pub fn big_blind(&self) -> Chips {
        self.big_blind
    }

    /// Сумма всех ставок на улице.
    pub fn street_total(&self) -> Chips {
        self.bets.values().sum()
    }

    pub fn max_contribution(&self) -> Chips {
        self.bets.values().copied().max().unwrap_or(Chips::ZERO)
    }

    /// Сколько игроку нужно добавить до текущего уровня (не меньше нуля).
    pub fn to_call(&self, player_id: PlayerId) -> Chips {
        self.level.saturating_sub(self.contribution(player_id))
    }

    /// Записать добавку игрока и пересчитать уровень.
    pub fn record(&mut self, player_id: PlayerId, amount: Chips) -> Chips {
        let prior = self.contribution(player_id);
        self.level = self.level.max(amount.saturating_sub(prior));

        let total = prior + amount;
        self.bets.insert(player_id, total);
        total
    }

    /// Новая улица: все ставки в ноль, уровень снова big blind.
    pub fn reset_street(&mut self) {
        for amount in self.bets.values_mut() {
            *amount = Chips::ZERO;
        }
        self.level = self.big_blind;
    }
}

/// Применить ставку: списать со стека, записать в леджер и в банк.
///
/// Вызывается только после проверки `validate_bet` (или для блайндов).
/// Больше стека списать нельзя – лишнее просто отрезается.
/// Если стек обнулился, игрок переходит в олл-ин.
pub fn apply_bet(seat: &mut Seat, ledger: &mut BetLedger, pot: &mut PotAccountant, amount: Chips) -> Chips {
    let paid = amount.min(seat.stack);

    seat.stack -= paid;
    ledger.record(seat.player_id, paid);
    pot.add(seat.player_id, paid);

    if seat.stack.is_zero() {
        seat.status = PlayerStatus::AllIn;
    }

    paid
}
