use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Chips, PlayerId, Table};
use crate::engine::betting::BetLedger;

/// Почему ставка не принята.
#[derive(Clone, Copy, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum BetRejection {
    #[error("игрок {0} не найден за столом")]
    UnknownPlayer(PlayerId),

    #[error("у игрока не осталось фишек")]
    EmptyStack,

    #[error("ставка {amount} больше стека {stack}")]
    ExceedsStack { amount: Chips, stack: Chips },

    #[error("check невозможен: на улице уже есть ставки, до колла {to_call}")]
    CannotCheck { to_call: Chips },

    #[error("ставка {amount} меньше колла {to_call}")]
    BelowCall { amount: Chips, to_call: Chips },

    #[error("ставка {amount} между коллом {to_call} и минимальным рейзом {min_raise}")]
    RaiseTooSmall {
        amount: Chips,
        to_call: Chips,
        min_raise: Chips,
    },
}

/// Проверка, может ли игрок добавить `amount` фишек при текущем состоянии улицы.
///
/// Правила по порядку:
/// 1. весь стек – всегда можно (олл-ин);
/// 2. больше стека – нельзя;
/// 3. меньше стека: если олл-инов нет, или после олл-ина уже был рейз выше
///    big blind (олл-ин не задаёт потолок) – ровно колл, либо минимум двойной колл,
///    либо check, пока на улице никто ничего не поставил;
///    если потолок задаёт олл-ин – подходит любая сумма.
///
/// Функция чистая: ничего не меняет.
pub fn validate_bet(
    table: &Table,
    ledger: &BetLedger,
    player_id: PlayerId,
    amount: Chips,
) -> Result<(), BetRejection> {
    let seat = table
        .seat(player_id)
        .ok_or(BetRejection::UnknownPlayer(player_id))?;

    let stack = seat.stack;
    if stack.is_zero() {
        return Err(BetRejection::EmptyStack);
    }

    if amount == stack {
        return Ok(());
    }
    if amount > stack {
        return Err(BetRejection::ExceedsStack { amount, stack });
    }

    if table.any_all_in() && !raised_over_all_in(table, ledger) {
        return Ok(());
    }

    let to_call = ledger.to_call(player_id);
    let opening_check = amount.is_zero() && ledger.street_total().is_zero();

    if amount == to_call || amount >= to_call * 2 || opening_check {
        return Ok(());
    }

    if amount.is_zero() {
        Err(BetRejection::CannotCheck { to_call })
    } else if amount < to_call {
        Err(BetRejection::BelowCall { amount, to_call })
    } else {
        Err(BetRejection::RaiseTooSmall {
            amount,
            to_call,
            min_raise: to_call * 2,
        })
    }
}

/// Все олл-ины на улице строго ниже максимальной ставки, и эта ставка выше big blind:
/// значит, после олл-ина кто-то уже повышал, и обычные правила размера снова действуют.
fn raised_over_all_in(table: &Table, ledger: &BetLedger) -> bool {
    let max = ledger.max_contribution();

    let all_in_below_max = table
        .seats()
        .iter()
        .filter(|s| s.is_all_in())
        .all(|s| ledger.contribution(s.player_id) < max);

    all_in_below_max && max > ledger.big_blind()
}
