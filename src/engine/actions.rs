use serde::{Deserialize, Serialize};

use crate::domain::Chips;

/// Действие игрока.
///
/// Сумма в `Bet` – это ДОБАВКА к уже поставленному на этой улице,
/// а не итоговая ставка. Check = `Bet(0)`, call = `Bet(разница до уровня)`,
/// raise = большая добавка, all-in = добавка, равная всему стеку.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Action {
    Fold,
    Bet(Chips),
}

impl Action {
    pub fn check() -> Self {
        Action::Bet(Chips::ZERO)
    }

    pub fn bet(amount: u64) -> Self {
        Action::Bet(Chips(amount))
    }
}
