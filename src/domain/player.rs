use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Статус игрока на всю раздачу.
///
/// Переходы только в одну сторону: Active -> Folded или Active -> AllIn.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Игрок в раздаче и может ходить.
    Active,
    /// Игрок сфолдил и больше не участвует в банке.
    Folded,
    /// Игрок в олл-ине – не может больше делать ставки.
    AllIn,
}

/// Место за столом: игрок и его оставшийся стек.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seat {
    pub player_id: PlayerId,
    /// Текущий стек. Меняется только при применении ставки.
    pub stack: Chips,
    pub status: PlayerStatus,
}

impl Seat {
    pub fn new(player_id: PlayerId, stack: Chips) -> Self {
        Self {
            player_id,
            stack,
            status: PlayerStatus::Active,
        }
    }

    /// Не сфолдил (в том числе олл-ин).
    pub fn is_in_hand(&self) -> bool {
        matches!(self.status, PlayerStatus::Active | PlayerStatus::AllIn)
    }

    /// Может сделать ход: не сфолдил и не в олл-ине.
    pub fn can_act(&self) -> bool {
        matches!(self.status, PlayerStatus::Active)
    }

    pub fn is_all_in(&self) -> bool {
        matches!(self.status, PlayerStatus::AllIn)
    }

    pub fn is_folded(&self) -> bool {
        matches!(self.status, PlayerStatus::Folded)
    }
}
