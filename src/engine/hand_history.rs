use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::{PotDistribution, Street};
use crate::domain::PlayerId;
use crate::engine::actions::Action;
use crate::engine::validation::BetRejection;

/// Тип события в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum HandEventKind {
    /// Новая раздача началась.
    HandStarted {
        dealer: PlayerId,
        players: usize,
    },

    /// Игрок получил карманные карты.
    HoleCardsDealt {
        player_id: PlayerId,
        cards: [Card; 2],
    },

    /// Блайнд (может быть меньше номинала, если стек короче).
    BlindPosted {
        player_id: PlayerId,
        amount: Chips,
    },

    /// Принятое действие игрока.
    PlayerActed {
        player_id: PlayerId,
        action: Action,
        new_stack: Chips,
        pot_after: Chips,
    },

    /// Ставка отклонена, ход остался у игрока.
    BetRejected {
        player_id: PlayerId,
        amount: Chips,
        reason: BetRejection,
    },

    /// Открыты общие карты, начинается новая улица.
    BoardDealt {
        street: Street,
        cards: Vec<Card>,
    },

    /// Шоудаун – открытие карт.
    ShowdownReveal {
        player_id: PlayerId,
        hole_cards: [Card; 2],
    },

    /// Выплата банка.
    PotDistributed(PotDistribution),

    /// Раздача завершена.
    HandFinished {
        street_reached: Street,
        total_pot: Chips,
    },
}

/// Событие с номером: номера идут подряд с нуля, в порядке возникновения.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandEvent {
    pub seq: usize,
    pub kind: HandEventKind,
}

/// Журнал раздачи. Только дописывается.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct HandHistory {
    log: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: HandEventKind) {
        let seq = self.log.len();
        self.log.push(HandEvent { seq, kind });
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn events(&self) -> &[HandEvent] {
        &self.log
    }

    /// Только типы событий, без номеров.
    pub fn iter(&self) -> impl Iterator<Item = &HandEventKind> {
        self.log.iter().map(|e| &e.kind)
    }
}
