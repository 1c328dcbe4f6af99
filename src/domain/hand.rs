use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::{PlayerId, PotId};

/// Улица раздачи.
///
/// Строго монотонна: в пределах одной раздачи улица никогда не повторяется.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Street {
    /// Улица по количеству открытых общих карт (0, 3, 4, 5).
    pub fn from_board_len(len: usize) -> Street {
        match len {
            0..=2 => Street::Preflop,
            3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::River,
        }
    }

    /// Следующая улица. После River идёт Showdown, после Showdown ничего.
    pub fn next(self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => Some(Street::Showdown),
            Street::Showdown => None,
        }
    }

    /// Сколько карт открывается при переходе НА эту улицу.
    pub fn cards_to_reveal(self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
            Street::Preflop | Street::Showdown => 0,
        }
    }
}

/// Ранг руки. Чем больше число, тем сильнее рука; заполняет eval.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank(pub u32);

/// Событие выплаты одного банка.
///
/// Движок сам фишки по стекам не раскладывает: событие уходит внешнему
/// получателю (`PayoutSink`), который и решает, как платить.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PotDistribution {
    pub pot_id: PotId,
    pub amount: Chips,
    /// Победители банка (несколько при сплите).
    pub winners: Vec<PlayerId>,
    /// Карты, составившие выигравшую комбинацию: без повторов, отсортированы.
    /// Пусто, если банк забран без вскрытия.
    pub winning_cards: Vec<Card>,
}

/// Краткое описание завершённой раздачи. Удобно для истории/реплеера.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandSummary {
    /// До какой улицы дошла раздача (`Showdown`, если было вскрытие).
    pub street_reached: Street,
    pub board: Vec<Card>,
    pub total_pot: Chips,
    /// Раздача закончилась без вскрытия (все, кроме одного, сфолдили).
    pub uncontested: bool,
    pub distributions: Vec<PotDistribution>,
}
