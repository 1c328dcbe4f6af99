//! Внешние соучастники раздачи.
//!
//! Движок их только вызывает: источник карт, пауза между шагами (пейсинг),
//! получатель выплат и оценщик рук. Все собраны в одну запись `Collaborators`,
//! у каждого есть реализация по умолчанию из `infra`/`eval`.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Card, HandRank, PlayerId, PotDistribution};
use crate::eval::BestFiveEvaluator;
use crate::infra::{LoggingPayoutSink, ShuffledDeck, SleepPacer, SystemRng};

/// Источник последовательности карт (перемешанная колода).
///
/// Карты расходуются спереди назад: сначала по 2 на каждое место в порядке мест,
/// затем 5 карт борда (3 + 1 + 1). Карты не должны повторяться.
pub trait CardSource {
    fn draw_sequence(&mut self) -> Vec<Card>;
}

/// Пауза между шагами раздачи. На состояние раздачи никак не влияет.
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

impl<F> Pacer for F
where
    F: FnMut(Duration),
{
    fn pause(&mut self, duration: Duration) {
        self(duration)
    }
}

/// Получатель событий выплаты: один вызов на каждый банк.
pub trait PayoutSink {
    fn pay(&mut self, distribution: PotDistribution);
}

impl<F> PayoutSink for F
where
    F: FnMut(PotDistribution),
{
    fn pay(&mut self, distribution: PotDistribution) {
        self(distribution)
    }
}

/// Рука живого игрока, отправляемая на оценку.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowdownHand {
    pub player_id: PlayerId,
    pub hole_cards: [Card; 2],
}

/// Оценённая рука: ранг, человеческое описание и пять карт, которые его дают.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankedHand {
    pub player_id: PlayerId,
    pub rank: HandRank,
    pub description: String,
    pub cards: Vec<Card>,
}

/// Группа рук одинаковой силы. Больше одной руки – ничья.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WinnerGroup {
    pub hands: Vec<RankedHand>,
}

impl WinnerGroup {
    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.hands.iter().map(|h| h.player_id)
    }
}

/// Ошибка оценщика. Для раздачи она фатальна.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct EvaluatorError(pub String);

/// Оценщик рук: возвращает группы от сильнейшей к слабейшей.
pub trait HandEvaluator {
    fn evaluate(
        &self,
        hands: &[ShowdownHand],
        board: &[Card],
    ) -> Result<Vec<WinnerGroup>, EvaluatorError>;
}

/// Все внешние соучастники одной раздачи.
pub struct Collaborators {
    pub card_source: Box<dyn CardSource>,
    pub pacer: Box<dyn Pacer>,
    pub payout_sink: Box<dyn PayoutSink>,
    pub evaluator: Box<dyn HandEvaluator>,
}

impl Collaborators {
    pub fn with_card_source(mut self, source: impl CardSource + 'static) -> Self {
        self.card_source = Box::new(source);
        self
    }

    pub fn with_pacer(mut self, pacer: impl Pacer + 'static) -> Self {
        self.pacer = Box::new(pacer);
        self
    }

    pub fn with_payout_sink(mut self, sink: impl PayoutSink + 'static) -> Self {
        self.payout_sink = Box::new(sink);
        self
    }

    pub fn with_evaluator(mut self, evaluator: impl HandEvaluator + 'static) -> Self {
        self.evaluator = Box::new(evaluator);
        self
    }
}

/// По умолчанию: честно перемешанная колода, настоящая пауза,
/// выплаты только в лог, оценка лучшей пятёрки из семи карт.
impl Default for Collaborators {
    fn default() -> Self {
        Self {
            card_source: Box::new(ShuffledDeck::new(SystemRng)),
            pacer: Box::new(SleepPacer),
            payout_sink: Box::new(LoggingPayoutSink),
            evaluator: Box::new(BestFiveEvaluator),
        }
    }
}

impl fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}
