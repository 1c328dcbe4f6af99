//! Движок одной раздачи: очередь ходов, ставки, переход улиц, банк, шоудаун.
//!
//! Высокоуровневый объект: `HandEngine`
//! Основные операции:
//!   - `start` – раздать карты и поставить блайнды
//!   - `act` – применить действие игрока (и, если пора, перейти на следующую улицу)
//!   - `is_valid_bet` – чистая проверка ставки

pub mod actions;
pub mod betting;
pub mod collaborators;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod positions;
pub mod pot;
pub mod showdown;
pub mod side_pots;
pub mod validation;

pub use actions::Action;
pub use betting::BetLedger;
pub use collaborators::{
    CardSource, Collaborators, EvaluatorError, HandEvaluator, Pacer, PayoutSink, RankedHand,
    ShowdownHand, WinnerGroup,
};
pub use errors::EngineError;
pub use game_loop::{HandEngine, HandPhase, HandStatus};
pub use hand_history::{HandEvent, HandEventKind, HandHistory};
pub use pot::{Pot, PotAccountant};
pub use validation::BetRejection;

/// RNG интерфейс для источника карт.
/// Реализации – в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
