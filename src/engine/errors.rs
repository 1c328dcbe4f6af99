use crate::domain::{Card, ConfigError, PlayerId, TableError};
use crate::engine::collaborators::EvaluatorError;

use thiserror::Error;

/// Ошибки движка раздачи.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("некорректная рассадка: {0}")]
    Table(#[from] TableError),

    #[error("некорректный конфиг: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("раздача уже начата")]
    HandAlreadyStarted,

    #[error("раздача ещё не начата")]
    HandNotStarted,

    #[error("раздача завершена, действия больше не принимаются")]
    HandFinished,

    #[error("сейчас не ход игрока {player}, ожидается ход игрока {expected}")]
    NotPlayersTurn { player: PlayerId, expected: PlayerId },

    #[error("в последовательности карт {got} карт, нужно минимум {needed}")]
    CardSequenceTooShort { needed: usize, got: usize },

    #[error("карта {0} встречается в последовательности дважды")]
    DuplicateCard(Card),

    #[error("некому ходить: все игроки сфолдили или в олл-ине")]
    TurnCursorExhausted,

    #[error("ошибка оценки рук на шоудауне: {0}")]
    Evaluator(#[from] EvaluatorError),

    #[error("внутренняя ошибка: {0}")]
    Internal(&'static str),
}
