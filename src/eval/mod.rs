//! Оценка силы покерных рук (Texas Hold'em).
//!
//! Основные функции:
//!   `evaluate_best_hand(hole, board) -> HandRank`
//!   `evaluate_best_five(hole, board) -> BestFive` (ранг + пять карт)
//!
//! `BestFiveEvaluator` – оценщик по умолчанию для шоудауна движка.

pub mod evaluator;
pub mod hand_rank;
pub mod rank_mask;

pub use evaluator::{evaluate_best_five, evaluate_best_hand, BestFive, BestFiveEvaluator};
pub use hand_rank::{describe_hand, hand_category, HandCategory};
