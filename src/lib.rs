//! Движок одной раздачи Texas Hold'em (no-limit).
//!
//! Раздача принимает рассадку (`seats[0]` – дилер), конфиг игры и набор
//! внешних соучастников, после чего через `start`/`act` ведёт торговлю
//! от блайндов до шоудауна и отдаёт выплаты по банкам.
//!
//! Слои:
//!   - `domain` – карты, фишки, места, улицы, конфиг;
//!   - `engine` – очередь ходов, ставки, банки, шоудаун, `HandEngine`;
//!   - `eval` – оценка силы рук;
//!   - `infra` – реализации соучастников по умолчанию (RNG, колода, пауза, выплаты);
//!   - `state` – сериализуемый снимок раздачи.

pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
pub mod state;

pub use domain::{Card, Chips, GameConfig, PlayerId, Seat, Street};
pub use engine::{Action, Collaborators, EngineError, HandEngine, HandStatus};
pub use state::HandSnapshot;
